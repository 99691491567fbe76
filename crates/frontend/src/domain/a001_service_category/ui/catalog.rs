use contracts::domain::a001_service_category::{ServiceCatalog, ServiceCategoryNode};
use contracts::domain::a002_reservation::pricing::format_won;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_service_category::api;

fn price_label(node: &ServiceCategoryNode) -> String {
    if node.price == 0 {
        "무료".to_string()
    } else {
        format_won(node.price)
    }
}

#[component]
fn ServiceCard(service: ServiceCategoryNode) -> impl IntoView {
    let included: Vec<String> = service.included_items().map(|n| n.name.clone()).collect();
    let add_ons: Vec<(String, String)> = service
        .paid_add_ons()
        .map(|n| (n.name.clone(), format!("+{} / +{}시간", format_won(n.price), n.duration)))
        .collect();

    view! {
        <div class="service-card">
            <div class="service-card__header">
                <h3 class="service-card__title">{service.name.clone()}</h3>
                <span class="service-card__price">{price_label(&service)}</span>
            </div>
            <div class="service-card__meta">{format!("기본 {}시간", service.duration)}</div>
            {service.description.clone().map(|d| view! { <p class="service-card__desc">{d}</p> })}
            {(!included.is_empty()).then(|| view! {
                <div class="service-card__section">
                    <span class="service-card__label">"포함 항목"</span>
                    <ul>{included.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}</ul>
                </div>
            })}
            {(!add_ons.is_empty()).then(|| view! {
                <div class="service-card__section">
                    <span class="service-card__label">"추가 서비스"</span>
                    <ul>
                        {add_ons.into_iter().map(|(name, extra)| view! {
                            <li>{name}" "<span class="service-card__extra">{extra}</span></li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}

/// Read-only catalog of main services for the landing page
#[component]
pub fn ServiceCatalogBrowse() -> impl IntoView {
    let catalog = RwSignal::new(ServiceCatalog::default());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_catalog().await {
            Ok(c) => catalog.set(c),
            Err(e) => error.set(Some(format!("서비스 목록을 불러오지 못했습니다: {}", e))),
        }
    });

    view! {
        <section class="catalog">
            <div class="catalog__header">
                <h2>"서비스 안내"</h2>
                <A href="/reservations/new" attr:class="button button--primary">"예약하기"</A>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="catalog__grid">
                {move || catalog.with(|c| {
                    c.main_services()
                        .filter(|s| !s.is_free_main())
                        .cloned()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()
                })}
            </div>
        </section>
    }
}
