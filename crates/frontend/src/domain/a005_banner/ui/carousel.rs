use contracts::domain::a005_banner::Banner;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_banner::api;
use crate::shared::icons::icon;

const ROTATE_MS: u32 = 5000;

/// Index after moving `delta` slides, wrapping at both ends
fn wrap_index(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

/// Rotating strip of the banners active today; renders nothing when there are none
#[component]
pub fn BannerCarousel() -> impl IntoView {
    let banners = RwSignal::new(Vec::<Banner>::new());
    let index = RwSignal::new(0usize);

    spawn_local(async move {
        match api::fetch_active_banners().await {
            Ok(list) => banners.set(list),
            Err(e) => log::warn!("active banners unavailable: {}", e),
        }
    });

    let step = move |delta: isize| {
        let len = banners.with_untracked(|b| b.len());
        index.update(|i| *i = wrap_index(*i, len, delta));
    };

    let timer = StoredValue::new_local(Some(Interval::new(ROTATE_MS, move || step(1))));
    on_cleanup(move || {
        if let Some(interval) = timer.try_update_value(|t| t.take()).flatten() {
            interval.cancel();
        }
    });

    view! {
        <Show when=move || banners.with(|b| !b.is_empty())>
            <section class="banner-carousel">
                {move || {
                    let current = banners.with(|b| b.get(index.get()).cloned());
                    current.map(|banner| {
                        let image = view! { <img class="banner-carousel__image" src=banner.image_url.clone() alt=banner.title.clone() /> };
                        match banner.link_url.clone() {
                            Some(href) => view! { <a href=href class="banner-carousel__link">{image}</a> }.into_any(),
                            None => image.into_any(),
                        }
                    })
                }}
                <Show when=move || banners.with(|b| b.len() > 1)>
                    <button class="banner-carousel__nav banner-carousel__nav--prev" on:click=move |_| step(-1)>
                        {icon("chevron-left")}
                    </button>
                    <button class="banner-carousel__nav banner-carousel__nav--next" on:click=move |_| step(1)>
                        {icon("chevron-right")}
                    </button>
                    <div class="banner-carousel__dots">
                        {move || (0..banners.with(|b| b.len())).map(|i| view! {
                            <span
                                class="banner-carousel__dot"
                                class:banner-carousel__dot--active=move || index.get() == i
                                on:click=move |_| index.set(i)
                            ></span>
                        }).collect_view()}
                    </div>
                </Show>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 3, -1), 2);
        assert_eq!(wrap_index(2, 3, 1), 0);
        assert_eq!(wrap_index(1, 3, 1), 2);
        assert_eq!(wrap_index(0, 0, 1), 0);
    }
}
