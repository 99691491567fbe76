use contracts::domain::a009_manager::{Manager, ManagerStatus, UpdateManagerStatusDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a009_manager::api;
use crate::domain::a009_manager::list::AdminManagers;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
fn ManagerStatusForm(manager: Manager, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let id = manager.id;
    let status = RwSignal::new(manager.status);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = UpdateManagerStatusDto {
            id,
            status: status.get_untracked(),
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_manager_status(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=format!("매니저 상태 변경 - {}", manager.name)
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"취소"</button>
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    "저장"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="radio-group">
                {ManagerStatus::ALL.into_iter().map(|s| view! {
                    <label class="radio">
                        <input
                            type="radio"
                            name="manager-status"
                            prop:checked=move || status.get() == s
                            on:change=move |_| status.set(s)
                        />
                        {format!(" {}", s.label())}
                    </label>
                }).collect_view()}
            </div>
        </Modal>
    }
}

#[component]
pub fn ManagerList() -> impl IntoView {
    let state = ListState::<AdminManagers>::new();
    let editing = RwSignal::new(None::<Manager>);

    view! {
        <PageFrame page_id="a009_manager--list" category=PAGE_CAT_LIST title="매니저 관리">
            <div class="page__content">
                <ResourceList
                    state=state
                    on_edit=Callback::new(move |row: Manager| editing.set(Some(row)))
                    search_placeholder="이름, 연락처, 지역"
                />
            </div>
            {move || editing.get().map(|manager| view! {
                <ManagerStatusForm
                    manager=manager
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}
