use contracts::domain::a003_account::{Account, CreateAccountDto, UpdateAccountDto};
use contracts::shared::phone::format_phone;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_account::api;
use crate::domain::a003_account::list::Accounts;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[derive(Clone, Debug)]
enum FormMode {
    Create,
    Edit(Account),
}

enum AccountRequest {
    Create(CreateAccountDto),
    Update(UpdateAccountDto),
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
fn AccountForm(mode: FormMode, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let existing = match &mode {
        FormMode::Edit(account) => Some(account.clone()),
        FormMode::Create => None,
    };
    let is_create = existing.is_none();
    let edit_id = existing.as_ref().map(|a| a.id);

    let username = RwSignal::new(existing.as_ref().map(|a| a.username.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(existing.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let role = RwSignal::new(existing.as_ref().map(|a| a.role).unwrap_or(Role::Customer));
    let email = RwSignal::new(existing.as_ref().and_then(|a| a.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(existing.as_ref().and_then(|a| a.phone.clone()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let email = optional(email.get_untracked());
        let phone = optional(phone.get_untracked());
        let name = name.get_untracked().trim().to_string();
        let role = role.get_untracked();

        let request = match edit_id {
            Some(id) => {
                let dto = UpdateAccountDto { id, name, role, email, phone };
                dto.validate().map(|_| AccountRequest::Update(dto))
            }
            None => {
                let dto = CreateAccountDto {
                    username: username.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                    name,
                    role,
                    email,
                    phone,
                };
                dto.validate().map(|_| AccountRequest::Create(dto))
            }
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match &request {
                AccountRequest::Create(dto) => api::create_account(dto).await,
                AccountRequest::Update(dto) => api::update_account(dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let title = if is_create { "계정 등록".to_string() } else { "계정 수정".to_string() };

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"취소"</button>
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    "저장"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-group">
                <label for="account-username">"아이디"</label>
                <input
                    type="text"
                    id="account-username"
                    disabled=!is_create
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            {is_create.then(|| view! {
                <div class="form-group">
                    <label for="account-password">"비밀번호"</label>
                    <input
                        type="password"
                        id="account-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
            })}
            <div class="form-group">
                <label for="account-name">"이름"</label>
                <input
                    type="text"
                    id="account-name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="account-role">"권한"</label>
                <select
                    id="account-role"
                    prop:value=move || role.get().code()
                    on:change=move |ev| {
                        if let Some(r) = Role::from_code(&event_target_value(&ev)) {
                            role.set(r);
                        }
                    }
                >
                    {Role::ALL.into_iter().map(|r| view! {
                        <option value=r.code()>{r.label()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="account-email">"이메일"</label>
                <input
                    type="email"
                    id="account-email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="account-phone">"연락처"</label>
                <input
                    type="tel"
                    id="account-phone"
                    placeholder="010-0000-0000"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(format_phone(&event_target_value(&ev)))
                />
            </div>
        </Modal>
    }
}

#[component]
pub fn AccountList() -> impl IntoView {
    let state = ListState::<Accounts>::new();
    let form = RwSignal::new(None::<FormMode>);

    view! {
        <PageFrame
            page_id="a003_account--list"
            category=PAGE_CAT_LIST
            title="계정 관리"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form.set(Some(FormMode::Create))>
                    {icon("plus")}
                    " 계정 등록"
                </Button>
            }
        >
            <div class="page__content">
                <ResourceList
                    state=state
                    on_edit=Callback::new(move |row: Account| form.set(Some(FormMode::Edit(row))))
                    search_placeholder="아이디, 이름, 이메일, 연락처"
                />
            </div>
            {move || form.get().map(|mode| view! {
                <AccountForm
                    mode=mode
                    on_close=Callback::new(move |_| form.set(None))
                    on_saved=Callback::new(move |_| {
                        form.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}
