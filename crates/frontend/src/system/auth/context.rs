use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

/// Signed-in user shared through context
#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: RwSignal<Option<UserInfo>>,
    /// False until the stored session has been validated or discarded
    pub ready: RwSignal<bool>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.role == role).unwrap_or(false))
    }

    pub async fn login(self, username: String, password: String) -> Result<UserInfo, ApiError> {
        let response = api::login(username, password).await?;
        storage::save_access_token(&response.access_token);
        storage::save_refresh_token(&response.refresh_token);
        log::info!("signed in as {} ({})", response.user.username, response.user.role.code());
        self.user.set(Some(response.user.clone()));
        Ok(response.user)
    }

    pub async fn logout(self) {
        if let Some(refresh_token) = storage::get_refresh_token() {
            if let Err(e) = api::logout(refresh_token).await {
                log::warn!("logout request failed: {}", e);
            }
        }
        storage::clear_tokens();
        self.user.set(None);
    }
}

async fn restore_session() -> Option<UserInfo> {
    storage::get_access_token()?;

    match api::get_current_user().await {
        Ok(user) => return Some(user),
        Err(e) => log::debug!("stored access token rejected: {}", e),
    }

    // Token invalid, try refresh
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user().await {
                Ok(user) => Some(user),
                Err(_) => {
                    storage::clear_tokens();
                    None
                }
            }
        }
        Err(_) => {
            storage::clear_tokens();
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = AuthState {
        user: RwSignal::new(None),
        ready: RwSignal::new(false),
    };

    // Try to restore session from localStorage on mount
    spawn_local(async move {
        let user = restore_session().await;
        state.user.set(user);
        state.ready.set(true);
    });

    provide_context(state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthProvider not found in component tree")
}
