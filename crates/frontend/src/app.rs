use crate::domain::a002_reservation::flow::provide_flow_store;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_flow_store();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
