pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_global_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The sidebar only renders for a signed-in user.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.left_open.get()>
                    <left::Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
