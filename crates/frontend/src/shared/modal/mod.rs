use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Overlay dialog used by every create/edit form
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    /// Footer buttons (저장, 취소 ...)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener is removed when the modal unmounts
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);
    let listener: js_sys::Function = closure.into_js_value().unchecked_into();

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", &listener);
    }
    let listener = StoredValue::new_local(listener);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            listener.with_value(|f| {
                let _ = window.remove_event_listener_with_callback("keydown", f);
            });
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f.run()}</div> })}
            </div>
        </div>
    }
}
