use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay + surface for a details form opened over a list.
///
/// The frame renders no header and no buttons: the hosted form owns both.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked.
    on_close: Callback<()>,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_itself = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay, otherwise a text selection
    // that ends outside the form would close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(is_overlay_itself(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = pressed_on_overlay.get() && is_overlay_itself(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            // next tick: the overlay must not be dropped inside its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_style = match modal_style {
        Some(extra) if !extra.is_empty() => format!("position: relative; {extra}"),
        _ => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class="modal"
                style=surface_style
                on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
