use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus positioned surface. Renders no header or buttons: details
/// screens bring their own so they look the same in a modal and in a tab.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked.
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: String,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when both press and release happen on the overlay, so a text
    // selection that ends outside the surface keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };
    let surface_style = format!("position: relative; {modal_style}");

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class style=surface_style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
