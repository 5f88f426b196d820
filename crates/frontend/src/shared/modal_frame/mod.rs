use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay + dialog surface with a title bar and close icon.
///
/// Overlay click and the close icon both go through `on_close`; the frame
/// itself never issues requests.
#[component]
pub fn ModalFrame(
    /// Dialog title
    #[prop(into)]
    title: Signal<String>,
    /// Called when the modal should close (overlay click, close icon).
    on_close: Callback<()>,
    /// Extra class for the dialog surface (`div.modal`), e.g. `modal--wide`.
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the dialog and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay must not be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = move || match modal_class.get() {
        Some(cls) => format!("modal {}", cls),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                        attr:title="Close"
                    >
                        {icon("x")}
                    </Button>
                </div>
                {children()}
            </div>
        </div>
    }
}
