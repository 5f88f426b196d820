use crate::layout::global_context::NavState;
use crate::layout::Shell;
use crate::shared::crud::LookupStore;
use crate::shared::notifier::{NotificationHost, Notifier};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Process-wide toasts
    provide_context(Notifier::new());

    // Active section / settings tab and what has been mounted so far
    provide_context(NavState::new());

    // Select options shared by every panel
    provide_context(LookupStore::new());

    view! {
        <Shell />
        <NotificationHost />
    }
}
