pub mod sidebar;

pub use sidebar::Sidebar;

use leptos::prelude::*;

use crate::layout::global_context::use_nav;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let nav = use_nav();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !nav.left_open.get()>
            {children()}
        </div>
    }
}
