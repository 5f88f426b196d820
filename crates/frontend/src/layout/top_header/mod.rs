//! Application top bar: sidebar toggle, hotel name and the active section.

use leptos::prelude::*;

use crate::layout::global_context::use_nav;
use crate::shared::icons::icon;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_nav();
    let is_sidebar_visible = move || nav.left_open.get();
    let section_title = move || nav.model.with(|m| m.active().label());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| nav.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Hotel Back Office"</span>
            </div>
            <div class="top-header__section">{section_title}</div>
        </div>
    }
}
