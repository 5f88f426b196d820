use leptos::prelude::*;

use crate::layout::global_context::{use_nav, Section};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    view! {
        <nav class="app-sidebar__content">
            {Section::ALL.into_iter().map(|section| view! {
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || nav.is_active(section)
                    data-section=section.key()
                    on:click=move |_| nav.activate(section)
                >
                    <div class="app-sidebar__item-content">
                        {icon(section.icon())}
                        <span>{section.label()}</span>
                    </div>
                </div>
            }).collect_view()}
        </nav>
    }
}
