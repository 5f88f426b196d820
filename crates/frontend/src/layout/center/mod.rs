pub mod registry;

use leptos::prelude::*;

use crate::layout::global_context::{use_nav, Section};
use registry::render_section;

/// One wrapper per section. A section renders on its first activation and is
/// only hidden afterwards, so its panel state survives navigation.
#[component]
fn SectionPage(section: Section) -> impl IntoView {
    let nav = use_nav();

    view! {
        <div
            class="section"
            class:section--hidden=move || !nav.is_active(section)
            data-section=section.key()
        >
            <Show when=move || nav.is_mounted(section)>
                {move || render_section(section)}
            </Show>
        </div>
    }
}

#[component]
pub fn Center() -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content">
            {Section::ALL
                .into_iter()
                .map(|section| view! { <SectionPage section=section /> })
                .collect_view()}
        </div>
    }
}
