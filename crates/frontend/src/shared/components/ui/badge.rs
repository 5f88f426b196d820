use leptos::prelude::*;

use crate::shared::status::{status_display, status_variant};

/// Badge for a status token (`available`, `checked-in`, `unpaid`, ...).
///
/// Label and CSS class come from [`status_display`]; the colour from
/// [`status_variant`].
#[component]
pub fn StatusBadge(
    /// Raw status token as sent by the API
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let display = status_display(&status);
    let class = format!(
        "badge badge--{} {}",
        status_variant(&status),
        display.css_class
    );

    view! { <span class=class>{display.label}</span> }
}
