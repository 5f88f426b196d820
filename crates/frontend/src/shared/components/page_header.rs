use leptos::prelude::*;

/// Header row of a section: title, optional subtitle, action buttons on the right.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions() {
        let props = PageHeaderProps::builder()
            .title("Settings")
            .subtitle("Hotel configuration")
            .build();
        assert!(props.children.is_none());
        assert_eq!(props.title, "Settings");
    }
}
