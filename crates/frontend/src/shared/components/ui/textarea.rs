use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=textarea_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
