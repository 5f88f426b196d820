use leptos::prelude::*;

/// Labelled `<input>` used by the modal forms.
///
/// Accepts any HTML input type (`date`, `number`, `tel`, ...), which the
/// form schema needs beyond what the table toolbar inputs offer.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "date", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `step` for number inputs; empty means no attribute
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_step = move || step.get().filter(|s| !s.is_empty());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                step=input_step
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
