use leptos::prelude::*;

/// Labelled native date picker; the value is always `YYYY-MM-DD` (or empty).
#[component]
pub fn DateInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new `YYYY-MM-DD` value
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="date-input">
            <span class="date-input__label">{label}</span>
            <input
                type="date"
                class="form__input date-input__field"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
