use leptos::prelude::*;

/// Labelled `<select>`; the options list may still be empty while a lookup
/// is loading and fills in when the signal changes.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of a leading empty option, e.g. "Select room type"
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}:{}", val, label)
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
