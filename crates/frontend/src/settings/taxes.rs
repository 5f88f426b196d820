use contracts::settings::TaxSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::api::{load_settings, save_taxes, TaxRow, TAXES_PATH};
use crate::shared::http::GlooClient;
use crate::shared::icons::icon;
use crate::shared::notifier::use_notifier;

const APPLIES_TO: &[(&str, &str)] = &[
    ("all", "All charges"),
    ("rooms", "Rooms"),
    ("services", "Services"),
];

/// Tax lines edited in place and saved as one document.
#[component]
pub fn TaxesEditor() -> impl IntoView {
    let notifier = use_notifier();
    let rows: RwSignal<Vec<TaxRow>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match load_settings::<TaxSettings, _>(&GlooClient, TAXES_PATH).await {
            Ok(settings) => rows.set(settings.taxes.iter().map(TaxRow::from).collect()),
            Err(e) => {
                log::warn!("settings: GET {} failed: {}", TAXES_PATH, e);
                notifier.error("Failed to load settings");
            }
        }
        loading.set(false);
    });

    let edit = move |index: usize, apply: fn(&mut TaxRow, String), value: String| {
        rows.update(|rs| {
            if let Some(row) = rs.get_mut(index) {
                apply(row, value);
            }
        });
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let current = rows.get_untracked();
        spawn_local(async move {
            let result = save_taxes(&GlooClient, &current).await;
            saving.set(false);
            match result {
                Ok(()) => notifier.success("Settings saved successfully"),
                Err(e) => notifier.error(e.user_message("Failed to save settings")),
            }
        });
    };

    let table_rows = move || {
        let count = rows.with(|rs| rs.len());
        if count == 0 {
            let text = if loading.get() { "Loading..." } else { "No taxes configured" };
            return view! {
                <tr><td class="table__empty" colspan="5">{text}</td></tr>
            }
            .into_any();
        }
        (0..count)
            .map(|i| {
                let field = move |f: fn(&TaxRow) -> String| {
                    move || rows.with(|rs| rs.get(i).map(f).unwrap_or_default())
                };
                view! {
                    <tr>
                        <td>
                            <input
                                class="form__input"
                                prop:value=field(|r| r.name.clone())
                                on:input=move |ev| edit(i, |r, v| r.name = v, event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                class="form__input"
                                type="number"
                                step="0.01"
                                min="0"
                                max="100"
                                prop:value=field(|r| r.rate.clone())
                                on:input=move |ev| edit(i, |r, v| r.rate = v, event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <select
                                class="form__select"
                                prop:value=field(|r| r.applies_to.clone())
                                on:change=move |ev| edit(i, |r, v| r.applies_to = v, event_target_value(&ev))
                            >
                                {APPLIES_TO.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </select>
                        </td>
                        <td>
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || rows.with(|rs| rs.get(i).map(|r| r.is_active).unwrap_or(false))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    rows.update(|rs| {
                                        if let Some(row) = rs.get_mut(i) {
                                            row.is_active = checked;
                                        }
                                    });
                                }
                            />
                        </td>
                        <td>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| rows.update(|rs| {
                                    if i < rs.len() {
                                        rs.remove(i);
                                    }
                                })
                                attr:title="Remove"
                            >
                                {icon("trash")}
                            </Button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="settings-form">
            <h2 class="settings-form__title">"Taxes"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Rate (%)"</th>
                        <th>"Applies To"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{table_rows}</tbody>
            </table>
            <div class="settings-form__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| rows.update(|rs| rs.push(TaxRow::default()))
                >
                    {icon("plus")}
                    " Add Tax"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </Button>
            </div>
        </div>
    }
}
