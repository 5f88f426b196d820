use std::marker::PhantomData;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api::{load_settings, save_settings};
use crate::shared::crud::form::validate;
use crate::shared::crud::{FieldSpec, FormFields, FormState};
use crate::shared::error::ApiError;
use crate::shared::http::{ApiClient, GlooClient};
use crate::shared::notifier::use_notifier;

/// A settings document edited as a single form.
pub trait SettingsDoc: DeserializeOwned + Serialize + Default + Clone + 'static {
    const PATH: &'static str;
    const TITLE: &'static str;

    fn fields() -> Vec<FieldSpec>;
    fn to_form(&self) -> FormState;
    fn from_form(form: &FormState) -> Result<Self, ApiError>;
}

/// Validate the form and POST the document.
pub async fn save_doc<T, C>(client: &C, form: &FormState) -> Result<(), ApiError>
where
    T: SettingsDoc,
    C: ApiClient + ?Sized,
{
    validate(&T::fields(), form)?;
    let doc = T::from_form(form)?;
    save_settings(client, T::PATH, &doc).await
}

#[component]
pub fn SettingsForm<T: SettingsDoc>(#[prop(optional)] _doc: PhantomData<T>) -> impl IntoView {
    let notifier = use_notifier();
    let form = RwSignal::new(T::default().to_form());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match load_settings::<T, _>(&GlooClient, T::PATH).await {
            Ok(doc) => form.set(doc.to_form()),
            Err(e) => {
                log::warn!("settings: GET {} failed: {}", T::PATH, e);
                notifier.error("Failed to load settings");
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let current = form.get_untracked();
        spawn_local(async move {
            let result = save_doc::<T, _>(&GlooClient, &current).await;
            saving.set(false);
            match result {
                Ok(()) => notifier.success("Settings saved successfully"),
                Err(e) => notifier.error(e.user_message("Failed to save settings")),
            }
        });
    };

    let busy = Signal::derive(move || loading.get() || saving.get());

    view! {
        <form class="settings-form" on:submit=on_submit>
            <h2 class="settings-form__title">{T::TITLE}</h2>
            <FormFields fields=T::fields() form=form disabled=busy />
            <div class="settings-form__actions">
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </div>
        </form>
    }
}
