//! Settings section: one tab per document or panel.
//!
//! Tabs mount on first selection, like the sections, so each loads once.

pub mod api;
pub mod form;
pub mod general;
pub mod notifications;
pub mod taxes;

use contracts::settings::{GeneralSettings, NotificationSettings};
use leptos::prelude::*;

use crate::domain::a002_room_type::RoomTypes;
use crate::layout::global_context::{use_nav, SettingsTab};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::CrudPanel;
use crate::system::users::Users;
use form::SettingsForm;
use taxes::TaxesEditor;

fn render_tab(tab: SettingsTab) -> AnyView {
    match tab {
        SettingsTab::General => view! { <SettingsForm<GeneralSettings> /> }.into_any(),
        SettingsTab::RoomTypes => view! { <CrudPanel<RoomTypes> /> }.into_any(),
        SettingsTab::Taxes => view! { <TaxesEditor /> }.into_any(),
        SettingsTab::Users => view! { <CrudPanel<Users> /> }.into_any(),
        SettingsTab::Notifications => view! { <SettingsForm<NotificationSettings> /> }.into_any(),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="settings">
            <PageHeader title="Settings" subtitle="Hotel configuration" />
            <div class="settings__tabs">
                {SettingsTab::ALL.into_iter().map(|tab| view! {
                    <button
                        type="button"
                        class="settings__tab"
                        class:settings__tab--active=move || nav.tab_is_active(tab)
                        on:click=move |_| nav.select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </div>
            {SettingsTab::ALL.into_iter().map(|tab| view! {
                <div
                    class="settings__pane"
                    class:settings__pane--hidden=move || !nav.tab_is_active(tab)
                    data-tab-key=tab.key()
                >
                    <Show when=move || nav.tab_is_mounted(tab)>
                        {move || render_tab(tab)}
                    </Show>
                </div>
            }).collect_view()}
        </div>
    }
}
