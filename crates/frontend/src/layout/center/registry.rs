//! Section registry: the single place mapping a [`Section`] to its content.

use leptos::prelude::*;

use crate::dashboard::DashboardPage;
use crate::domain::a001_guest::Guests;
use crate::domain::a003_room::Rooms;
use crate::domain::a004_service::Services;
use crate::domain::a005_reservation::Reservations;
use crate::domain::a006_billing::ui::BillingPage;
use crate::layout::global_context::Section;
use crate::reports::ReportsPage;
use crate::settings::SettingsPage;
use crate::shared::crud::CrudPanel;

pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <DashboardPage /> }.into_any(),
        Section::Reservations => view! { <CrudPanel<Reservations> /> }.into_any(),
        Section::Guests => view! { <CrudPanel<Guests> /> }.into_any(),
        Section::Rooms => view! { <CrudPanel<Rooms> /> }.into_any(),
        Section::Services => view! { <CrudPanel<Services> /> }.into_any(),
        Section::Billing => view! { <BillingPage /> }.into_any(),
        Section::Reports => view! { <ReportsPage /> }.into_any(),
        Section::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
