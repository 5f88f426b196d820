pub mod api;

use contracts::reports::{GuestReport, OccupancyReport, RevenueReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{occupancy_tone, StatCard};
use crate::shared::components::ui::Select;
use crate::shared::crud::state::RequestGeneration;
use crate::shared::date_utils::format_date;
use crate::shared::http::GlooClient;
use crate::shared::icons::icon;
use crate::shared::notifier::use_notifier;
use crate::shared::number_format::{format_currency, format_percent};
use api::{bar_width, fetch_report, ReportData, ReportKind};

pub(crate) fn bar(width: String) -> impl IntoView {
    view! {
        <div class="report-bar">
            <div class="report-bar__fill" style:width=width></div>
        </div>
    }
}

fn occupancy_view(report: OccupancyReport) -> AnyView {
    let average = report.average_rate();
    let rows = report
        .daily
        .into_iter()
        .map(|day| view! {
            <tr>
                <td>{format_date(&day.date)}</td>
                <td>{day.occupied}</td>
                <td>{day.available}</td>
                <td>{format_percent(day.rate)}</td>
                <td>{bar(bar_width(day.rate, 100.0))}</td>
            </tr>
        })
        .collect_view();

    view! {
        <div class="report">
            <div class="stat-grid">
                <StatCard
                    label="Average Occupancy"
                    icon_name="bed"
                    value=Signal::stored(Some(format_percent(average)))
                    tone=occupancy_tone(average)
                />
                <StatCard label="Total Rooms" icon_name="dashboard" value=Signal::stored(Some(report.total_rooms.to_string())) />
            </div>
            <table class="table">
                <thead>
                    <tr><th>"Date"</th><th>"Occupied"</th><th>"Available"</th><th>"Rate"</th><th></th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn revenue_view(report: RevenueReport) -> AnyView {
    let max_day = report.daily_revenue.iter().map(|d| d.revenue).fold(0.0, f64::max);
    let daily = report
        .daily_revenue
        .into_iter()
        .map(|day| view! {
            <tr>
                <td>{format_date(&day.date)}</td>
                <td>{day.reservation_count}</td>
                <td>{format_currency(day.revenue)}</td>
                <td>{bar(bar_width(day.revenue, max_day))}</td>
            </tr>
        })
        .collect_view();
    let by_type = report
        .room_type_revenue
        .into_iter()
        .map(|t| view! {
            <tr>
                <td>{t.room_type_name}</td>
                <td>{t.reservation_count}</td>
                <td>{format_currency(t.revenue)}</td>
                <td>{format_percent(t.percentage)}</td>
                <td>{bar(bar_width(t.percentage, 100.0))}</td>
            </tr>
        })
        .collect_view();

    view! {
        <div class="report">
            <div class="stat-grid">
                <StatCard label="Total Revenue" icon_name="credit-card" value=Signal::stored(Some(format_currency(report.total_revenue))) />
                <StatCard label="Reservations" icon_name="calendar" value=Signal::stored(Some(report.total_reservations.to_string())) />
            </div>
            <h3>"Daily Revenue"</h3>
            <table class="table">
                <thead>
                    <tr><th>"Date"</th><th>"Reservations"</th><th>"Revenue"</th><th></th></tr>
                </thead>
                <tbody>{daily}</tbody>
            </table>
            <h3>"Revenue by Room Type"</h3>
            <table class="table">
                <thead>
                    <tr><th>"Room Type"</th><th>"Reservations"</th><th>"Revenue"</th><th>"Share"</th><th></th></tr>
                </thead>
                <tbody>{by_type}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn guest_view(report: GuestReport) -> AnyView {
    let top = report
        .top_guests
        .into_iter()
        .map(|g| view! {
            <tr>
                <td><strong>{g.name}</strong></td>
                <td>{if g.email.is_empty() { "-".to_string() } else { g.email }}</td>
                <td>{g.reservation_count}</td>
                <td>{format_currency(g.total_spent)}</td>
            </tr>
        })
        .collect_view();

    view! {
        <div class="report">
            <div class="stat-grid">
                <StatCard label="Total Guests" icon_name="users" value=Signal::stored(Some(report.total_guests.to_string())) />
                <StatCard label="New Guests" icon_name="plus" value=Signal::stored(Some(report.new_guests.to_string())) />
                <StatCard label="Returning Guests" icon_name="refresh" value=Signal::stored(Some(report.returning_guests.to_string())) />
            </div>
            <h3>"Top Guests"</h3>
            <table class="table">
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Reservations"</th><th>"Total Spent"</th></tr>
                </thead>
                <tbody>{top}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn render_report(data: ReportData) -> AnyView {
    match data {
        ReportData::Occupancy(r) => occupancy_view(r),
        ReportData::Revenue(r) => revenue_view(r),
        ReportData::Guest(r) => guest_view(r),
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let notifier = use_notifier();
    let kind = RwSignal::new(ReportKind::Occupancy);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let data: RwSignal<Option<ReportData>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let generation = StoredValue::new(RequestGeneration::default());

    let load = move || {
        let mut ticket = 0;
        generation.update_value(|g| ticket = g.next());
        let (k, s, e) = (kind.get_untracked(), start.get_untracked(), end.get_untracked());
        loading.set(true);
        spawn_local(async move {
            let result = fetch_report(&GlooClient, k, &s, &e).await;
            if !generation.with_value(|g| g.is_current(ticket)) {
                return;
            }
            loading.set(false);
            match result {
                Ok(report) => data.set(Some(report)),
                Err(err) => {
                    if !err.is_validation() {
                        log::warn!("reports: {} failed: {}", k.key(), err);
                    }
                    data.set(None);
                    notifier.error(err.user_message("Failed to load report"));
                }
            }
        });
    };

    load();

    let kind_options = Signal::stored(
        ReportKind::ALL
            .iter()
            .map(|k| (k.key().to_string(), k.label().to_string()))
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="reports">
            <PageHeader title="Reports" subtitle="Occupancy, revenue and guest statistics">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load()>
                    {icon("bar-chart")}
                    " Generate Report"
                </Button>
            </PageHeader>
            <div class="reports__controls">
                <Select
                    label="Report"
                    value=Signal::derive(move || kind.get().key().to_string())
                    on_change=Callback::new(move |key: String| {
                        if let Some(k) = ReportKind::from_key(&key) {
                            kind.set(k);
                            data.set(None);
                            load();
                        }
                    })
                    options=kind_options
                    id="report-kind"
                />
                <DateInput label="Start date" value=start on_change=move |v| start.set(v) />
                <DateInput label="End date" value=end on_change=move |v| end.set(v) />
            </div>
            {move || {
                if loading.get() {
                    view! { <div class="reports__status">"Loading..."</div> }.into_any()
                } else {
                    match data.get() {
                        Some(report) => render_report(report),
                        None => view! { <div class="reports__status">"No data"</div> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
