//! Front-desk overview: room counts, revenue by room type, per-type availability
//! and the last day's activity.

use std::collections::BTreeMap;

use contracts::dashboards::{ActivityEntry, DashboardStats, RecentReservation, RoomTypeRevenue};
use contracts::domain::room::Room;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::reports::api::bar_width;
use crate::reports::bar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{occupancy_tone, StatCard};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::error::ApiError;
use crate::shared::http::{get_json, ApiClient, GlooClient};
use crate::shared::icons::icon;
use crate::shared::notifier::use_notifier;
use crate::shared::number_format::{format_currency, format_percent};
use crate::shared::status::reservation_number;

pub const STATS_PATH: &str = "/api/dashboard/stats";
pub const ACTIVITY_PATH: &str = "/api/dashboard/activity";
pub const ROOMS_PATH: &str = "/api/rooms";

pub async fn fetch_stats<C>(client: &C) -> Result<DashboardStats, ApiError>
where
    C: ApiClient + ?Sized,
{
    let stats: DashboardStats = get_json(client, STATS_PATH).await?;
    log::debug!(
        "dashboard: {} rooms, {} revenue rows",
        stats.total_rooms,
        stats.revenue_breakdown.len()
    );
    Ok(stats)
}

pub async fn fetch_activity<C>(client: &C) -> Result<Vec<ActivityEntry>, ApiError>
where
    C: ApiClient + ?Sized,
{
    get_json(client, ACTIVITY_PATH).await
}

/// Room counts of one room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAvailability {
    pub room_type: String,
    pub available: u32,
    pub occupied: u32,
    pub total: u32,
}

impl TypeAvailability {
    /// "8 / 20 available"
    pub fn summary(&self) -> String {
        format!("{} / {} available", self.available, self.total)
    }

    /// Bar width of the occupied share.
    pub fn occupied_width(&self) -> String {
        bar_width(self.occupied as f64, self.total as f64)
    }
}

/// Groups rooms by type name, sorted by name.
pub fn availability_by_type(rooms: &[Room]) -> Vec<TypeAvailability> {
    let mut groups: BTreeMap<String, TypeAvailability> = BTreeMap::new();
    for room in rooms {
        let name = room
            .room_type_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unassigned".to_string());
        let entry = groups.entry(name.clone()).or_insert_with(|| TypeAvailability {
            room_type: name,
            available: 0,
            occupied: 0,
            total: 0,
        });
        entry.total += 1;
        match room.status.as_str() {
            "available" => entry.available += 1,
            "occupied" => entry.occupied += 1,
            _ => {}
        }
    }
    groups.into_values().collect()
}

pub async fn fetch_availability<C>(client: &C) -> Result<Vec<TypeAvailability>, ApiError>
where
    C: ApiClient + ?Sized,
{
    let rooms: Vec<Room> = get_json(client, ROOMS_PATH).await?;
    Ok(availability_by_type(&rooms))
}

/// `(room type, formatted revenue, bar width)` scaled against the best earner.
pub fn revenue_rows(breakdown: &[RoomTypeRevenue]) -> Vec<(String, String, String)> {
    let max = breakdown.iter().map(|r| r.revenue).fold(0.0, f64::max);
    breakdown
        .iter()
        .map(|r| {
            (
                r.room_type.clone(),
                format_currency(r.revenue),
                bar_width(r.revenue, max),
            )
        })
        .collect()
}

pub fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "reservation" => "calendar",
        "payment" => "credit-card",
        _ => "bell-concierge",
    }
}

/// "Yesterday: $1,200.00" under today's revenue.
pub fn revenue_subtitle(stats: &DashboardStats) -> Option<String> {
    stats
        .revenue
        .as_ref()
        .map(|r| format!("Yesterday: {}", format_currency(r.yesterday)))
}

/// "3 available, 1 in maintenance"
pub fn rooms_subtitle(stats: &DashboardStats) -> String {
    format!(
        "{} available, {} in maintenance",
        stats.available_rooms, stats.maintenance_rooms
    )
}

fn recent_row(r: RecentReservation) -> impl IntoView {
    view! {
        <tr>
            <td><strong>{reservation_number(r.id)}</strong></td>
            <td>{r.guest_name}</td>
            <td>{r.room_type_name}</td>
            <td>{format_date(&r.check_in)}</td>
            <td>{format_date(&r.check_out)}</td>
            <td><StatusBadge status=r.status /></td>
        </tr>
    }
}

fn activity_item(entry: ActivityEntry) -> impl IntoView {
    view! {
        <li class="activity__item">
            <span class="activity__icon">{icon(activity_icon(&entry.kind))}</span>
            <span class="activity__text">{entry.text}</span>
            <span class="activity__time">{format_datetime(&entry.time)}</span>
        </li>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notifier = use_notifier();
    let stats: RwSignal<Option<DashboardStats>> = RwSignal::new(None);
    let activity: RwSignal<Vec<ActivityEntry>> = RwSignal::new(Vec::new());
    let availability: RwSignal<Vec<TypeAvailability>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);

    let load = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            let client = GlooClient;
            match fetch_stats(&client).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    log::warn!("dashboard: GET {} failed: {}", STATS_PATH, e);
                    notifier.error("Failed to load dashboard");
                }
            }
            match fetch_availability(&client).await {
                Ok(rows) => availability.set(rows),
                Err(e) => log::warn!("dashboard: GET {} failed: {}", ROOMS_PATH, e),
            }
            match fetch_activity(&client).await {
                Ok(entries) => activity.set(entries),
                Err(e) => log::warn!("dashboard: GET {} failed: {}", ACTIVITY_PATH, e),
            }
            loading.set(false);
        });
    };

    load();

    let stat = move |f: fn(&DashboardStats) -> Option<String>| {
        Signal::derive(move || stats.with(|s| s.as_ref().and_then(f)))
    };
    let has = move |f: fn(&DashboardStats) -> bool| {
        move || stats.with(|s| s.as_ref().map(f).unwrap_or(false))
    };
    let occupancy = move || stats.with(|s| s.as_ref().map(DashboardStats::occupancy).unwrap_or(0.0));

    view! {
        <div class="dashboard">
            <PageHeader title="Dashboard" subtitle="Today at a glance">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                    attr:title="Refresh"
                >
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                {move || view! {
                    <StatCard
                        label="Occupancy"
                        icon_name="bed"
                        value=stat(|s| Some(format_percent(s.occupancy())))
                        tone=occupancy_tone(occupancy())
                        subtitle=stat(|s| Some(format!("{} of {} rooms occupied", s.occupied_rooms, s.total_rooms)))
                    />
                }}
                <StatCard
                    label="Rooms"
                    icon_name="dashboard"
                    value=stat(|s| Some(s.total_rooms.to_string()))
                    subtitle=stat(|s| Some(rooms_subtitle(s)))
                />
                <Show when=has(|s| s.todays_checkins.is_some())>
                    <StatCard
                        label="Today's Check-ins"
                        icon_name="calendar"
                        value=stat(|s| s.todays_checkins.map(|n| n.to_string()))
                        subtitle=stat(|s| s.todays_checkouts.map(|n| format!("{} check-outs", n)))
                    />
                </Show>
                <Show when=has(|s| s.todays_reservations.is_some())>
                    <StatCard
                        label="Today's Reservations"
                        icon_name="calendar"
                        value=stat(|s| s.todays_reservations.map(|n| n.to_string()))
                    />
                </Show>
                <Show when=has(|s| s.total_guests.is_some())>
                    <StatCard
                        label="Guests"
                        icon_name="users"
                        value=stat(|s| s.total_guests.map(|n| n.to_string()))
                    />
                </Show>
                <Show when=has(|s| s.revenue.is_some())>
                    <StatCard
                        label="Revenue Today"
                        icon_name="credit-card"
                        value=stat(|s| s.revenue.as_ref().map(|r| format_currency(r.today)))
                        subtitle=stat(revenue_subtitle)
                    />
                    <StatCard
                        label="Revenue This Month"
                        icon_name="invoices"
                        value=stat(|s| s.revenue.as_ref().map(|r| format_currency(r.month)))
                    />
                </Show>
            </div>

            <div class="dashboard__panels">
                <section class="dashboard__panel">
                    <h2 class="dashboard__section-title">"Revenue by Room Type"</h2>
                    {move || {
                        let rows = stats.with(|s| {
                            s.as_ref().map(|s| revenue_rows(&s.revenue_breakdown)).unwrap_or_default()
                        });
                        if rows.is_empty() {
                            view! { <p class="table__empty">"No revenue yet"</p> }.into_any()
                        } else {
                            rows.into_iter().map(|(name, amount, width)| view! {
                                <div class="dashboard__bar-row">
                                    <div class="dashboard__bar-label">
                                        <span>{name}</span>
                                        <span>{amount}</span>
                                    </div>
                                    {bar(width)}
                                </div>
                            }).collect_view().into_any()
                        }
                    }}
                </section>

                <section class="dashboard__panel">
                    <h2 class="dashboard__section-title">"Room Availability"</h2>
                    {move || {
                        let rows = availability.get();
                        if rows.is_empty() {
                            view! { <p class="table__empty">"No rooms"</p> }.into_any()
                        } else {
                            rows.into_iter().map(|row| view! {
                                <div class="dashboard__bar-row">
                                    <div class="dashboard__bar-label">
                                        <span>{row.room_type.clone()}</span>
                                        <span class="text-muted">{row.summary()}</span>
                                    </div>
                                    {bar(row.occupied_width())}
                                </div>
                            }).collect_view().into_any()
                        }
                    }}
                </section>

                <section class="dashboard__panel">
                    <h2 class="dashboard__section-title">"Recent Activity"</h2>
                    {move || {
                        let entries = activity.get();
                        if entries.is_empty() {
                            view! { <p class="table__empty">"No activity in the last 24 hours"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="activity">
                                    {entries.into_iter().map(activity_item).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </section>
            </div>

            <Show when=has(|s| !s.recent_reservations.is_empty())>
                <h2 class="dashboard__section-title">"Recent Reservations"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Reservation"</th>
                            <th>"Guest"</th>
                            <th>"Room Type"</th>
                            <th>"Check-in"</th>
                            <th>"Check-out"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            stats
                                .with(|s| s.as_ref().map(|s| s.recent_reservations.clone()).unwrap_or_default())
                                .into_iter()
                                .map(recent_row)
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_stats_with_breakdown() {
        let client = MockClient::new().respond(Ok(json!({
            "total_rooms": 20, "occupied_rooms": 5, "available_rooms": 14, "maintenance_rooms": 1,
            "revenue_breakdown": [
                {"room_type": "Deluxe", "revenue": 2000.0},
                {"room_type": "Standard", "revenue": "500.00"}
            ]
        })));
        let stats = block_on(fetch_stats(&client)).unwrap();
        assert_eq!(client.requests()[0].path, STATS_PATH);
        assert_eq!(rooms_subtitle(&stats), "14 available, 1 in maintenance");
        assert_eq!(revenue_subtitle(&stats), None);
        assert_eq!(
            revenue_rows(&stats.revenue_breakdown),
            vec![
                ("Deluxe".to_string(), "$2,000.00".to_string(), "100.0%".to_string()),
                ("Standard".to_string(), "$500.00".to_string(), "25.0%".to_string()),
            ]
        );
    }

    #[test]
    fn test_optional_extras_decode() {
        let client = MockClient::new().respond(Ok(json!({
            "total_rooms": 4, "occupancy_rate": 75.0, "todays_checkins": 3,
            "revenue": {"today": "450.00", "yesterday": 1200, "month": "15230.5"},
            "recent_reservations": [{
                "id": 7, "guest_name": "Ann Lee", "room_type_name": "Deluxe",
                "check_in": "2024-03-15", "check_out": "2024-03-18", "status": "confirmed"
            }]
        })));
        let stats = block_on(fetch_stats(&client)).unwrap();
        assert_eq!(stats.occupancy(), 75.0);
        assert_eq!(revenue_subtitle(&stats).as_deref(), Some("Yesterday: $1,200.00"));
        assert_eq!(stats.recent_reservations[0].check_in, "2024-03-15");
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let client = MockClient::new().respond(Ok(json!({})));
        let stats = block_on(fetch_stats(&client)).unwrap();
        assert_eq!(stats.total_rooms, 0);
        assert_eq!(stats.occupancy(), 0.0);
        assert!(revenue_rows(&stats.revenue_breakdown).is_empty());
    }

    #[test]
    fn test_activity_feed() {
        let client = MockClient::new().respond(Ok(json!([
            {"type": "reservation", "icon": "", "text": "New reservation for Ann Lee",
             "time": "2024-03-15 14:02:00"},
            {"type": "payment", "icon": "", "text": "Payment received - $50.00",
             "time": "2024-03-15 13:00:00"}
        ])));
        let entries = block_on(fetch_activity(&client)).unwrap();
        assert_eq!(client.requests()[0].path, ACTIVITY_PATH);
        assert_eq!(entries.len(), 2);
        assert_eq!(activity_icon(&entries[0].kind), "calendar");
        assert_eq!(activity_icon(&entries[1].kind), "credit-card");
        assert_eq!(activity_icon("room"), "bell-concierge");
    }

    #[test]
    fn test_availability_grouped_by_type() {
        let client = MockClient::new().respond(Ok(json!([
            {"id": 1, "room_number": "101", "room_type_id": 1, "room_type_name": "Standard", "status": "available"},
            {"id": 2, "room_number": "102", "room_type_id": 1, "room_type_name": "Standard", "status": "occupied"},
            {"id": 3, "room_number": "201", "room_type_id": 2, "room_type_name": "Deluxe", "status": "maintenance"},
            {"id": 4, "room_number": "103", "room_type_id": 1, "room_type_name": "Standard", "status": "occupied"},
            {"id": 5, "room_number": "301", "room_type_id": 3, "status": "available"}
        ])));
        let rows = block_on(fetch_availability(&client)).unwrap();
        assert_eq!(client.requests()[0].path, ROOMS_PATH);
        let names: Vec<&str> = rows.iter().map(|r| r.room_type.as_str()).collect();
        assert_eq!(names, vec!["Deluxe", "Standard", "Unassigned"]);
        assert_eq!(rows[1].summary(), "1 / 3 available");
        assert_eq!(rows[1].occupied_width(), "66.7%");
        assert_eq!(rows[0].summary(), "0 / 1 available");
    }
}
