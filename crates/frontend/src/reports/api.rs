use contracts::reports::{GuestReport, OccupancyReport, RevenueReport};

use crate::shared::api_utils::with_query;
use crate::shared::date_utils::nights_between;
use crate::shared::error::ApiError;
use crate::shared::http::{get_json, ApiClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Occupancy,
    Revenue,
    Guest,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Occupancy, ReportKind::Revenue, ReportKind::Guest];

    pub fn key(self) -> &'static str {
        match self {
            ReportKind::Occupancy => "occupancy",
            ReportKind::Revenue => "revenue",
            ReportKind::Guest => "guest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Occupancy => "Occupancy Report",
            ReportKind::Revenue => "Revenue Report",
            ReportKind::Guest => "Guest Report",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Occupancy(OccupancyReport),
    Revenue(RevenueReport),
    Guest(GuestReport),
}

/// `/api/reports/<kind>` with the non-empty dates.
pub fn report_path(kind: ReportKind, start: &str, end: &str) -> String {
    with_query(
        &format!("/api/reports/{}", kind.key()),
        &[("start_date", start), ("end_date", end)],
    )
}

/// A range with both ends set must not run backwards.
pub fn check_range(start: &str, end: &str) -> Result<(), ApiError> {
    match nights_between(start, end) {
        Some(days) if days < 0 => Err(ApiError::Validation(
            "Start date must be before end date".to_string(),
        )),
        _ => Ok(()),
    }
}

pub async fn fetch_report<C>(client: &C, kind: ReportKind, start: &str, end: &str) -> Result<ReportData, ApiError>
where
    C: ApiClient + ?Sized,
{
    check_range(start, end)?;
    let path = report_path(kind, start, end);
    let data = match kind {
        ReportKind::Occupancy => ReportData::Occupancy(get_json(client, &path).await?),
        ReportKind::Revenue => ReportData::Revenue(get_json(client, &path).await?),
        ReportKind::Guest => ReportData::Guest(get_json(client, &path).await?),
    };
    log::debug!("reports: loaded {}", path);
    Ok(data)
}

/// CSS width of a bar for `value` on a `max` scale, clamped to `0%..=100%`.
pub fn bar_width(value: f64, max: f64) -> String {
    let pct = if max > 0.0 && value.is_finite() {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{:.1}%", pct)
}
