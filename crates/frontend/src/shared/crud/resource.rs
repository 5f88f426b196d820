use serde::de::DeserializeOwned;
use serde::Serialize;

use super::form::{FieldSpec, FormState};
use super::lookups::Lookup;
use crate::shared::error::ApiError;

/// One table cell, kept as data so row mapping stays testable without a DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Emphasised text (names, numbers)
    Strong(String),
    /// Secondary text, e.g. "-" placeholders
    Muted(String),
    /// Status token rendered as a status badge
    Status(String),
    /// Raw amount, formatted once at render time
    Amount(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// `value` or a muted "-" when empty.
    pub fn text_or_dash(value: &str) -> Self {
        if value.trim().is_empty() {
            Cell::Muted("-".to_string())
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// Text as it appears on screen.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) | Cell::Strong(s) | Cell::Muted(s) => s.clone(),
            Cell::Status(token) => crate::shared::status::status_display(token).label,
            Cell::Amount(amount) => crate::shared::number_format::format_currency(*amount),
        }
    }
}

/// Content block of the read-only "view" modal.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailBlock {
    Fields(Vec<(&'static str, Cell)>),
    Table {
        title: &'static str,
        headers: Vec<&'static str>,
        rows: Vec<Vec<Cell>>,
        empty: &'static str,
    },
}

/// Resource-specific row button handled by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraAction {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Configuration of one management panel.
///
/// Implementors hold no state; every method maps between wire DTOs and
/// what the generic panel renders or sends.
pub trait Resource: 'static {
    /// Stable identifier (DOM ids, logs)
    const KEY: &'static str;
    /// Plural title, "Guests"
    const TITLE: &'static str;
    /// Singular noun used in messages, "Guest"
    const SINGULAR: &'static str;
    /// Collection path, `/api/guests`
    const ENDPOINT: &'static str;
    /// Query parameter for the search box; `None` hides the search box
    const SEARCH_PARAM: Option<&'static str> = None;
    /// Query parameter for the filter select; `None` with non-empty
    /// [`Resource::filter_options`] means the filter is applied locally
    const FILTER_PARAM: Option<&'static str> = None;
    const CAN_CREATE: bool = true;
    const CAN_EDIT: bool = true;
    const CAN_DELETE: bool = true;
    const CAN_VIEW: bool = false;

    type Item: DeserializeOwned + Clone + Send + Sync + 'static;
    type Detail: DeserializeOwned + Clone + Send + Sync + 'static;
    type Payload: Serialize;

    /// Data column headers; the actions column is added by the panel.
    fn columns() -> Vec<&'static str>;
    fn cells(item: &Self::Item) -> Vec<Cell>;
    fn item_id(item: &Self::Item) -> i64;

    /// `(value, label)` pairs of the filter select, `all` first.
    fn filter_options() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Client-side filtering for panels without a server filter parameter.
    fn local_filter(items: Vec<Self::Item>, _filter: &str) -> Vec<Self::Item> {
        items
    }

    fn fields() -> Vec<FieldSpec> {
        Vec::new()
    }

    fn form_from_detail(detail: &Self::Detail) -> FormState;

    /// Serialize a validated form. May reject values the schema cannot
    /// express (e.g. numbers that do not parse).
    fn payload(form: &FormState) -> Result<Self::Payload, ApiError>;

    fn details(_detail: &Self::Detail) -> Vec<DetailBlock> {
        Vec::new()
    }

    /// Lookups that must be loaded before the first list load.
    fn dependencies() -> Vec<Lookup> {
        Vec::new()
    }

    /// Lookup refreshed after a successful create/update/delete.
    fn invalidates() -> Option<Lookup> {
        None
    }

    fn extra_actions() -> Vec<ExtraAction> {
        Vec::new()
    }
}

/// Whether rows get an actions column at all.
pub fn has_actions<R: Resource>() -> bool {
    R::CAN_VIEW || R::CAN_EDIT || R::CAN_DELETE || !R::extra_actions().is_empty()
}

/// Number of table columns including the actions column.
pub fn column_count<R: Resource>() -> usize {
    R::columns().len() + usize::from(has_actions::<R>())
}

/// "No guests found"
pub fn empty_message<R: Resource>() -> String {
    format!("No {} found", R::TITLE.to_lowercase())
}
