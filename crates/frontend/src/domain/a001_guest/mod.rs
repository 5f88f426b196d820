use contracts::domain::guest::{GuestDetail, GuestListItem, GuestPayload};

use crate::shared::crud::{Cell, DetailBlock, FieldKind, FieldSpec, FormState, Lookup, Resource};
use crate::shared::date_utils::{format_date, format_date_or, format_datetime};
use crate::shared::error::ApiError;
use crate::shared::status::reservation_number;

/// Guests with at least this many reservations count as frequent.
pub const FREQUENT_GUEST_MIN_STAYS: u32 = 3;

const VIP_NOTE: &str = "VIP Guest";

fn is_vip(notes: Option<&str>) -> bool {
    notes.is_some_and(|n| n.to_lowercase().contains("vip"))
}

/// Notes as sent to the server: the VIP marker is appended once when the
/// checkbox is set and the notes do not mention VIP yet.
pub fn notes_with_vip(notes: &str, vip: bool) -> String {
    let notes = notes.trim();
    if !vip || is_vip(Some(notes)) {
        return notes.to_string();
    }
    if notes.is_empty() {
        VIP_NOTE.to_string()
    } else {
        format!("{}\n{}", notes, VIP_NOTE)
    }
}

pub struct Guests;

impl Resource for Guests {
    const KEY: &'static str = "guests";
    const TITLE: &'static str = "Guests";
    const SINGULAR: &'static str = "Guest";
    const ENDPOINT: &'static str = "/api/guests";
    const SEARCH_PARAM: Option<&'static str> = Some("search");
    const CAN_DELETE: bool = false;
    const CAN_VIEW: bool = true;

    type Item = GuestListItem;
    type Detail = GuestDetail;
    type Payload = GuestPayload;

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Email", "Phone", "Reservations", "Last Stay"]
    }

    fn cells(g: &GuestListItem) -> Vec<Cell> {
        vec![
            Cell::Strong(g.name.clone()),
            Cell::text(g.email.clone()),
            match g.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                Some(phone) => Cell::text(phone),
                None => Cell::Muted("N/A".to_string()),
            },
            Cell::text(g.reservation_count.to_string()),
            Cell::text(format_date_or(g.last_stay.as_deref(), "Never")),
        ]
    }

    fn item_id(g: &GuestListItem) -> i64 {
        g.id
    }

    fn filter_options() -> Vec<(&'static str, &'static str)> {
        vec![
            ("all", "All Guests"),
            ("frequent", "Frequent Guests"),
            ("vip", "VIP Guests"),
        ]
    }

    fn local_filter(items: Vec<GuestListItem>, filter: &str) -> Vec<GuestListItem> {
        match filter {
            "frequent" => items
                .into_iter()
                .filter(|g| g.reservation_count >= FREQUENT_GUEST_MIN_STAYS)
                .collect(),
            "vip" => items
                .into_iter()
                .filter(|g| is_vip(g.notes.as_deref()))
                .collect(),
            _ => items,
        }
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Full Name", FieldKind::Text).required(),
            FieldSpec::new("email", "Email", FieldKind::Email).required(),
            FieldSpec::new("phone", "Phone", FieldKind::Tel),
            FieldSpec::new("address", "Address", FieldKind::TextArea),
            FieldSpec::new("notes", "Notes", FieldKind::TextArea),
            FieldSpec::new("vip", "VIP Guest", FieldKind::Checkbox),
        ]
    }

    fn form_from_detail(g: &GuestDetail) -> FormState {
        FormState::for_id(g.id)
            .with("name", g.name.clone())
            .with("email", g.email.clone())
            .with_opt("phone", g.phone.clone())
            .with_opt("address", g.address.clone())
            .with_opt("notes", g.notes.clone())
            .with_flag("vip", is_vip(g.notes.as_deref()))
    }

    fn payload(form: &FormState) -> Result<GuestPayload, ApiError> {
        Ok(GuestPayload {
            name: form.text("name"),
            email: form.text("email"),
            phone: form.text("phone"),
            address: form.text("address"),
            notes: notes_with_vip(form.get("notes"), form.flag("vip")),
        })
    }

    fn details(g: &GuestDetail) -> Vec<DetailBlock> {
        let or_na = |v: &Option<String>| match v.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(s) => Cell::text(s),
            None => Cell::Muted("N/A".to_string()),
        };
        let mut fields = vec![
            ("Name", Cell::Strong(g.name.clone())),
            ("Email", Cell::text(g.email.clone())),
            ("Phone", or_na(&g.phone)),
            ("Address", or_na(&g.address)),
            (
                "Notes",
                match g.notes.as_deref().filter(|s| !s.trim().is_empty()) {
                    Some(n) => Cell::text(n),
                    None => Cell::Muted("No notes".to_string()),
                },
            ),
            (
                "Guest Since",
                Cell::text(g.created_at.as_deref().map(format_datetime).unwrap_or_default()),
            ),
        ];
        if is_vip(g.notes.as_deref()) {
            fields.insert(1, ("Status", Cell::Strong(VIP_NOTE.to_string())));
        }

        let rows = g
            .reservations
            .iter()
            .map(|r| {
                vec![
                    Cell::text(reservation_number(r.id)),
                    Cell::text(r.room_type_name.clone()),
                    Cell::text(format_date(&r.check_in_date)),
                    Cell::text(format_date(&r.check_out_date)),
                    Cell::Amount(r.total_price),
                    Cell::Status(r.status.clone()),
                ]
            })
            .collect();

        vec![
            DetailBlock::Fields(fields),
            DetailBlock::Table {
                title: "Reservations",
                headers: vec!["Reservation", "Room Type", "Check-in", "Check-out", "Total", "Status"],
                rows,
                empty: "No reservations found",
            },
        ]
    }

    fn invalidates() -> Option<Lookup> {
        Some(Lookup::Guests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::{list_path, load_items};
    use crate::shared::crud::resource::{column_count, empty_message};
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    fn john() -> serde_json::Value {
        json!([{"id": 1, "name": "John Smith", "email": "j@x.com", "reservation_count": 4}])
    }

    #[test]
    fn test_frequent_filter_keeps_john() {
        let client = MockClient::new().respond(Ok(john()));
        let rows = block_on(load_items::<Guests, _>(&client, "John", "frequent")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "John Smith");
        // the filter is local: only the search text reaches the server
        assert_eq!(client.requests()[0].path, "/api/guests?search=John");
    }

    #[test]
    fn test_vip_filter_without_vip_notes_is_empty() {
        let client = MockClient::new().respond(Ok(john()));
        let rows = block_on(load_items::<Guests, _>(&client, "John", "vip")).unwrap();
        assert!(rows.is_empty());
        assert_eq!(empty_message::<Guests>(), "No guests found");
    }

    #[test]
    fn test_vip_filter_matches_case_insensitively() {
        let items: Vec<GuestListItem> = serde_json::from_value(json!([
            {"id": 1, "name": "A", "email": "a@x", "notes": "Prefers VIP lounge"},
            {"id": 2, "name": "B", "email": "b@x", "notes": "late arrival"},
            {"id": 3, "name": "C", "email": "c@x"}
        ]))
        .unwrap();
        let vip = Guests::local_filter(items, "vip");
        assert_eq!(vip.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(column_count::<Guests>(), 6);
        assert_eq!(list_path::<Guests>("", "frequent"), "/api/guests");
        let g: GuestListItem =
            serde_json::from_value(json!({"id": 5, "name": "Ann", "email": "a@x"})).unwrap();
        let cells = Guests::cells(&g);
        assert_eq!(cells.len(), Guests::columns().len());
        assert_eq!(cells[2], Cell::Muted("N/A".to_string()));
        assert_eq!(cells[4].display(), "Never");
    }

    #[test]
    fn test_vip_note_appended_once() {
        assert_eq!(notes_with_vip("", true), "VIP Guest");
        assert_eq!(notes_with_vip("Allergic to nuts", true), "Allergic to nuts\nVIP Guest");
        assert_eq!(notes_with_vip("Allergic to nuts\nVIP Guest", true), "Allergic to nuts\nVIP Guest");
        assert_eq!(notes_with_vip("quiet room", false), "quiet room");
    }

    #[test]
    fn test_edit_form_round_trips_vip_flag() {
        let detail: GuestDetail = serde_json::from_value(json!({
            "id": 9, "name": "Eve", "email": "e@x", "notes": "VIP Guest", "reservations": []
        }))
        .unwrap();
        let form = Guests::form_from_detail(&detail);
        assert_eq!(form.id, "9");
        assert!(form.flag("vip"));
        assert_eq!(form.get("phone"), "");
        let payload = Guests::payload(&form).unwrap();
        assert_eq!(payload.notes, "VIP Guest");
    }

    #[test]
    fn test_details_list_reservations() {
        let detail: GuestDetail = serde_json::from_value(json!({
            "id": 1, "name": "John", "email": "j@x",
            "reservations": [{"id": 7, "room_type_name": "Suite", "check_in_date": "2024-03-15",
                "check_out_date": "2024-03-18", "total_price": "450.00", "status": "confirmed"}]
        }))
        .unwrap();
        let blocks = Guests::details(&detail);
        match &blocks[1] {
            DetailBlock::Table { rows, .. } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0][0].display(), "RES-0007");
                assert_eq!(rows[0][2].display(), "Mar 15, 2024");
                assert_eq!(rows[0][4].display(), "$450.00");
            }
            other => panic!("unexpected block {:?}", other),
        }
    }
}
