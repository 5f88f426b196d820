use contracts::domain::reservation::{ReservationDetail, ReservationListItem, ReservationPayload};

use crate::shared::crud::{
    Cell, DetailBlock, FieldKind, FieldSpec, FormState, Lookup, Resource, SelectSource,
};
use crate::shared::date_utils::{format_date, format_datetime, nights_between};
use crate::shared::error::ApiError;
use crate::shared::status::reservation_number;

pub const RESERVATION_STATUSES: &[(&str, &str)] = &[
    ("confirmed", "Confirmed"),
    ("checked-in", "In House"),
    ("checked-out", "Checked Out"),
    ("cancelled", "Cancelled"),
];

/// The list sends `"N/A"` for a reservation with no room yet.
fn room_cell(room_number: Option<&str>) -> Cell {
    match room_number {
        Some(n) if !n.is_empty() && n != "N/A" => Cell::text(format!("Room {}", n)),
        _ => Cell::Muted("Not assigned".to_string()),
    }
}

fn nights_cell(check_in: &str, check_out: &str) -> Cell {
    match nights_between(check_in, check_out) {
        Some(n) if n > 0 => Cell::text(n.to_string()),
        _ => Cell::Muted("-".to_string()),
    }
}

pub struct Reservations;

impl Resource for Reservations {
    const KEY: &'static str = "reservations";
    const TITLE: &'static str = "Reservations";
    const SINGULAR: &'static str = "Reservation";
    const ENDPOINT: &'static str = "/api/reservations";
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const CAN_VIEW: bool = true;

    type Item = ReservationListItem;
    type Detail = ReservationDetail;
    type Payload = ReservationPayload;

    fn columns() -> Vec<&'static str> {
        vec!["Reservation", "Guest", "Room", "Check-in", "Check-out", "Nights", "Total", "Status"]
    }

    fn cells(r: &ReservationListItem) -> Vec<Cell> {
        vec![
            Cell::Strong(reservation_number(r.id)),
            Cell::text(r.guest_name.clone()),
            room_cell(r.room_number.as_deref()),
            Cell::text(format_date(&r.check_in)),
            Cell::text(format_date(&r.check_out)),
            nights_cell(&r.check_in, &r.check_out),
            Cell::Amount(r.total_price),
            Cell::Status(r.status.clone()),
        ]
    }

    fn item_id(r: &ReservationListItem) -> i64 {
        r.id
    }

    fn filter_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("all", "All Reservations")];
        options.extend_from_slice(RESERVATION_STATUSES);
        options
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(
                "guest_id",
                "Guest",
                FieldKind::Select(SelectSource::Lookup(Lookup::Guests)),
            )
            .required()
            .locked_on_edit(),
            FieldSpec::new(
                "room_type_id",
                "Room type",
                FieldKind::Select(SelectSource::Lookup(Lookup::RoomTypes)),
            )
            .required(),
            FieldSpec::new("check_in", "Check-in date", FieldKind::Date).required(),
            FieldSpec::new("check_out", "Check-out date", FieldKind::Date).required(),
            FieldSpec::new("num_guests", "Number of guests", FieldKind::Number)
                .required()
                .default_value("1"),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::Select(SelectSource::Static(RESERVATION_STATUSES)),
            )
            .required()
            .default_value("confirmed"),
            FieldSpec::new("special_requests", "Special requests", FieldKind::TextArea),
        ]
    }

    fn form_from_detail(r: &ReservationDetail) -> FormState {
        FormState::for_id(r.id)
            .with_opt("guest_id", r.guest_id)
            .with_opt("room_type_id", r.room_type_id)
            .with("check_in", r.check_in.clone())
            .with("check_out", r.check_out.clone())
            .with("num_guests", r.num_guests.unwrap_or(1).to_string())
            .with("status", r.status.clone())
            .with_opt("special_requests", r.special_requests.clone())
    }

    fn payload(form: &FormState) -> Result<ReservationPayload, ApiError> {
        Ok(ReservationPayload {
            guest_id: form.parse_opt("guest_id", "Guest")?,
            room_type_id: form.parse_opt("room_type_id", "Room type")?,
            check_in: form.text("check_in"),
            check_out: form.text("check_out"),
            num_guests: form.parse("num_guests", "Number of guests")?,
            status: form.text("status"),
            special_requests: form.text("special_requests"),
        })
    }

    fn details(r: &ReservationDetail) -> Vec<DetailBlock> {
        vec![DetailBlock::Fields(vec![
            ("Reservation", Cell::Strong(reservation_number(r.id))),
            ("Status", Cell::Status(r.status.clone())),
            ("Guest", Cell::text(r.guest_name.clone())),
            ("Room Type", Cell::text(r.room_type_name.clone())),
            ("Room", room_cell(r.room_number.as_deref())),
            ("Check-in", Cell::text(format_date(&r.check_in))),
            ("Check-out", Cell::text(format_date(&r.check_out))),
            ("Nights", nights_cell(&r.check_in, &r.check_out)),
            (
                "Guests",
                Cell::text(r.num_guests.map(|n| n.to_string()).unwrap_or_else(|| "-".into())),
            ),
            ("Total", Cell::Amount(r.total_price)),
            (
                "Special Requests",
                Cell::text_or_dash(r.special_requests.as_deref().unwrap_or_default()),
            ),
            (
                "Booked",
                Cell::text_or_dash(&r.created_at.as_deref().map(format_datetime).unwrap_or_default()),
            ),
        ])]
    }

    /// Both selects of the form are fed by other panels.
    fn dependencies() -> Vec<Lookup> {
        vec![Lookup::Guests, Lookup::RoomTypes]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::{load_items, submit};
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    fn item() -> ReservationListItem {
        serde_json::from_value(json!({
            "id": 1, "guest_name": "John Smith", "room_number": "101",
            "check_in": "2024-03-15", "check_out": "2024-03-18",
            "total_price": "450.00", "status": "checked-in"
        }))
        .unwrap()
    }

    #[test]
    fn test_row_cells() {
        let cells = Reservations::cells(&item());
        let shown: Vec<String> = cells.iter().map(Cell::display).collect();
        assert_eq!(
            shown,
            vec![
                "RES-0001", "John Smith", "Room 101", "Mar 15, 2024", "Mar 18, 2024", "3",
                "$450.00", "In House"
            ]
        );
    }

    #[test]
    fn test_guest_must_be_selected() {
        let client = MockClient::new();
        let form = FormState::blank(&Reservations::fields())
            .with("room_type_id", "2")
            .with("check_in", "2024-03-15")
            .with("check_out", "2024-03-18");
        let err = block_on(submit::<Reservations, _>(&client, &form)).unwrap_err();
        assert_eq!(err.user_message(""), "Please select a guest");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_create_payload() {
        let client = MockClient::new().respond(Ok(json!({"success": true, "id": 12})));
        let form = FormState::blank(&Reservations::fields())
            .with("guest_id", "4")
            .with("room_type_id", "2")
            .with("check_in", "2024-03-15")
            .with("check_out", "2024-03-18")
            .with("num_guests", "2");
        block_on(submit::<Reservations, _>(&client, &form)).unwrap();
        let body = client.requests()[0].body.clone().unwrap();
        assert_eq!(body["guest_id"], json!(4));
        assert_eq!(body["num_guests"], json!(2));
        assert_eq!(body["status"], json!("confirmed"));
        assert_eq!(body["check_in"], json!("2024-03-15"));
        assert_eq!(body["check_out"], json!("2024-03-18"));
        assert!(body.get("check_in_date").is_none());
    }

    #[test]
    fn test_list_decodes_server_rows() {
        let client = MockClient::new().respond(Ok(json!([
            {"id": 1, "guest_name": "John", "room_number": "101", "check_in": "2024-03-15",
             "check_out": "2024-03-18", "status": "confirmed", "total_price": 450.0},
            {"id": 2, "guest_name": "Ann", "room_number": "N/A", "check_in": "2024-04-01",
             "check_out": "2024-04-02", "status": "cancelled", "total_price": 90.0}
        ])));
        let items = block_on(load_items::<Reservations, _>(&client, "", "all")).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(Reservations::cells(&items[0])[2].display(), "Room 101");
        assert_eq!(Reservations::cells(&items[1])[2].display(), "Not assigned");
        assert_eq!(Reservations::cells(&items[0])[5].display(), "3");
    }

    #[test]
    fn test_edit_form_without_ids_keeps_dates() {
        let detail: ReservationDetail = serde_json::from_value(json!({
            "id": 5, "guest_name": "John", "check_in": "2024-03-15",
            "check_out": "2024-03-18", "status": "confirmed"
        }))
        .unwrap();
        let form = Reservations::form_from_detail(&detail).with("room_type_id", "2");
        assert_eq!(form.get("check_in"), "2024-03-15");
        assert_eq!(form.get("guest_id"), "");

        let client = MockClient::new().respond(Ok(json!({"success": true})));
        block_on(submit::<Reservations, _>(&client, &form)).unwrap();
        let request = &client.requests()[0];
        assert_eq!(request.path, "/api/reservations/5");
        let body = request.body.clone().unwrap();
        assert!(body.get("guest_id").is_none());
        assert_eq!(body["room_type_id"], json!(2));
    }
}
