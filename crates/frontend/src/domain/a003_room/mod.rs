use contracts::domain::room::{Room, RoomPayload};

use crate::shared::crud::{Cell, FieldKind, FieldSpec, FormState, Lookup, Resource, SelectSource};
use crate::shared::error::ApiError;

pub const ROOM_STATUSES: &[(&str, &str)] = &[
    ("available", "Available"),
    ("occupied", "Occupied"),
    ("maintenance", "Maintenance"),
    ("cleaning", "Cleaning"),
];

pub struct Rooms;

impl Resource for Rooms {
    const KEY: &'static str = "rooms";
    const TITLE: &'static str = "Rooms";
    const SINGULAR: &'static str = "Room";
    const ENDPOINT: &'static str = "/api/rooms";
    const FILTER_PARAM: Option<&'static str> = Some("status");

    type Item = Room;
    type Detail = Room;
    type Payload = RoomPayload;

    fn columns() -> Vec<&'static str> {
        vec!["Room", "Type", "Floor", "Status", "Rate", "Notes"]
    }

    fn cells(r: &Room) -> Vec<Cell> {
        vec![
            Cell::Strong(r.room_number.clone()),
            Cell::text_or_dash(r.room_type_name.as_deref().unwrap_or_default()),
            match r.floor {
                Some(f) => Cell::text(f.to_string()),
                None => Cell::Muted("-".to_string()),
            },
            Cell::Status(r.status.clone()),
            Cell::Amount(r.base_price),
            Cell::text_or_dash(r.notes.as_deref().unwrap_or_default()),
        ]
    }

    fn item_id(r: &Room) -> i64 {
        r.id
    }

    fn filter_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("all", "All Statuses")];
        options.extend_from_slice(ROOM_STATUSES);
        options
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("room_number", "Room number", FieldKind::Text).required(),
            FieldSpec::new(
                "room_type_id",
                "Room type",
                FieldKind::Select(SelectSource::Lookup(Lookup::RoomTypes)),
            )
            .required()
            .locked_on_edit(),
            FieldSpec::new("floor", "Floor", FieldKind::Number),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::Select(SelectSource::Static(ROOM_STATUSES)),
            )
            .required()
            .default_value("available"),
            FieldSpec::new("notes", "Notes", FieldKind::TextArea),
        ]
    }

    fn form_from_detail(r: &Room) -> FormState {
        FormState::for_id(r.id)
            .with("room_number", r.room_number.clone())
            .with("room_type_id", r.room_type_id.to_string())
            .with_opt("floor", r.floor)
            .with("status", r.status.clone())
            .with_opt("notes", r.notes.clone())
    }

    fn payload(form: &FormState) -> Result<RoomPayload, ApiError> {
        Ok(RoomPayload {
            room_number: form.text("room_number"),
            room_type_id: form.parse("room_type_id", "Room type")?,
            floor: form.parse_opt("floor", "Floor")?,
            status: form.text("status"),
            notes: form.text("notes"),
        })
    }

    /// The type select of the room form is fed by the room types list.
    fn dependencies() -> Vec<Lookup> {
        vec![Lookup::RoomTypes]
    }

    /// Room counts per type change with every room mutation.
    fn invalidates() -> Option<Lookup> {
        Some(Lookup::RoomTypes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::{delete_confirmed, delete_failed_message, list_path, submit};
    use crate::shared::crud::resource::column_count;
    use crate::shared::crud::state::PanelState;
    use crate::shared::http::mock::MockClient;
    use crate::shared::http::Method;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_status_filter_goes_to_server() {
        assert_eq!(list_path::<Rooms>("", "all"), "/api/rooms");
        assert_eq!(list_path::<Rooms>("", "cleaning"), "/api/rooms?status=cleaning");
        assert_eq!(column_count::<Rooms>(), 7);
    }

    #[test]
    fn test_conflict_on_delete_is_shown_verbatim() {
        let client = MockClient::new().respond(Err(ApiError::from_error_body(
            409,
            r#"{"error":"Room has active reservation"}"#,
        )));
        let mut state: PanelState<Room, Room> = PanelState::default();
        let ticket = state.begin_load();
        let room: Room = serde_json::from_value(json!({
            "id": 7, "room_number": "101", "room_type_id": 2, "status": "occupied", "base_price": 120
        }))
        .unwrap();
        state.apply_items(ticket, vec![room.clone()]);

        let err = block_on(delete_confirmed::<Rooms, _>(&client, 7, |_| true)).unwrap_err();
        assert_eq!(
            err.user_message(&delete_failed_message::<Rooms>()),
            "Room has active reservation"
        );
        assert_eq!(client.requests()[0].method, Method::Delete);
        assert_eq!(client.requests()[0].path, "/api/rooms/7");
        assert_eq!(state.items, vec![room]);
    }

    #[test]
    fn test_room_type_required() {
        let client = MockClient::new();
        let form = FormState::blank(&Rooms::fields()).with("room_number", "204");
        let err = block_on(submit::<Rooms, _>(&client, &form)).unwrap_err();
        assert_eq!(err.user_message(""), "Please select a room type");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_room_type_locked_on_edit() {
        let fields = Rooms::fields();
        let locked: Vec<&str> = fields.iter().filter(|f| f.locked_on_edit).map(|f| f.name).collect();
        assert_eq!(locked, vec!["room_type_id"]);
    }

    #[test]
    fn test_edit_form_uses_placeholders_for_missing_values() {
        let room: Room = serde_json::from_value(json!({
            "id": 3, "room_number": "305", "room_type_id": 1, "status": "available", "floor": null
        }))
        .unwrap();
        let form = Rooms::form_from_detail(&room);
        assert_eq!(form.get("floor"), "");
        assert_eq!(form.get("notes"), "");
        assert_eq!(form.get("room_type_id"), "1");
        let payload = Rooms::payload(&form).unwrap();
        assert_eq!(payload.floor, None);
        assert_eq!(payload.room_type_id, 1);
    }
}
