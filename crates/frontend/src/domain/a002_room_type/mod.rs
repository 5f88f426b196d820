use contracts::domain::room_type::{split_amenities, RoomType, RoomTypePayload};

use crate::shared::crud::{Cell, FieldKind, FieldSpec, FormState, Lookup, Resource};
use crate::shared::error::ApiError;
use crate::shared::status::truncate_list;

/// Amenities shown in the table before the list is cut with "...".
const AMENITIES_IN_TABLE: usize = 3;

pub struct RoomTypes;

impl Resource for RoomTypes {
    const KEY: &'static str = "room-types";
    const TITLE: &'static str = "Room Types";
    const SINGULAR: &'static str = "Room type";
    const ENDPOINT: &'static str = "/api/room-types";

    type Item = RoomType;
    type Detail = RoomType;
    type Payload = RoomTypePayload;

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Base Price", "Capacity", "Amenities", "Rooms"]
    }

    fn cells(t: &RoomType) -> Vec<Cell> {
        vec![
            Cell::Strong(t.name.clone()),
            Cell::Amount(t.base_price),
            match t.capacity {
                Some(c) => Cell::text(format!("{} {}", c, if c == 1 { "person" } else { "persons" })),
                None => Cell::Muted("-".to_string()),
            },
            if t.amenities.is_empty() {
                Cell::Muted("None".to_string())
            } else {
                Cell::text(truncate_list(&t.amenities, AMENITIES_IN_TABLE))
            },
            Cell::text(t.room_count.to_string()),
        ]
    }

    fn item_id(t: &RoomType) -> i64 {
        t.id
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("base_price", "Base price", FieldKind::Price).required(),
            FieldSpec::new("capacity", "Capacity", FieldKind::Number).default_value("2"),
            FieldSpec::new("amenities", "Amenities (comma separated)", FieldKind::Text),
            FieldSpec::new("description", "Description", FieldKind::TextArea),
        ]
    }

    fn form_from_detail(t: &RoomType) -> FormState {
        FormState::for_id(t.id)
            .with("name", t.name.clone())
            .with("base_price", format!("{:.2}", t.base_price))
            .with_opt("capacity", t.capacity)
            .with("amenities", t.amenities.join(", "))
            .with_opt("description", t.description.clone())
    }

    fn payload(form: &FormState) -> Result<RoomTypePayload, ApiError> {
        Ok(RoomTypePayload {
            name: form.text("name"),
            description: form.text("description"),
            base_price: form.amount("base_price"),
            capacity: form.parse_opt("capacity", "Capacity")?,
            amenities: split_amenities(form.get("amenities")),
        })
    }

    fn invalidates() -> Option<Lookup> {
        Some(Lookup::RoomTypes)
    }
}
