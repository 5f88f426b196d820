pub mod a001_guest;
pub mod a002_room_type;
pub mod a003_room;
pub mod a004_service;
pub mod a005_reservation;
pub mod a006_billing;
