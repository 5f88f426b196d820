pub mod billing;
pub mod common;
pub mod guest;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
