//! Wire types exchanged between the hotel back office client and its REST API.
//!
//! Every struct here mirrors one JSON shape of the `/api/...` surface. Identifiers
//! are server-assigned integers; the client never invents them.

pub mod dashboards;
pub mod domain;
pub mod reports;
pub mod settings;
pub mod system;
