//! Generic list/search/filter/modal CRUD panel.
//!
//! A panel is configured by one [`Resource`] implementation; everything
//! else (loading, table, modal form, delete, lookups) lives here once.

pub mod form;
pub mod lookups;
pub mod ops;
pub mod resource;
pub mod state;
pub mod view;

pub use form::{FieldKind, FieldSpec, FormState, SelectSource};
pub use lookups::{use_lookups, Lookup, LookupStore, SelectOption};
pub use resource::{Cell, DetailBlock, ExtraAction, Resource};
pub use view::{CrudPanel, FormFields};
