//! Domain model for the signup wizard: the field catalog, the registration
//! record, the closed country/city lists and the pure validator.
//!
//! Nothing in here knows about terminals or rendering; the UI crate drives
//! the form entirely through [`FieldId`], [`Registration`] and [`validate`].

pub mod field;
pub mod location;
pub mod record;
pub mod validate;

pub use field::{FieldId, FieldKind};
pub use location::{City, Country};
pub use record::Registration;
pub use validate::{validate, ErrorMap};
