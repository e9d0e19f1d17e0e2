//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built from:
//! the contact name, phone numbers and the birthday. Every field validates at
//! construction and on assignment, so an invalid value is never representable
//! once a constructor or setter has returned `Ok`.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
