//! User domain
//!
//! Users are not stored by this service. A request carries an identity that is
//! resolved into a [`CurrentUser`] at the HTTP edge and threaded explicitly
//! through every operation that needs it.

mod entity;

pub use entity::{CurrentUser, UserId};
