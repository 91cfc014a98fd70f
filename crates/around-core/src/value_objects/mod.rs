//! Value objects for the domain layer

mod user_id;

pub use user_id::{UserId, UserIdParseError};
