//! Repository implementations

mod error;
mod user;

pub use error::{map_db_error, map_unique_violation};
pub use user::PgUserRepository;
