//! User entity - an account with its public profile
//!
//! The password hash is deliberately not part of this entity: it lives
//! only inside the credential store and is fetched separately when a
//! login needs to verify a password.

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Default profile values applied to newly registered accounts
pub const DEFAULT_NAME: &str = "Jacques Cousteau";
pub const DEFAULT_ABOUT: &str = "Explorer";
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// User account with profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with the default profile
    pub fn new(id: UserId, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name: DEFAULT_NAME.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the editable profile fields
    pub fn set_profile(&mut self, name: String, about: String) {
        self.name = name;
        self.about = about;
        self.updated_at = Utc::now();
    }

    /// Update the avatar URL
    pub fn set_avatar(&mut self, avatar: String) {
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }
}
