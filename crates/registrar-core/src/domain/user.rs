//! User account record.

use crate::{Entity, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sex as recorded on the user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// A user account with its profile and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub street_address: String,
    pub barangay: String,
    pub city: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub phone_number: Option<String>,
    pub display_photo_uuid: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a non-admin user with an empty address.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        sex: Sex,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into(),
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            street_address: String::new(),
            barangay: String::new(),
            city: String::new(),
            sex,
            birth_date,
            phone_number: None,
            display_photo_uuid: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `First M. Last`, or `First Last` without a middle name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref().and_then(|m| m.chars().next()) {
            Some(initial) => format!("{} {}. {}", self.first_name, initial, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Sets the display photo.
    pub fn set_display_photo(&mut self, display_photo_uuid: String) {
        self.display_photo_uuid = Some(display_photo_uuid);
        self.updated_at = Utc::now();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}
