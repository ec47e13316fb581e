//! User-related DTOs.

use serde::{Deserialize, Serialize};

/// Request to update a user's profile and address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub street_address: String,
    pub barangay: String,
    pub city: String,
    pub phone_number: Option<String>,
}

/// Request to set a user's display photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDisplayPhotoRequest {
    pub display_photo_uuid: String,
}
