//! User service trait definition.

use crate::dto::{UpdateDisplayPhotoRequest, UpdateUserRequest};
use async_trait::async_trait;
use registrar_core::{RegistrarResult, User, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists all users.
    async fn list_users(&self) -> RegistrarResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RegistrarResult<User>;

    /// Updates a user's profile and address.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistrarResult<User>;

    /// Sets a user's display photo.
    async fn update_display_photo(&self, id: UserId, request: UpdateDisplayPhotoRequest) -> RegistrarResult<User>;
}
