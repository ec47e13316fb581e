//! User service implementation.

use crate::dto::{UpdateDisplayPhotoRequest, UpdateUserRequest};
use crate::invalidation::user_plan;
use crate::user_service::UserService;
use async_trait::async_trait;
use registrar_cache::{CacheAside, CacheTarget, Namespace};
use registrar_core::{RegistrarError, RegistrarResult, User, UserId};
use registrar_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service with cache-aside reads.
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    cache: Arc<CacheAside>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>, cache: Arc<CacheAside>) -> Self {
        Self {
            user_repository,
            cache,
        }
    }

    async fn find_user(&self, id: UserId) -> RegistrarResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistrarError::not_found("User", id))
    }

    async fn save_and_invalidate(&self, user: &User) -> RegistrarResult<User> {
        let updated = self.user_repository.update(user).await?;
        self.cache.invalidate_plan(&user_plan(&updated)).await;
        Ok(updated)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> RegistrarResult<Vec<User>> {
        debug!("Listing users");

        self.cache
            .get_or_load(&CacheTarget::collection(Namespace::User), || {
                self.user_repository.find_all()
            })
            .await
    }

    async fn get_user(&self, id: UserId) -> RegistrarResult<User> {
        debug!("Getting user: {}", id);

        self.cache
            .get_or_load(&CacheTarget::item(Namespace::User, id), || self.find_user(id))
            .await
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> RegistrarResult<User> {
        debug!("Updating user: {}", id);

        let mut user = self.find_user(id).await?;
        user.first_name = request.first_name;
        user.middle_name = request.middle_name;
        user.last_name = request.last_name;
        user.street_address = request.street_address;
        user.barangay = request.barangay;
        user.city = request.city;
        user.phone_number = request.phone_number;
        user.updated_at = chrono::Utc::now();

        let updated = self.save_and_invalidate(&user).await?;

        info!("User updated: {}", id);
        Ok(updated)
    }

    async fn update_display_photo(&self, id: UserId, request: UpdateDisplayPhotoRequest) -> RegistrarResult<User> {
        debug!("Updating display photo for user: {}", id);

        let mut user = self.find_user(id).await?;
        user.set_display_photo(request.display_photo_uuid);

        let updated = self.save_and_invalidate(&user).await?;

        info!("Display photo updated for user: {}", id);
        Ok(updated)
    }
}
