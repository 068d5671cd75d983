//! User service
//!
//! Profile reads and the premium / UMKM upgrade paths.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use lapau_core::{ThreadStatus, User};

use crate::dto::{ProfileResponse, ThreadResponse, UmkmVerificationRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self.require_user(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get a profile view: the user plus their approved threads,
    /// newest first
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let user = self.require_user(user_id).await?;

        let threads = self.ctx.thread_repo().list_by_author(user.id).await?;
        let threads = threads
            .iter()
            .filter(|t| t.status == ThreadStatus::Approved)
            .map(ThreadResponse::from)
            .collect();

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            threads,
        })
    }

    /// Grant the premium badge, with an optional name color
    #[instrument(skip(self))]
    pub async fn upgrade_to_premium(
        &self,
        user_id: Uuid,
        color: Option<String>,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.require_user(user_id).await?;

        user.grant_premium(color);
        self.ctx.user_repo().update(&user).await?;
        self.sync_session(&user).await?;

        info!(user_id = %user.id, "User upgraded to premium");
        Ok(UserResponse::from(&user))
    }

    /// Mark the user as a verified UMKM owner
    #[instrument(skip(self, request))]
    pub async fn verify_umkm(
        &self,
        user_id: Uuid,
        request: UmkmVerificationRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.require_user(user_id).await?;
        request.validate()?;

        user.verify_umkm(request.name, request.description);
        self.ctx.user_repo().update(&user).await?;
        self.sync_session(&user).await?;

        info!(user_id = %user.id, "UMKM verification granted");
        Ok(UserResponse::from(&user))
    }

    /// Set or clear the avatar color
    #[instrument(skip(self))]
    pub async fn set_avatar_color(
        &self,
        user_id: Uuid,
        color: Option<String>,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.require_user(user_id).await?;

        user.avatar_color = color;
        self.ctx.user_repo().update(&user).await?;
        self.sync_session(&user).await?;

        Ok(UserResponse::from(&user))
    }

    async fn require_user(&self, user_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Keep the persisted session snapshot in step after a profile edit
    async fn sync_session(&self, user: &User) -> ServiceResult<()> {
        if let Some(current) = self.ctx.session_repo().current_user().await? {
            if current.id == user.id {
                self.ctx.session_repo().set_current_user(Some(user)).await?;
            }
        }
        Ok(())
    }
}
