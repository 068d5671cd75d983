//! Authentication service
//!
//! Registration and sign-in are a plain username lookup against the
//! `users` slice. There is no password storage and no hashing; the
//! login form's password field is accepted and ignored.

use tracing::{info, instrument};

use lapau_core::{DomainError, User};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use validator::Validate;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign them in
    ///
    /// Usernames are unique with a case-sensitive compare. A duplicate
    /// refuses the registration without mutating any state.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken(request.username).into());
        }

        let user = User::new(self.ctx.generate_id(), request.username);
        self.ctx.user_repo().create(&user).await?;
        self.ctx
            .session_repo()
            .set_current_user(Some(&user))
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(UserResponse::from(&user))
    }

    /// Sign in by username
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or(DomainError::UnknownUsername(request.username))?;

        self.ctx
            .session_repo()
            .set_current_user(Some(&user))
            .await?;

        info!(user_id = %user.id, "User signed in");
        Ok(UserResponse::from(&user))
    }

    /// Sign out
    #[instrument(skip(self))]
    pub async fn logout(&self) -> ServiceResult<()> {
        self.ctx.session_repo().set_current_user(None).await?;
        info!("User signed out");
        Ok(())
    }

    /// Get the signed-in user, if any
    ///
    /// The session slice stores a snapshot; reads resolve through the
    /// users collection so a stale snapshot is never served.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> ServiceResult<Option<UserResponse>> {
        let Some(snapshot) = self.ctx.session_repo().current_user().await? else {
            return Ok(None);
        };

        let user = self
            .ctx
            .user_repo()
            .find_by_id(snapshot.id)
            .await?
            .unwrap_or(snapshot);

        Ok(Some(UserResponse::from(&user)))
    }
}
