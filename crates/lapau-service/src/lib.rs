//! # lapau-service
//!
//! Application layer: the forum's engines as services over the
//! repository ports, plus the request/response DTOs and the first-run
//! seeding collaborator.

pub mod dto;
pub mod seed;
pub mod services;

pub use services::{
    AdService, AuthService, AwardsService, CommentService, FeedService, ModerationService,
    ReactionOutcome, ReactionService, ServiceContext, ServiceError, ServiceResult, ThreadService,
    UserService,
};
