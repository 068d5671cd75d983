//! Repository traits

mod repositories;

pub use repositories::{
    AdRepository, CommentRepository, RepoResult, ReportRepository, SessionRepository,
    ThreadRepository, UserRepository,
};
