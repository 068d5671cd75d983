//! Request and response DTOs

mod requests;
mod responses;

pub use requests::{
    AddCommentRequest, CreateThreadRequest, LoginRequest, RegisterRequest, ReportRequest,
    UmkmVerificationRequest,
};
pub use responses::{
    AdResponse, AwardsResponse, CommentResponse, FeedItem, ProfileResponse, ReportResponse,
    ThreadAward, ThreadResponse, UserAward, UserResponse,
};
