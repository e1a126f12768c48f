pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RefreshRequest, VerifyRequest};
pub use responses::{LoginResponse, RefreshResponse, TokenVerificationResponse};
