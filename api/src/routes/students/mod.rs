//! Student verification routes

pub mod register;
pub mod set_name;
pub mod verify_otp;

use std::sync::Arc;

use sp_core::repositories::StudentRepository;
use sp_core::services::verification::{OtpGenerator, VerificationService};

pub use register::register;
pub use set_name::set_name;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<R, G>
where
    R: StudentRepository,
    G: OtpGenerator,
{
    pub verification_service: Arc<VerificationService<R, G>>,
}

/// Mask an identifier for logging: keep the first two and last two
/// characters, hide the rest
pub(crate) fn mask_identifier(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}
