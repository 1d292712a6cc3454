//! OTP generation capability.
//!
//! Pluggable so tests can substitute deterministic codes. The default
//! implementation draws from the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::Rng;

/// Inclusive bounds of a 4-digit passcode
const OTP_MIN: u32 = 1000;
const OTP_MAX: u32 = 9999;

/// Capability for generating one-time passcodes
pub trait OtpGenerator: Send + Sync {
    /// Produce a fresh 4-digit numeric code
    fn generate(&self) -> String;
}

/// OTP generator backed by the OS CSPRNG
///
/// Codes are drawn uniformly from [1000, 9999], so they are always four
/// digits with no leading zero.
pub struct RandomOtpGenerator;

impl OtpGenerator for RandomOtpGenerator {
    fn generate(&self) -> String {
        OsRng.gen_range(OTP_MIN..=OTP_MAX).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_four_digits() {
        let generator = RandomOtpGenerator;
        for _ in 0..100 {
            let code = generator.generate();
            assert_eq!(code.len(), 4);
            let value: u32 = code.parse().unwrap();
            assert!((OTP_MIN..=OTP_MAX).contains(&value));
        }
    }
}
