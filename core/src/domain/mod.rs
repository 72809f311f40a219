//! Domain layer - entities and their invariants

pub mod entities;

pub use entities::otp_record::{OtpRecord, OTP_MAX_LEN, OTP_MIN_LEN, OTP_TTL_SECONDS};
