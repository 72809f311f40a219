//! Business services

pub mod extraction;
pub mod relay;

pub use extraction::extract_otp;
pub use relay::{OtpStoreTrait, RelayConfig, RelayService};
