//! OTP relay endpoints
//!
//! `POST /otp` accepts a forwarded SMS and stores the extracted code;
//! `GET /otp` hands the code to the downstream consumer exactly once.

mod retrieve;
mod submit;

pub use retrieve::retrieve_otp;
pub use submit::submit_otp;

use std::sync::Arc;

use relay_core::services::relay::{OtpStoreTrait, RelayService};

/// Shared application state injected into every handler
pub struct AppState<S: OtpStoreTrait> {
    /// The relay service driving submit/retrieve
    pub relay_service: Arc<RelayService<S>>,
}

impl<S: OtpStoreTrait> AppState<S> {
    pub fn new(relay_service: Arc<RelayService<S>>) -> Self {
        Self { relay_service }
    }
}
