//! Data transfer objects for the HTTP layer

pub mod otp_dto;

pub use otp_dto::{
    OtpMessage, RetrieveOtpQuery, RetrieveOtpResponse, SubmitOtpRequest, SubmitOtpResponse,
};
