//! Domain entities

pub mod otp_record;
