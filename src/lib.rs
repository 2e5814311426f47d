//! JSON API over a Home Access Center student portal.
//!
//! Each API call logs into the portal with the caller's credentials
//! ([`crate::core::Hac::login`]), scrapes the pages it needs through the resulting
//! [`crate::core::HacSession`], and returns the extracted records.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod model;
