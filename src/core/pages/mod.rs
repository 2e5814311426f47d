//! One extractor per portal page. Each is a pure function of the fetched
//! HTML; fetching lives in [`crate::core::session`].

pub mod assignments;
pub mod registration;
pub mod schedule;
pub mod term_form;
pub mod transcript;
