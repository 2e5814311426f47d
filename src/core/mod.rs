pub mod hac;
pub mod html_parser;
pub mod pages;
pub mod session;

pub use hac::Hac;
pub use session::HacSession;
