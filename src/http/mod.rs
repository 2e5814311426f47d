pub mod browser_headers;
pub mod log_middleware;
