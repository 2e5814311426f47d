use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER};

use crate::config::HacConfig;
use crate::error::HacError;

const DESKTOP_PLATFORMS: [&str; 3] = [
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// The user agent a new session presents to the portal.
pub fn session_user_agent(config: &HacConfig) -> String {
    if config.random_user_agent {
        random_user_agent()
    } else {
        config.user_agent.clone()
    }
}

/// A desktop Chrome or Edge user agent on a random desktop platform.
pub fn random_user_agent() -> String {
    let mut rng = rand::rng();
    let platform = DESKTOP_PLATFORMS
        .choose(&mut rng)
        .copied()
        .unwrap_or(DESKTOP_PLATFORMS[0]);

    let chrome = 120 + rng.random_range(0..16);
    let browser = if rng.random_bool(0.5) {
        format!("Chrome/{chrome}.0.0.0 Safari/537.36")
    } else {
        format!("Chrome/{chrome}.0.0.0 Safari/537.36 Edg/{chrome}.0.0.0")
    };

    format!("Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) {browser}")
}

/// Headers the browser sends with the logon form post.
///
/// The portal expects the anti-forgery token both in the form body and
/// echoed in a header of the same name.
pub fn login_headers(
    config: &HacConfig,
    referer: &str,
    verification_token: &str,
) -> Result<HeaderMap, HacError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    );
    headers.insert(ORIGIN, HeaderValue::from_str(&config.origin())?);
    headers.insert(REFERER, HeaderValue::from_str(referer)?);
    headers.insert(
        HeaderName::from_static("__requestverificationtoken"),
        HeaderValue::from_str(verification_token)?,
    );
    Ok(headers)
}
