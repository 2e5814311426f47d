use std::sync::Arc;

use cookie_store::CookieStore;
use log::debug;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use reqwest_cookie_store::CookieStoreMutex;
use reqwest_middleware::ClientBuilder;
use scraper::Html;

use crate::config::HacConfig;
use crate::core::html_parser::input_value;
use crate::core::session::HacSession;
use crate::error::HacError;
use crate::http::browser_headers::{login_headers, session_user_agent};
use crate::http::log_middleware::RequestLogMiddleware;
use crate::model::Credentials;

pub const LOGON_PATH: &str = "HomeAccess/Account/LogOn?ReturnUrl=%2fHomeAccess%2f";

const TOKEN_FIELD: &str = "__RequestVerificationToken";

/// Establishes sessions against one Home Access Center portal.
///
/// Cheap to clone; holds only the shared configuration. Every call to
/// [`Hac::login`] starts from an empty cookie jar.
#[derive(Clone)]
pub struct Hac {
    config: Arc<HacConfig>,
}

impl Hac {
    pub fn new(config: Arc<HacConfig>) -> Self {
        Hac { config }
    }

    /// Runs the logon handshake and returns the cookie-bearing session.
    ///
    /// The portal gives no usable success signal for the form post; a bad
    /// password only shows up when the session is bounced back to the logon
    /// page on its first protected fetch.
    pub async fn login(&self, credentials: &Credentials) -> Result<HacSession, HacError> {
        let cookie_store = Arc::new(CookieStoreMutex::new(CookieStore::default()));
        let client = self.build_client(Arc::clone(&cookie_store))?;
        let logon_url = self.config.page_url(LOGON_PATH)?;

        let response = client.get(logon_url.clone()).send().await?;
        let logon_page = response.error_for_status()?.text().await?;
        let token = extract_verification_token(&logon_page)?;
        debug!("got verification token for {}", credentials.username);

        let form = login_form(&token, &self.config.database, credentials);
        let headers = login_headers(&self.config, logon_url.as_str(), &token)?;
        client
            .post(logon_url)
            .headers(headers)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        debug!("submitted logon form for {}", credentials.username);
        Ok(HacSession::new(client, cookie_store, Arc::clone(&self.config)))
    }

    fn build_client(
        &self,
        cookie_store: Arc<CookieStoreMutex>,
    ) -> Result<reqwest_middleware::ClientWithMiddleware, HacError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&session_user_agent(&self.config))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .cookie_provider(cookie_store)
            .timeout(self.config.timeout)
            .connect_timeout(self.config.connect_timeout)
            .build()?;

        Ok(ClientBuilder::new(client).with(RequestLogMiddleware).build())
    }
}

/// Pulls the anti-forgery token out of the logon page.
pub fn extract_verification_token(html: &str) -> Result<String, HacError> {
    let document = Html::parse_document(html);
    let token = input_value(&document, TOKEN_FIELD).map_err(|err| {
        HacError::authentication(&format!("logon page has no verification token: {err}"))
    })?;
    if token.is_empty() {
        return Err(HacError::authentication("verification token is empty"));
    }
    Ok(token)
}

fn login_form<'a>(
    token: &'a str,
    database: &'a str,
    credentials: &'a Credentials,
) -> [(&'static str, &'a str); 9] {
    [
        (TOKEN_FIELD, token),
        ("SCKTY00328510CustomEnabled", "False"),
        ("SCKTY00436568CustomEnabled", "False"),
        ("Database", database),
        ("VerificationOption", "UsernamePassword"),
        ("LogOnDetails.UserName", credentials.username.as_str()),
        ("tempUN", ""),
        ("tempPW", ""),
        ("LogOnDetails.Password", credentials.password.as_str()),
    ]
}
