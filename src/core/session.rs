use std::sync::Arc;

use log::{debug, info};
use reqwest_cookie_store::CookieStoreMutex;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use crate::config::HacConfig;
use crate::core::pages::assignments::{ASSIGNMENTS_PATH, parse_courses};
use crate::core::pages::registration::{REGISTRATION_PATH, parse_registration};
use crate::core::pages::schedule::{CLASSES_PATH, parse_schedule};
use crate::core::pages::term_form::parse_term_form;
use crate::core::pages::transcript::{TRANSCRIPT_PATH, parse_gpa, parse_transcript};
use crate::error::HacError;
use crate::model::{CourseRecord, GpaInfo, ScheduleEntry, StudentInfo, Term, TranscriptYear};

/// Path fragment the portal redirects to when a session is not logged in.
const LOGON_MARKER: &str = "/account/logon";

/// A logged-in portal session, owned by the request that created it.
///
/// Fetches are sequential. Pages are downloaded first and parsed after the
/// last `.await`, so no parse tree is held across a suspension point.
pub struct HacSession {
    client: ClientWithMiddleware,
    cookie_store: Arc<CookieStoreMutex>,
    config: Arc<HacConfig>,
}

impl HacSession {
    pub(crate) fn new(
        client: ClientWithMiddleware,
        cookie_store: Arc<CookieStoreMutex>,
        config: Arc<HacConfig>,
    ) -> Self {
        HacSession {
            client,
            cookie_store,
            config,
        }
    }

    /// Names of the cookies the portal has set on this session.
    pub fn cookie_names(&self) -> Vec<String> {
        match self.cookie_store.lock() {
            Ok(store) => store
                .iter_unexpired()
                .map(|cookie| cookie.name().to_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub async fn student_info(&self) -> Result<StudentInfo, HacError> {
        let html = self.get_page(REGISTRATION_PATH).await?;
        let page = parse_registration(&html)?;

        let fallback = if page.needs_fallback() {
            Some(self.get_page(CLASSES_PATH).await?)
        } else {
            None
        };
        page.into_info(fallback.as_deref())
    }

    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>, HacError> {
        let html = self.get_page(CLASSES_PATH).await?;
        parse_schedule(&html)
    }

    pub async fn current_classes(&self) -> Result<Vec<CourseRecord>, HacError> {
        let html = self.get_page(ASSIGNMENTS_PATH).await?;
        parse_courses(&html)
    }

    pub async fn classes(&self, term: &Term) -> Result<Vec<CourseRecord>, HacError> {
        match term {
            Term::Current => self.current_classes().await,
            Term::Past(quarter) => self.past_classes(quarter).await,
        }
    }

    /// Loads a past report card run by replaying the classwork form with
    /// state scraped from a fresh load of the page.
    pub async fn past_classes(&self, quarter: &str) -> Result<Vec<CourseRecord>, HacError> {
        let live = self.get_page(ASSIGNMENTS_PATH).await?;
        let form = parse_term_form(&live)?;
        let payload = form.payload(quarter);
        info!("requesting report card run {}", form.resolve_run(quarter));

        let html = self.post_page(ASSIGNMENTS_PATH, &payload).await?;
        parse_courses(&html)
    }

    pub async fn transcript(&self) -> Result<Vec<TranscriptYear>, HacError> {
        let html = self.get_page(TRANSCRIPT_PATH).await?;
        parse_transcript(&html)
    }

    pub async fn gpa(&self) -> Result<GpaInfo, HacError> {
        let html = self.get_page(TRANSCRIPT_PATH).await?;
        parse_gpa(&html)
    }

    async fn get_page(&self, path: &str) -> Result<String, HacError> {
        let url = self.config.page_url(path)?;
        let response = self.client.get(url).send().await?;
        read_protected(response).await
    }

    async fn post_page(&self, path: &str, form: &[(String, String)]) -> Result<String, HacError> {
        let url = self.config.page_url(path)?;
        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::REFERER, url.as_str())
            .header(reqwest::header::ORIGIN, self.config.origin())
            .form(form)
            .send()
            .await?;
        read_protected(response).await
    }
}

/// Body of a protected page, or an authentication error when the portal
/// bounced the request to its logon screen.
async fn read_protected(response: reqwest::Response) -> Result<String, HacError> {
    ensure_logged_in(response.url())?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    debug!("fetched {} bytes", body.len());
    Ok(body)
}

fn ensure_logged_in(landed_on: &Url) -> Result<(), HacError> {
    if landed_on.path().to_ascii_lowercase().contains(LOGON_MARKER) {
        return Err(HacError::authentication(
            "redirected to the logon page; session is not authenticated",
        ));
    }
    Ok(())
}
