use std::time::Duration;

use crate::error::AppError;
use crate::utils::debug_enabled;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const FETCH_RETRIES: usize = 3;
const RETRY_BACKOFF_MS: u64 = 250;

/// Blocking HTTP text fetcher with a small retry budget
#[derive(Debug, Clone)]
pub(super) struct Fetcher {
    agent: ureq::Agent,
}

impl Fetcher {
    pub(super) fn new() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build()
            .into();
        Self { agent }
    }

    /// GET `url` and return the decoded body.
    ///
    /// Transport failures are retried with linear backoff; an HTTP error
    /// status is returned immediately.
    pub(super) fn get_text(&self, url: &str) -> Result<String, AppError> {
        let mut attempt = 0;
        loop {
            if debug_enabled() {
                eprintln!("[debug] GET {url} (attempt {})", attempt + 1);
            }
            match self.agent.get(url).call() {
                Ok(response) => {
                    let mut body = response.into_body();
                    return body.read_to_string().map_err(|e| fetch_error(url, e));
                }
                Err(e @ ureq::Error::StatusCode(_)) => return Err(fetch_error(url, e)),
                Err(e) => {
                    attempt += 1;
                    if attempt >= FETCH_RETRIES {
                        return Err(fetch_error(url, e));
                    }
                    if debug_enabled() {
                        eprintln!("[debug] {url} failed: {e}, retrying");
                    }
                    std::thread::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64));
                }
            }
        }
    }
}

fn fetch_error(url: &str, source: ureq::Error) -> AppError {
    AppError::Fetch {
        url: url.to_string(),
        source: Box::new(source),
    }
}
