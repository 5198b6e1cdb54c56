use motiv_core::error::AppError;
use motiv_core::models::FetchedPage;
use motiv_core::traits::Fetcher;
use reqwest::Client;

/// Desktop Chrome User-Agent; some sites refuse obvious bot clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// HTTP fetcher using reqwest.
///
/// Sends one GET per page with a browser User-Agent. No timeout is set
/// beyond the client defaults and the URL is left for reqwest to validate.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_user_agent(BROWSER_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::FetchError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                AppError::FetchError(format!("Connection failed: {e}"))
            } else {
                AppError::FetchError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let raw_html = response
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {e}")))?;

        Ok(FetchedPage {
            url: url.to_string(),
            raw_html,
        })
    }
}
