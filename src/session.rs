use crate::{
    config::GsfaConfig,
    error::GsfaError,
    page::{HtmlPage, PageTextReader},
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use tracing::{debug, info};

/// Starts page sessions. A session lives until it is dropped.
pub trait Driver {
    type Session: Navigator;

    fn start(&self) -> Result<Self::Session, GsfaError>;
}

#[async_trait]
pub trait Navigator {
    type Page: PageTextReader;

    /// Single attempt, no retry.
    async fn navigate(&mut self, url: &str) -> Result<Self::Page, GsfaError>;
}

#[derive(Debug, Clone)]
pub struct HttpDriver {
    user_agent: String,
}

#[derive(Debug)]
pub struct HttpSession {
    client: Client,
}

impl HttpDriver {
    pub fn new(config: &GsfaConfig) -> Self {
        Self {
            user_agent: config.user_agent().to_string(),
        }
    }
}

impl Driver for HttpDriver {
    type Session = HttpSession;

    fn start(&self) -> Result<HttpSession, GsfaError> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .gzip(true)
            .build()
            .map_err(|e| GsfaError::SessionStart(e.to_string()))?;
        debug!(user_agent = %self.user_agent, "session started");
        Ok(HttpSession { client })
    }
}

#[async_trait]
impl Navigator for HttpSession {
    type Page = HtmlPage;

    async fn navigate(&mut self, url: &str) -> Result<HtmlPage, GsfaError> {
        let failed = |reason: String| GsfaError::Navigation {
            url: url.to_string(),
            reason,
        };

        let target = Url::parse(url).map_err(|e| failed(e.to_string()))?;
        info!(%target, "navigating");
        let html = self
            .client
            .get(target.clone())
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| failed(e.to_string()))?
            .text()
            .await
            .map_err(|e| failed(e.to_string()))?;

        Ok(HtmlPage::parse(target, &html))
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        debug!("session stopped");
    }
}
