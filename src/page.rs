//! A single browsing session.
//!
//! Extraction code only sees the loaded document through [`Page`], so the
//! pipeline can run against the live sites or an in-memory set of pages.

use reqwest::Client;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::util;

#[allow(async_fn_in_trait)]
pub trait Page {
    /// Loads `url` and replaces the current document with it.
    async fn navigate(&mut self, url: &Url) -> Result<()>;

    fn document(&self) -> &Html;

    /// URL of the current document, after redirects.
    fn url(&self) -> &Url;

    fn query_one(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = util::selector(selector)?;
        Ok(self.document().select(&selector).next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = util::selector(selector)?;
        Ok(self.document().select(&selector).collect())
    }

    /// Runs `f` against the loaded document and returns whatever plain data it extracts.
    fn evaluate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Html, &Url) -> Result<T>,
    {
        f(self.document(), self.url())
    }
}

/// [`Page`] over plain HTTP. The reference pages are server rendered, so no script runs.
pub struct HttpPage {
    client: Client,
    url: Url,
    document: Html,
}

impl HttpPage {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(config.user_agent.as_str()).build()?;
        Ok(HttpPage {
            client,
            url: Url::parse("about:blank")?,
            document: Html::new_document(),
        })
    }
}

impl Page for HttpPage {
    async fn navigate(&mut self, url: &Url) -> Result<()> {
        debug!(%url, "navigating");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "page returned an error status");
        }

        self.url = response.url().clone();
        let html = response.text().await?;
        self.document = Html::parse_document(&html);
        Ok(())
    }

    fn document(&self) -> &Html {
        &self.document
    }

    fn url(&self) -> &Url {
        &self.url
    }
}
