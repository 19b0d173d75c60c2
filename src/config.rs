use std::path::PathBuf;

pub const MDN_INDEX: &str = "https://developer.mozilla.org/en-US/docs/Mozilla/Add-ons/WebExtensions/API";
pub const CHROME_BASE: &str = "https://developer.chrome.com/extensions/";
pub const OUTPUT_FILE: &str = "api-docs.json";

/// Where the crawl reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MDN WebExtensions API landing page.
    pub mdn_index_url: String,
    /// Prefix of the Chrome docs pages; the namespace name is appended as is.
    pub chrome_base_url: String,
    pub output: PathBuf,
    pub user_agent: String,
}

impl Config {
    pub fn chrome_url(&self, namespace: &str) -> String {
        format!("{}{}", self.chrome_base_url, namespace)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mdn_index_url: MDN_INDEX.to_owned(),
            chrome_base_url: CHROME_BASE.to_owned(),
            output: PathBuf::from(OUTPUT_FILE),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
