use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use scraper::Html;
use url::Url;
use webext_api_map::{Config, Error, Page, Result};

pub const MDN_INDEX: &str = "https://mdn.test/API";
pub const CHROME_BASE: &str = "https://chrome.test/extensions/";

/// In-memory site. Unknown URLs load an empty document, like a 404 page.
pub struct FakePage {
    pages: HashMap<String, String>,
    unreachable: HashSet<String>,
    url: Url,
    document: Html,
    pub visited: Vec<String>,
}

impl FakePage {
    pub fn new() -> Self {
        FakePage {
            pages: HashMap::new(),
            unreachable: HashSet::new(),
            url: Url::parse("about:blank").unwrap(),
            document: Html::new_document(),
            visited: vec![],
        }
    }

    pub fn with(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_owned(), html.to_owned());
        self
    }

    /// Makes navigating to `url` fail like a dropped connection.
    pub fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_owned());
        self
    }
}

impl Page for FakePage {
    async fn navigate(&mut self, url: &Url) -> Result<()> {
        self.visited.push(url.to_string());
        if self.unreachable.contains(url.as_str()) {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("{} is unreachable", url),
            )));
        }
        let html = self.pages.get(url.as_str()).map(String::as_str).unwrap_or("");
        self.document = Html::parse_document(html);
        self.url = url.clone();
        Ok(())
    }

    fn document(&self) -> &Html {
        &self.document
    }

    fn url(&self) -> &Url {
        &self.url
    }
}

pub fn config(output: &Path) -> Config {
    Config {
        mdn_index_url: MDN_INDEX.to_owned(),
        chrome_base_url: CHROME_BASE.to_owned(),
        output: output.to_path_buf(),
        ..Config::default()
    }
}

pub fn index(names: &[&str]) -> String {
    let items: String = names
        .iter()
        .map(|name| format!(r#"<dt class="landingPageList"><a href="API/{0}">{0}</a></dt>"#, name))
        .collect();
    format!("<html><body><dl>{}</dl></body></html>", items)
}

pub fn return_value(code: &str) -> String {
    format!(
        r#"<h2 id="Syntax">Syntax</h2><pre>x()</pre>
           <h3 id="Return_value">Return value</h3>
           <p>A <code>{}</code> that is fulfilled with nothing.</p>"#,
        code
    )
}
