use scraper::{ElementRef, Selector};
use url::Url;

use crate::error::{Error, Result};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css.to_owned(),
        message: e.to_string(),
    })
}

pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Absolute URL of an anchor's `href`, as a browser would report it.
pub(crate) fn href(element: ElementRef<'_>, base: &Url) -> Result<Url> {
    match element.value().attr("href") {
        Some(href) => Ok(base.join(href)?),
        None => Err(Error::MissingHref {
            name: text(element),
        }),
    }
}

/// `browser.tabs.query` -> `query`
pub fn member_name(qualified: &str) -> &str {
    qualified.trim().rsplit('.').next().unwrap_or_default()
}

/// `browser.tabs.query()` -> `query`
pub fn function_name(qualified: &str) -> &str {
    let name = member_name(qualified);
    name.strip_suffix("()").unwrap_or(name)
}
