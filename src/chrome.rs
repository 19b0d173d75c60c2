//! Availability of MDN-documented members in the Chrome extension docs.

use std::collections::HashSet;

use scraper::ElementRef;
use tracing::{debug, info};
use url::Url;

use crate::api::{ApiType, Namespace};
use crate::config::Config;
use crate::error::Result;
use crate::page::Page;

const WITH_ID: &str = "[id]";

pub fn element_ids<'a>(elements: impl IntoIterator<Item = ElementRef<'a>>) -> HashSet<String> {
    elements
        .into_iter()
        .filter_map(|element| element.value().id())
        .map(str::to_owned)
        .collect()
}

/// Sets `availableInChrome` on every member of `namespace` from the ids of its Chrome page.
pub fn annotate(namespace: &mut Namespace, ids: &HashSet<String>) {
    for &api_type in ApiType::ALL.iter() {
        if !namespace.has(api_type) {
            continue;
        }
        info!(category = %api_type, "annotating chrome availability");
        namespace.mark_available(api_type, |name| {
            let available = ids.contains(&api_type.chrome_id(name));
            debug!(%api_type, member = name, available, "chrome availability");
            available
        });
    }
}

/// Loads the Chrome page for `name` and annotates `namespace` in place.
///
/// A missing page is not an error: every member simply ends up unavailable.
pub async fn crawl_chrome<P: Page>(
    page: &mut P,
    config: &Config,
    name: &str,
    namespace: &mut Namespace,
) -> Result<()> {
    let url = Url::parse(&config.chrome_url(name))?;
    info!(namespace = name, %url, "crawling chrome namespace");
    page.navigate(&url).await?;

    let ids = element_ids(page.query_all(WITH_ID)?);
    annotate(namespace, &ids);
    Ok(())
}
