extern crate reqwest;
extern crate scraper;

pub mod api;
pub mod chrome;
pub mod config;
pub mod error;
pub mod mdn;
pub mod page;
pub(crate) mod util;

pub use api::{ApiIndexEntry, ApiMap, ApiType, Function, Member, Namespace, ReturnKind};
pub use config::Config;
pub use error::{Error, Result};
pub use page::{HttpPage, Page};
pub use util::{function_name, member_name};

use tracing::info;
use url::Url;

/// Crawls every namespace listed on the MDN landing page, one after another,
/// and annotates each with its Chrome availability before moving on.
pub async fn crawl<P: Page>(page: &mut P, config: &Config) -> Result<ApiMap> {
    let index = Url::parse(&config.mdn_index_url)?;
    let apis = mdn::api_pages(page, &index).await?;
    info!(count = apis.len(), "found MDN namespaces");

    let mut api_map = ApiMap::default();
    for api in apis.iter() {
        let mut namespace = mdn::crawl_namespace(page, api).await?;
        chrome::crawl_chrome(page, config, &api.name, &mut namespace).await?;
        api_map.insert(api.name.clone(), namespace);
    }
    Ok(api_map)
}

/// Crawls both sites and writes the result to `config.output`.
pub async fn run<P: Page>(page: &mut P, config: &Config) -> Result<ApiMap> {
    let api_map = crawl(page, config).await?;
    info!(path = %config.output.display(), "writing api map");
    api_map.write_json(&config.output).await?;
    Ok(api_map)
}
