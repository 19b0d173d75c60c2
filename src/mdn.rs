//! Extraction from the MDN WebExtensions reference.

use scraper::Html;
use tracing::info;
use url::Url;

use crate::api::{ApiIndexEntry, ApiType, Function, Namespace, ReturnKind};
use crate::error::Result;
use crate::page::Page;
use crate::util;

const INDEX_LINKS: &str = "dt.landingPageList > a";
const RETURN_VALUE: &str = "#Return_value + p > code";
const FUNCTION_ICON: &str = "span i";
const DEPRECATED_ICON: &str = "icon-thumbs-down-alt";
const EXPERIMENTAL_ICON: &str = "icon-beaker";

/// A function listed on a namespace page, before its own page is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub href: Url,
    pub deprecated: bool,
    pub experimental: bool,
}

/// Raw member listings of a namespace page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceEntries {
    pub types: Vec<String>,
    pub properties: Vec<String>,
    pub functions: Vec<FunctionEntry>,
    pub events: Vec<String>,
}

fn section_links(api_type: ApiType) -> String {
    format!("#{} + dl > dt > a", api_type.mdn_section())
}

pub fn parse_index(document: &Html, base: &Url) -> Result<Vec<ApiIndexEntry>> {
    document
        .select(&util::selector(INDEX_LINKS)?)
        .map(|api| {
            Ok(ApiIndexEntry {
                name: util::text(api),
                href: util::href(api, base)?,
            })
        })
        .collect()
}

fn member_names(document: &Html, api_type: ApiType) -> Result<Vec<String>> {
    Ok(document
        .select(&util::selector(&section_links(api_type))?)
        .map(|member| util::member_name(&util::text(member)).to_owned())
        .collect())
}

pub fn parse_namespace(document: &Html, base: &Url) -> Result<NamespaceEntries> {
    let icon = util::selector(FUNCTION_ICON)?;

    let mut functions = vec![];
    for function in document.select(&util::selector(&section_links(ApiType::Functions))?) {
        let classes = function
            .parent()
            .and_then(scraper::ElementRef::wrap)
            .and_then(|dt| dt.select(&icon).next())
            .map(|i| i.value().classes().map(str::to_owned).collect::<Vec<_>>())
            .unwrap_or_default();
        let has_class = |class: &str| classes.iter().any(|c| c == class);

        functions.push(FunctionEntry {
            name: util::function_name(&util::text(function)).to_owned(),
            href: util::href(function, base)?,
            deprecated: has_class(DEPRECATED_ICON),
            experimental: has_class(EXPERIMENTAL_ICON),
        });
    }

    Ok(NamespaceEntries {
        types: member_names(document, ApiType::Types)?,
        properties: member_names(document, ApiType::Properties)?,
        functions,
        events: member_names(document, ApiType::Events)?,
    })
}

/// Classifies the code span of a "Return value" paragraph, if the page has one.
pub fn classify_return(code: Option<&str>) -> ReturnKind {
    match code {
        Some(code) if code.trim().eq_ignore_ascii_case("promise") => ReturnKind::Promise,
        Some(_) => ReturnKind::NonPromise,
        None => ReturnKind::Undocumented,
    }
}

/// Loads the landing page and lists every API namespace on it.
pub async fn api_pages<P: Page>(page: &mut P, index: &Url) -> Result<Vec<ApiIndexEntry>> {
    page.navigate(index).await?;
    page.evaluate(parse_index)
}

/// Loads a function's own page and reads its return value documentation.
pub async fn return_kind<P: Page>(page: &mut P, href: &Url) -> Result<ReturnKind> {
    page.navigate(href).await?;
    let code = page.query_one(RETURN_VALUE)?.map(util::text);
    Ok(classify_return(code.as_deref()))
}

/// Crawls a namespace page and the page of each function it lists.
pub async fn crawl_namespace<P: Page>(page: &mut P, api: &ApiIndexEntry) -> Result<Namespace> {
    info!(namespace = %api.name, "crawling MDN namespace");
    page.navigate(&api.href).await?;
    let entries = page.evaluate(parse_namespace)?;

    let mut functions = Vec::with_capacity(entries.functions.len());
    for function in entries.functions {
        info!("crawling function {}.{}()", api.name, function.name);
        let returns = return_kind(page, &function.href).await?;
        let record = Function::new(returns, function.deprecated, function.experimental);
        functions.push((function.name, record));
    }

    Ok(Namespace::new(
        entries.types,
        entries.properties,
        functions,
        entries.events,
    ))
}
