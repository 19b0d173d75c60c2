use tracing::info;
use tracing_subscriber::EnvFilter;
use webext_api_map::{Config, HttpPage};

#[tokio::main]
async fn main() -> Result<(), webext_api_map::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::default();
    let mut page = HttpPage::new(&config)?;
    let api_map = webext_api_map::run(&mut page, &config).await?;
    info!(namespaces = api_map.len(), "done");
    Ok(())
}
