use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use client_core::SearchController;
use shared::domain::Tab;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Query text to submit to the discovery backend.
    #[arg(long)]
    query: String,
    /// Which tabbed view to render.
    #[arg(long, value_enum, default_value = "news")]
    tab: TabArg,
    /// Backend base URL; overrides console.toml and env settings.
    #[arg(long)]
    server_url: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TabArg {
    News,
    Briefing,
    Sentiment,
    Query,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::News => Tab::News,
            TabArg::Briefing => Tab::Briefing,
            TabArg::Sentiment => Tab::Sentiment,
            TabArg::Query => Tab::Query,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let server_url = args
        .server_url
        .unwrap_or_else(|| config::load_settings().server_url);

    let controller = SearchController::new(server_url);
    controller.on_tab_change(args.tab.into()).await;
    controller.fetch_data(&args.query).await?;

    let state = controller.state().await;
    if let Some(error) = &state.error {
        bail!("search failed: {}", error.error);
    }

    match controller.tab_content().await {
        Some(content) => println!("{}", serde_json::to_string_pretty(&content)?),
        None => println!("no results"),
    }

    Ok(())
}
