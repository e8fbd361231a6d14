use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use descry_client::ui::{FixtureConfig, MemoryAlert, MemoryList, MemoryRegion, Page, UiAction};
use descry_client::DescryClient;

#[derive(Parser)]
#[command(author, version, about = "Drive the pattern editor actions from a terminal", long_about = None)]
struct Cli {
    /// URL of the pattern service.
    #[arg(short = 'u', long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pattern file against the server's samples.
    Check { file: PathBuf },
    /// List stored patterns.
    Patterns,
    /// List projects.
    Projects,
    /// Store a pattern file under a title.
    Put { title: String, file: PathBuf },
    /// Send a captured page through /parse.
    Fixture {
        #[arg(long)]
        asset: Option<String>,
        #[arg(long)]
        origin: Option<String>,
    },
    /// Apply the loaded patterns to an HTML file.
    Parse {
        file: PathBuf,
        #[arg(long, default_value = "")]
        origin: String,
        /// Upload the page gzip-compressed.
        #[arg(long)]
        gzip: bool,
    },
    /// List the tester's sample pages.
    Samples,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let client = DescryClient::builder().base_url(&cli.url).build()?;

    let alert = Arc::new(MemoryAlert::new());
    let result = Arc::new(MemoryRegion::new());
    let display = Arc::new(MemoryRegion::new());
    let patterns = Arc::new(MemoryList::new());
    let projects = Arc::new(MemoryList::new());

    let mut fixture = FixtureConfig::default();
    if let Commands::Fixture { asset, origin } = &cli.command {
        if let Some(asset) = asset {
            fixture = fixture.asset_path(asset.as_str());
        }
        if let Some(origin) = origin {
            fixture = fixture.origin(origin.as_str());
        }
    }

    let page = Page::builder(client.clone())
        .pattern_checking(alert.clone(), result.clone())
        .display(display.clone())
        .pattern_list(patterns.clone())
        .project_list(projects.clone())
        .fixture(fixture)
        .build();

    match cli.command {
        Commands::Check { file } => {
            let text = std::fs::read_to_string(file)?;
            if let Some(validator) = page.live_validator() {
                validator.on_input(text).await;
            }
            let state = alert.state();
            if state.visible {
                println!("⚠️  {}", state.message);
            }
            println!("{}", result.content());
        }
        Commands::Patterns => {
            if let Some(action) = page.list_patterns() {
                action.run().await?;
            }
            println!("{}", patterns.to_html());
        }
        Commands::Projects => {
            if let Some(action) = page.list_projects() {
                action.run().await?;
            }
            println!("{}", projects.to_html());
        }
        Commands::Put { title, file } => {
            let data = std::fs::read_to_string(file)?;
            if let Some(action) = page.submit_pattern(title, data) {
                // the display region holds the answer either way
                let _ = action.run().await;
            }
            println!("{}", display.content());
        }
        Commands::Fixture { .. } => {
            if let Some(action) = page.parse_fixture() {
                action.run().await?;
            }
            println!("{}", display.content());
        }
        Commands::Parse { file, origin, gzip } => {
            let data = std::fs::read_to_string(file)?;
            let parsed = client
                .parse()
                .origin(origin)
                .data(data)
                .gzip(gzip)
                .send()
                .await?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Samples => {
            for url in client.samples().list().await? {
                println!("{url}");
            }
        }
    }

    Ok(())
}
