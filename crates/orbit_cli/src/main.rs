use std::sync::Arc;

use clap::Parser;
use tracing::info;

use orbit_cms::{CmsClient, Config};
use orbit_core::{dates, reading_time, ContentRepository, Paginator, Result};

#[derive(Parser, Debug)]
#[command(author, version, about = "Paginated blog index and article pages over a headless content repository", long_about = None)]
struct Cli {
    /// Base URL of the content repository API. Falls back to ORBIT_API_URL.
    #[arg(long)]
    api_url: Option<String>,
    /// Page-size hint for the first feed page.
    #[arg(long)]
    page_size: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Bootstrap from the repository and serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Print the post list, following the feed cursor
    Posts {
        /// How many pages to accumulate
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print one article with its reading time
    Article { uid: String },
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.api_url {
        Some(url) => Config::new(url)?,
        None => Config::from_env()?,
    };
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size);
    }
    Ok(config)
}

fn display_date(date: Option<chrono::DateTime<chrono::Utc>>) -> Result<String> {
    match date {
        Some(date) => dates::format_publication_date(Some(date)),
        None => Ok("unpublished".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let client = Arc::new(CmsClient::new(config.clone()));

    match cli.command {
        Commands::Serve { addr } => {
            info!("🛰️ bootstrapping from {}", config.api_url);
            let state = Arc::new(
                orbit_web::bootstrap::load_state(client.clone(), config.page_size).await?,
            );
            orbit_web::bootstrap::spawn_revalidation(state.clone(), config.revalidate);
            let app = orbit_web::create_app(state);
            info!("🌐 serving blog API on {}", addr);
            orbit_web::serve(&addr, app).await?;
        }
        Commands::Posts { pages } => {
            let first = client.first_page(config.page_size).await?;
            let mut paginator = Paginator::new(client.clone(), first);
            let mut fetched = 1;
            while fetched < pages && paginator.has_more() {
                paginator.fetch_next_page().await?;
                fetched += 1;
            }
            for post in paginator.posts() {
                println!(
                    "📰 {} — {} ({}, {})",
                    post.data.title,
                    post.data.subtitle,
                    post.data.author,
                    display_date(post.first_publication_date)?
                );
            }
            if paginator.has_more() {
                println!("… more posts available");
            }
        }
        Commands::Article { uid } => {
            let article = client.article(&uid).await?;
            let minutes = reading_time::estimate_minutes(&article.content);
            println!("# {}", article.title);
            if !article.subtitle.is_empty() {
                println!("{}", article.subtitle);
            }
            println!(
                "{} · {} · {} min",
                article.author,
                display_date(article.first_publication_date)?,
                minutes
            );
            for section in &article.content {
                println!("\n## {}", section.heading);
                for block in &section.body {
                    println!("{}", block.text);
                }
            }
        }
    }

    Ok(())
}
