use std::sync::Arc;

use blogdex_core::types::WeeklyStats;
use blogdex_scraper::Analyzer;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blogdex-cli")]
#[command(about = "Naver blog influence analysis from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full analysis for a blog and print the profile JSON.
    Analyze {
        /// Blog identifier (bare id, not a URL).
        blog_id: String,
        /// Precomputed multi-day visitor average.
        #[arg(long, default_value_t = 0)]
        weekly_avg: u32,
        /// Number of days backing the average.
        #[arg(long, default_value_t = 0)]
        weekly_count: u32,
    },
    /// Print the SEO aggregate for a blog's recent posts.
    Seo {
        /// Blog identifier (bare id, not a URL).
        blog_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Arc::new(blogdex_core::load_app_config_from_env()?);
    let analyzer = Analyzer::new(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            blog_id,
            weekly_avg,
            weekly_count,
        } => {
            let profile = analyzer
                .analyze(
                    &blog_id,
                    WeeklyStats {
                        avg: weekly_avg,
                        count: weekly_count,
                    },
                )
                .await;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Seo { blog_id } => {
            let profile = analyzer.analyze(&blog_id, WeeklyStats::default()).await;
            let score = blogdex_score::calculate_seo_score(&profile.posts_with_index);
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
    }

    Ok(())
}
