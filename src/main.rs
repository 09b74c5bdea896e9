use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tajs_docs::{api, build, config::SiteConfig, content};

#[derive(Parser)]
#[command(name = "tajs-docs")]
#[command(about = "Changelog, license and screenshot data for the Taj's Mod site")]
struct Cli {
    /// JSON config file (default: <config dir>/tajs-docs/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write changelog.json, feed.xml and the content records to a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Serve the feeds and content records over HTTP
    Serve {
        /// Port for HTTP server
        #[arg(short, long, default_value = "4321")]
        port: u16,
    },
    /// Print the latest release summary
    Latest,
}

/// Initialize tracing with output to stderr (when stdout carries data) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tajs_docs=info,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Latest));
    init_tracing(use_stderr);

    let config = SiteConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Build { out_dir }) => run_build(&config, out_dir)?,
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting docs server on port {}", port);

            let app = api::create_router(config);
            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
                .await
                .with_context(|| format!("Failed to bind port {}", port))?;
            tracing::info!("Docs server listening on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
        Some(Commands::Latest) => {
            let parsed = content::load_changelog(&config.changelog_path);
            println!("{}", parsed.latest_line());
        }
        None => run_build(&config, PathBuf::from("dist"))?,
    }

    Ok(())
}

fn run_build(config: &SiteConfig, out_dir: PathBuf) -> anyhow::Result<()> {
    let report = build::build_site(config, &out_dir, chrono::Utc::now())
        .with_context(|| format!("Failed to build site data into {}", out_dir.display()))?;

    for file in &report.files {
        println!("{}", file.display());
    }
    Ok(())
}
