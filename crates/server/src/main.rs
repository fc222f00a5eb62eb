use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodcast_core::{
    load_config, validate_config, Config, DryRunPublisher, FeedConfig, FeedQuery, FeedSource,
    HttpFeedClient, JsonFileFeed, MoodService, Pipeline, RunOutcome, StatusPublisher,
};

use moodcast_server::api::create_router;
use moodcast_server::state::AppState;

#[derive(Parser)]
#[command(name = "moodcast", version, about = "Gauge the mood of a feed and post it back")]
struct Cli {
    /// Path to config TOML file
    #[arg(long, env = "MOODCAST_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, analyze and publish once, then exit
    Run {
        /// Read posts from a JSON file instead of the feed service
        #[arg(long)]
        input: Option<PathBuf>,

        /// Account to analyze (defaults to feed.user_id)
        #[arg(long)]
        user_id: Option<String>,

        /// Number of posts to fetch (defaults to feed.count)
        #[arg(long)]
        count: Option<u32>,

        /// Print the message instead of publishing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Serve the HTTP API (default)
    Serve,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    info!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Scorer strategy: {}", config.scorer.strategy.as_str());
    info!(
        "Dominance threshold: {}",
        config.decision.dominance_threshold
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Run {
            input,
            user_id,
            count,
            dry_run,
        } => run_once(config, input, user_id, count, dry_run).await,
        Commands::Serve => serve(config).await,
    }
}

/// One fetch, analyze and publish cycle.
async fn run_once(
    config: Config,
    input: Option<PathBuf>,
    user_id: Option<String>,
    count: Option<u32>,
    dry_run: bool,
) -> Result<()> {
    let pipeline = Arc::new(Pipeline::from_config(&config));

    let (source, publisher, default_user, default_count): (
        Arc<dyn FeedSource>,
        Arc<dyn StatusPublisher>,
        String,
        u32,
    ) = match (&input, &config.feed) {
        (Some(path), feed) => {
            info!("Reading posts from {:?}", path);
            let source: Arc<dyn FeedSource> = Arc::new(JsonFileFeed::new(path));
            let publisher: Arc<dyn StatusPublisher> = match feed {
                Some(feed) if !dry_run => Arc::new(connect_feed(feed).await?),
                _ => Arc::new(DryRunPublisher),
            };
            let (user, count) = feed
                .as_ref()
                .map(|f| (f.user_id.clone(), f.count))
                .unwrap_or_else(|| ("local".to_string(), u32::MAX));
            (source, publisher, user, count)
        }
        (None, Some(feed)) => {
            if user_id.as_deref().unwrap_or(&feed.user_id).is_empty() {
                bail!("No user id given; pass --user-id or set feed.user_id");
            }
            let client = Arc::new(connect_feed(feed).await?);
            let source: Arc<dyn FeedSource> = client.clone();
            let publisher: Arc<dyn StatusPublisher> = if dry_run {
                Arc::new(DryRunPublisher)
            } else {
                client
            };
            (source, publisher, feed.user_id.clone(), feed.count)
        }
        (None, None) => bail!("No [feed] section configured; pass --input to analyze a file"),
    };

    // Without a real publisher there is nothing to publish to.
    let no_publisher = input.is_some() && config.feed.is_none();
    let service =
        MoodService::new(pipeline, source, publisher).with_dry_run(dry_run || no_publisher);

    let query = FeedQuery::new(
        user_id.unwrap_or(default_user),
        count.unwrap_or(default_count),
    );
    if query.count == 0 {
        bail!("--count must be greater than 0");
    }

    let outcome = service.run_once(&query).await.context("Run failed")?;
    match outcome {
        RunOutcome::Published { report, receipt } => {
            println!("{}", report.outcome.message);
            info!(
                "Published via {} (id: {})",
                receipt.publisher,
                receipt.id.as_deref().unwrap_or("-")
            );
        }
        RunOutcome::DryRun { report } => {
            println!("{}", report.outcome.message);
        }
        RunOutcome::NoData { fetched } => {
            println!("No data: none of the {} fetched posts could be analyzed", fetched);
        }
    }

    Ok(())
}

async fn connect_feed(feed: &FeedConfig) -> Result<HttpFeedClient> {
    info!("Connecting to feed service at {}", feed.base_url);
    let client = HttpFeedClient::new(feed).context("Failed to create feed client")?;
    client
        .verify_credentials()
        .await
        .context("Feed credential check failed")?;
    Ok(client)
}

async fn serve(config: Config) -> Result<()> {
    let pipeline = Arc::new(Pipeline::from_config(&config));
    info!("Pipeline ready (scorer: {})", pipeline.scorer_name());

    let mut state = AppState::new(config.clone(), pipeline);

    match &config.feed {
        Some(feed) => match HttpFeedClient::new(feed) {
            Ok(client) => {
                info!("Feed client configured for {}", feed.base_url);
                let client = Arc::new(client);
                state = state.with_feed(client.clone(), client);
            }
            Err(e) => warn!("Feed client unavailable, runs disabled: {}", e),
        },
        None => info!("No feed configured, runs disabled"),
    }

    let app = create_router(Arc::new(state));

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
