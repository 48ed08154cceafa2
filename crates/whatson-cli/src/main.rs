//! whatson - daily TV and streaming schedule CLI.

/// Application configuration (JSON).
mod config;
/// Output sinks.
mod sink;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use crate::sink::{ConsoleSink, emit_lines};
use whatson_api::slack::SlackClient;
use whatson_api::tvmaze::{TvMazeClient, resolve_schedule_date};
use whatson_schedule::fetch::fetch_shows;
use whatson_schedule::group::group_shows_by_network;
use whatson_schedule::options::{DEFAULT_COUNTRY, FetchSource, ShowOptions};
use whatson_schedule::render::{
    AnsiStyler, PlainStyler, ScheduleRenderer, SlackRenderer, TextRenderer,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "whatson", about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the schedule for a date.
    Schedule(ScheduleArgs),
    /// List the networks airing anything on a date.
    Networks(NetworksArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Which feeds to fetch.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum FetchArg {
    /// Broadcast and web schedules.
    #[default]
    All,
    /// Broadcast schedule only.
    Network,
    /// Web/streaming schedule only.
    Web,
}

impl From<FetchArg> for FetchSource {
    fn from(value: FetchArg) -> Self {
        match value {
            FetchArg::All => Self::All,
            FetchArg::Network => Self::Network,
            FetchArg::Web => Self::Web,
        }
    }
}

/// Output backend selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputArg {
    /// Plain console text.
    #[default]
    Plain,
    /// ANSI-styled console text.
    Styled,
    /// Post to the configured Slack webhook.
    Slack,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
struct ScheduleArgs {
    /// Schedule date (YYYY-MM-DD, default: today).
    #[arg(long)]
    date: Option<String>,

    /// Home country code (e.g. "US"). Falls back to config, then "US".
    #[arg(long)]
    country: Option<String>,

    /// Comma-separated show types to include (e.g. "Scripted,Reality").
    #[arg(long, value_delimiter = ',')]
    types: Option<Vec<String>>,

    /// Comma-separated networks to include (e.g. "CBS,HBO").
    #[arg(long, value_delimiter = ',')]
    networks: Option<Vec<String>>,

    /// Comma-separated genres to include.
    #[arg(long, value_delimiter = ',')]
    genres: Option<Vec<String>>,

    /// Comma-separated languages to include.
    #[arg(long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Earliest air time to include (e.g. "18:00" or "6:00 PM").
    #[arg(long)]
    min_airtime: Option<String>,

    /// Show name to exclude (repeatable).
    #[arg(long = "exclude")]
    exclude: Option<Vec<String>>,

    /// Which feeds to fetch.
    #[arg(long, value_enum, default_value_t = FetchArg::All)]
    fetch: FetchArg,

    /// Output backend.
    #[arg(long, value_enum, default_value_t = OutputArg::Plain)]
    output: OutputArg,

    /// Keep feed order inside each network instead of sorting by air time.
    #[arg(long)]
    no_time_sort: bool,
}

/// Arguments for the `networks` subcommand.
#[derive(clap::Args)]
struct NetworksArgs {
    /// Schedule date (YYYY-MM-DD, default: today).
    #[arg(long)]
    date: Option<String>,

    /// Home country code (e.g. "US"). Falls back to config, then "US".
    #[arg(long)]
    country: Option<String>,

    /// Which feeds to fetch.
    #[arg(long, value_enum, default_value_t = FetchArg::All)]
    fetch: FetchArg,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

/// Loads the config file for the resolved directory.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Merges CLI flags over config-file values over defaults.
///
/// A flag that was not given falls back to the config file; an explicitly
/// given (even empty) flag wins.
fn build_show_options(args: &ScheduleArgs, config: &AppConfig) -> Result<ShowOptions> {
    let date = resolve_schedule_date(args.date.as_deref())?;

    Ok(ShowOptions {
        date: Some(date),
        country: args
            .country
            .clone()
            .or_else(|| config.country.clone())
            .unwrap_or_else(|| String::from(DEFAULT_COUNTRY)),
        types: args.types.clone().unwrap_or_else(|| config.types.clone()),
        networks: args
            .networks
            .clone()
            .unwrap_or_else(|| config.networks.clone()),
        genres: args.genres.clone().unwrap_or_else(|| config.genres.clone()),
        languages: args
            .languages
            .clone()
            .unwrap_or_else(|| config.languages.clone()),
        min_airtime: args
            .min_airtime
            .clone()
            .or_else(|| config.min_airtime.clone()),
        exclude_show_names: args
            .exclude
            .clone()
            .unwrap_or_else(|| config.exclude_show_names.clone()),
        fetch: args.fetch.into(),
    })
}

/// Builds a `TvMazeClient` with the default user agent.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
fn build_tvmaze_client() -> Result<TvMazeClient> {
    TvMazeClient::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TVMaze API client")
}

/// Builds a `SlackClient` from `SLACK_WEBHOOK_URL` or the config file.
///
/// # Errors
///
/// Returns an error if no webhook is configured, the URL is invalid, or
/// the client fails to build.
#[instrument(skip_all)]
fn build_slack_client(config: &AppConfig) -> Result<SlackClient> {
    let webhook = std::env::var("SLACK_WEBHOOK_URL")
        .ok()
        .or_else(|| config.slack_webhook_url.clone())
        .context(
            "slack webhook is not configured (set SLACK_WEBHOOK_URL or slackWebhookUrl in config.json)",
        )?;
    let webhook_url = webhook
        .parse()
        .context("invalid Slack webhook URL")?;

    SlackClient::builder()
        .webhook_url(webhook_url)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build Slack client")
}

/// Title for the Slack message header.
fn schedule_title(options: &ShowOptions) -> String {
    options.date.map_or_else(
        || String::from("TV schedule for today"),
        |date| format!("TV schedule for {}", date.format("%Y-%m-%d")),
    )
}

/// Runs the `schedule` subcommand.
///
/// # Errors
///
/// Returns an error if the date or configuration is invalid, a client
/// fails to build, or the Slack delivery fails. Feed failures degrade to
/// an empty schedule instead of erroring.
#[instrument(skip_all)]
async fn run_schedule(args: &ScheduleArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let options = build_show_options(args, &config)?;

    // Resolve the Slack destination before fetching so a missing webhook
    // fails fast.
    let slack = match args.output {
        OutputArg::Slack => Some(build_slack_client(&config)?),
        OutputArg::Plain | OutputArg::Styled => None,
    };

    let client = build_tvmaze_client()?;
    let shows = fetch_shows(&client, &options).await;
    tracing::info!(shows = shows.len(), "schedule assembled");

    let groups = group_shows_by_network(&shows);
    let sort_by_time = !args.no_time_sort;

    match args.output {
        OutputArg::Plain => {
            let renderer = TextRenderer::new(PlainStyler);
            let lines = renderer.format_network_groups(&groups, sort_by_time);
            let mut console = ConsoleSink::new();
            emit_lines(&mut console, &lines);
        }
        OutputArg::Styled => {
            let renderer = TextRenderer::new(AnsiStyler);
            let lines = renderer.format_network_groups(&groups, sort_by_time);
            let mut console = ConsoleSink::new();
            emit_lines(&mut console, &lines);
        }
        OutputArg::Slack => {
            let renderer = SlackRenderer::new(schedule_title(&options));
            let message = renderer.build_message(&groups, sort_by_time);
            if let Some(slack) = slack {
                slack
                    .post_message(&message)
                    .await
                    .context("failed to post schedule to Slack")?;
                tracing::info!("schedule posted to Slack");
            }
        }
    }

    Ok(())
}

/// Runs the `networks` subcommand.
///
/// # Errors
///
/// Returns an error if the date is invalid or the client fails to build.
#[instrument(skip_all)]
async fn run_networks(args: &NetworksArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let options = ShowOptions {
        date: Some(resolve_schedule_date(args.date.as_deref())?),
        country: args
            .country
            .clone()
            .or_else(|| config.country.clone())
            .unwrap_or_else(|| String::from(DEFAULT_COUNTRY)),
        fetch: args.fetch.into(),
        ..ShowOptions::default()
    };

    let client = build_tvmaze_client()?;
    let shows = fetch_shows(&client, &options).await;

    let mut networks: Vec<String> = shows.iter().map(|s| s.network.clone()).collect();
    networks.sort();
    networks.dedup();

    tracing::info!("{} network(s) in today's schedule", networks.len());
    let mut console = ConsoleSink::new();
    emit_lines(&mut console, &networks);

    Ok(())
}

/// Runs the `completions` subcommand.
fn run_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "whatson", &mut io::stdout());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Schedule(args) => run_schedule(&args, cli.dir.as_ref()).await,
        Commands::Networks(args) => run_networks(&args, cli.dir.as_ref()).await,
        Commands::Completions(args) => {
            run_completions(&args);
            Ok(())
        }
    }
}
