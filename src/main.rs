//! Word-Ripple main entry point
//!
//! This is the command-line interface for the Word-Ripple crawler.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_ripple::config::{load_config_with_hash, Config, CrawlSettings};
use word_ripple::crawler::crawl;
use word_ripple::output::{print_result, write_result, write_result_to_path};
use word_ripple::CrawlEngine;

/// Word-Ripple: a parallel word-frequency crawler
///
/// Word-Ripple crawls outward from the configured starting URLs, counts the
/// words on every page it reaches within the depth and time limits, and reports
/// the most popular ones.
#[derive(Parser, Debug)]
#[command(name = "word-ripple")]
#[command(version)]
#[command(about = "A parallel word-frequency crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the JSON result here instead of the configured result path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(&config, cli.output, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("word_ripple=info,warn"),
            1 => EnvFilter::new("word_ripple=debug,info"),
            2 => EnvFilter::new("word_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout stays clean for the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let settings = CrawlSettings::from_config(config)?;

    println!("=== Word-Ripple Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Timeout: {:?}", settings.timeout);
    println!("  Max depth: {}", settings.max_depth);
    println!(
        "  Parallelism: {} requested, {} available",
        settings.parallelism,
        CrawlEngine::max_parallelism()
    );
    println!("  Popular word count: {}", settings.popular_word_count);
    println!("  Ignored URL patterns: {}", settings.ignored_urls.len());

    println!("\nParser:");
    println!("  Timeout: {}s", config.parser.timeout_seconds);
    println!("  Ignored word patterns: {}", config.parser.ignored_words.len());
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    match &config.output.result_path {
        Some(path) => println!("  Result: {}", path),
        None => println!("  Result: stdout"),
    }

    println!("\nStarting URLs ({}):", config.starting_urls.len());
    for url in &config.starting_urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: &Config,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Total seed URLs: {}", config.starting_urls.len());

    let result = crawl(config).await?;

    let destination = output.or_else(|| config.output.result_path.as_ref().map(PathBuf::from));
    match destination {
        Some(path) => {
            write_result_to_path(&result, &path)?;
            tracing::info!("Result written to: {}", path.display());
            if !quiet {
                print_result(&result);
            }
        }
        None => write_result(&result, std::io::stdout().lock())?,
    }

    Ok(())
}
