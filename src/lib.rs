//! Bearwatch - CLI front-end for a remote bear-detection service.
//!
//! This crate uploads images and videos to the detection backend, renders
//! the normalized result, and lists historical sighting points.

#![warn(missing_docs)]

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod detect;
pub mod error;
pub mod map;
pub mod output;
pub mod utils;

use api::{DateRange, HttpApi};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Command, ConfigAction, GlobalArgs};
use config::Config;
use detect::{DetectionMode, DetectionResult, DetectionSession, SelectedFile};
use map::{MapLoader, TextMapSurface};
use output::{progress, reporter};
use std::path::{Path, PathBuf};
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the bearwatch CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet);

    // Load configuration and apply command-line overrides
    let mut config = config::load_default_config()?;
    if let Some(url) = &cli.global.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(timeout) = cli.global.timeout {
        config.api.request_timeout_secs = timeout;
    }

    match cli.command {
        Command::Image {
            file,
            save_annotated,
        } => {
            config::validate_config(&config)?;
            run_detect(
                DetectionMode::Image,
                &file,
                save_annotated,
                &config,
                &cli.global,
            )
        }
        Command::Video { file } => {
            config::validate_config(&config)?;
            run_detect(DetectionMode::Video, &file, None, &config, &cli.global)
        }
        Command::Map { start, end } => {
            config::validate_config(&config)?;
            run_map(start, end, &config)
        }
        Command::Config { action } => handle_config_command(action),
    }
}

/// Run one detection submission and render its outcome.
fn run_detect(
    mode: DetectionMode,
    file: &Path,
    save_annotated: Option<PathBuf>,
    config: &Config,
    global: &GlobalArgs,
) -> Result<()> {
    let selected = SelectedFile::from_path(file)?;
    info!(
        "Submitting {} ({} bytes) for {mode} detection",
        selected.name,
        selected.bytes.len()
    );

    let api = HttpApi::from_config(&config.api)?;
    let mut session = DetectionSession::new(mode);
    session.select_file(selected);

    let spinner_enabled = !global.quiet && !global.no_progress;
    let spinner = progress::create_request_spinner("Detecting...", spinner_enabled);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;
    let submitted = runtime.block_on(session.submit(&api));

    progress::finish_progress(spinner, "Done");
    submitted?;

    if let Some(result) = session.result() {
        reporter::report_result(result);
        save_annotated_if_requested(result, file, save_annotated, config)?;
    }

    Ok(())
}

/// Write the annotated image when the user or config asked for it.
fn save_annotated_if_requested(
    result: &DetectionResult,
    input: &Path,
    save_annotated: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let DetectionResult::Image {
        processed_image: Some(bytes),
        ..
    } = result
    else {
        return Ok(());
    };

    let target = save_annotated.or_else(|| {
        config
            .output
            .save_annotated
            .then(|| reporter::annotated_path_for(input))
    });

    if let Some(path) = target {
        reporter::save_annotated_image(bytes, &path)?;
        println!("  Annotated image saved to {}", path.display());
    }

    Ok(())
}

/// Fetch sighting points and render them as a plain-text listing.
fn run_map(start: Option<NaiveDate>, end: Option<NaiveDate>, config: &Config) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end)
        && start > end
    {
        return Err(Error::ConfigValidation {
            message: format!("--start ({start}) must not be after --end ({end})"),
        });
    }

    let api = HttpApi::from_config(&config.api)?;
    let range = DateRange { start, end };

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let mut loader = MapLoader::new();
    runtime.block_on(loader.load_points(&api, Some(&range)));

    if loader.points().is_empty() {
        println!("No sightings recorded for the requested range.");
        return Ok(());
    }

    println!("Historical bear sightings:");
    let stdout = std::io::stdout();
    let mut surface = TextMapSurface::new(stdout.lock());
    loader.render_to(&mut surface);
    println!("{} sighting(s)", surface.rendered());

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Hyper and reqwest internals are noisy at debug; keep them a level
    // behind the application filter.
    let filter_str = if quiet {
        "warn".to_string()
    } else {
        match verbose {
            0 => "info,hyper_util=warn,reqwest=warn".to_string(),
            1 => "debug,hyper_util=info,reqwest=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = config::save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nEdit [api] base_url to point at your detection service.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = config::load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
