#![allow(non_snake_case)]

mod app;
mod content;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use starfolio_core::PortfolioConfig;
use tracing_subscriber::EnvFilter;

/// Startup settings resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub config: PortfolioConfig,
    pub force_reduced_motion: bool,
}

/// Global settings, set once before launch
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the startup settings (defaults if launch skipped setting them)
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Starfolio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "starfolio-desktop")]
#[command(about = "Starfolio - single-page personal portfolio")]
struct Args {
    /// JSON file overriding behaviour constants (throttle, intervals, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip reveal animations regardless of the system preference
    #[arg(long)]
    reduced_motion: bool,
}

/// Load the config file, falling back to defaults on any error.
fn load_config(path: Option<&PathBuf>) -> PortfolioConfig {
    let Some(path) = path else {
        return PortfolioConfig::default();
    };
    match PortfolioConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config {:?}: {}, using defaults", path, e);
            PortfolioConfig::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref());

    let _ = SETTINGS.set(Settings {
        config,
        force_reduced_motion: args.reduced_motion,
    });

    tracing::info!(
        reduced_motion = args.reduced_motion,
        "Starting Starfolio"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(content::SITE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
