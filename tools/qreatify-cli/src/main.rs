//! QReatify CLI — Command-line interface for generating QR codes.
//!
//! Usage:
//!   qreatify generate <PAYLOAD> [OPTIONS]   Export a PNG QR code
//!   qreatify preview <PAYLOAD>              Print a QR code to the terminal
//!   qreatify theme show                     Show the applied theme
//!   qreatify theme set <THEME>              Persist a theme preference
//!   qreatify config [--init [--force]]      Show or write configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qreatify_common::config::AppConfig;
use qreatify_model::request::MAX_CANVAS_SIZE;

mod commands;

#[derive(Parser)]
#[command(
    name = "qreatify",
    about = "Effortless QR code generation with optional logo overlays",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a QR code and export it as `<payload>_qr.png`
    Generate {
        /// Text, link, or any data to encode
        payload: String,

        /// Foreground color (#rrggbb)
        #[arg(short, long)]
        color: Option<String>,

        /// Canvas edge length in pixels (1-4096)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIZE as i64))]
        size: Option<u32>,

        /// Logo image to place in the center
        #[arg(short, long)]
        logo: Option<PathBuf>,

        /// Logo size as a percentage of the canvas
        #[arg(long, value_parser = clap::value_parser!(u32).range(10..=30))]
        logo_size: Option<u32>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a QR code to the terminal
    Preview {
        /// Text, link, or any data to encode
        payload: String,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Show effective configuration and file locations
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,

        /// Replace an existing config file when used with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the stored preference and the theme it resolves to
    Show,

    /// Persist a preference: light, dark, or system
    Set {
        /// light | dark | system
        theme: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    qreatify_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Generate {
            payload,
            color,
            size,
            logo,
            logo_size,
            output,
        } => {
            commands::generate::run(
                &config,
                commands::generate::GenerateArgs {
                    payload,
                    color,
                    size,
                    logo,
                    logo_size,
                    output,
                },
            )
            .await
        }
        Commands::Preview { payload } => commands::preview::run(&payload),
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(),
            ThemeAction::Set { theme } => commands::theme::set(&theme),
        },
        Commands::Config { init: true, force } => commands::config::init(&config, force),
        Commands::Config { .. } => commands::config::run(&config),
    }
}
