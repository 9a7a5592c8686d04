//! Teapot List - Entry Point

use clap::Parser;
use std::path::PathBuf;
use teapot_list::view::TuiError;
use tracing::info;

/// Teapot List - a self-sizing list in the terminal
#[derive(Parser, Debug)]
#[command(name = "teapot-list")]
#[command(version)]
#[command(about = "Scrollable list of self-sizing items laid out incrementally")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of sections
    #[arg(long)]
    pub sections: Option<usize>,

    /// Items in every section
    #[arg(long)]
    pub items_per_section: Option<usize>,

    /// Rows between items
    #[arg(long, value_parser = parse_spacing)]
    pub spacing: Option<f64>,

    /// Print the fully measured layout as JSON lines instead of starting the TUI
    #[arg(long)]
    pub dump: bool,

    /// Viewport width for --dump
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,
}

fn parse_spacing(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("expected a non-negative number, got {raw:?}")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), TuiError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = teapot_list::config::load_config_with_precedence(args.config.clone())?;
        let merged = teapot_list::config::merge_config(config_file);
        let with_env = teapot_list::config::apply_env_overrides(merged)?;
        teapot_list::config::apply_cli_overrides(
            with_env,
            args.sections,
            args.items_per_section,
            args.spacing,
        )
    };

    teapot_list::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if args.dump {
        let stdout = std::io::stdout();
        teapot_list::view::dump_layout(&config, args.width, &mut stdout.lock())?;
        return Ok(());
    }

    teapot_list::view::run_with_config(&config)
}
