//! Tinct CLI - headless theme switcher
//!
//! Drives the theme controller against a JSON state file:
//! - Browse the preset catalog and inspect token values
//! - Export the active (or any) theme as a `:root` CSS block
//! - Select themes, apply or reset custom accents, move the panel corner
//! - Replay system light/dark changes

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tinct_theme::{ColorScheme, FileStore, PanelPosition, ThemeConfig};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "tinct.toml";

/// Browse, export and switch Tinct themes
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Browse, export and switch Tinct themes")]
#[command(version)]
struct Args {
    /// Config file (defaults to ./tinct.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Persisted selection file
    #[arg(long, global = true, default_value = ".tinct-state.json")]
    state: PathBuf,

    /// Current OS light/dark preference
    #[arg(long, global = true)]
    prefers: Option<ColorScheme>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog themes
    List,

    /// Show a theme's tokens
    Show {
        /// Theme id
        id: String,
    },

    /// Print CSS variables for the active theme, or for `--id`
    Css {
        /// Theme id to render instead of the active one
        #[arg(long)]
        id: Option<String>,

        /// Accent hue to layer on (requires --chroma)
        #[arg(long, requires = "chroma")]
        hue: Option<f64>,

        /// Accent chroma to layer on (requires --hue)
        #[arg(long, requires = "hue")]
        chroma: Option<f64>,
    },

    /// Select a theme
    Set {
        /// Theme id
        id: String,
    },

    /// Apply a custom accent over the active theme
    Accent {
        /// Hue, 0-360
        hue: f64,
        /// Chroma, 0-0.4
        chroma: f64,
    },

    /// Remove the custom accent
    Reset,

    /// Show the current selection
    Status,

    /// Show or move the floating panel corner
    Position {
        /// top-left, top-right, bottom-left or bottom-right
        corner: Option<PanelPosition>,
    },

    /// Replay an OS light/dark change for this run only
    ///
    /// System changes are never persisted, so the next invocation restores
    /// the stored theme. Pass `--prefers` to follow the scheme at startup.
    System {
        /// light or dark
        scheme: ColorScheme,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config.as_deref())?;
    tracing::debug!("using state file {}", args.state.display());

    let backend = FileStore::open(args.state.clone());
    let mut themes = commands::open_controller(config, backend, args.prefers);

    let output = match args.command {
        Command::List => commands::list(&themes),
        Command::Show { id } => commands::show(&themes, &id),
        Command::Css { id, hue, chroma } => {
            commands::css(&themes, id.as_deref(), hue.zip(chroma))
        }
        Command::Set { id } => commands::set(&mut themes, &id),
        Command::Accent { hue, chroma } => commands::accent(&mut themes, hue, chroma),
        Command::Reset => commands::reset(&mut themes),
        Command::Status => commands::status(&themes),
        Command::Position { corner } => commands::position(&mut themes, corner),
        Command::System { scheme } => commands::system(&mut themes, scheme),
    }?;

    print!("{output}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    match path {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => ThemeConfig::load(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("failed to load {DEFAULT_CONFIG_FILE}")),
        None => Ok(ThemeConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn system_help_says_it_is_not_persisted() {
        let command = Args::command();
        let system = command
            .find_subcommand("system")
            .expect("system subcommand exists");
        let help = system
            .get_long_about()
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(help.contains("never persisted"), "{help}");
    }
}
