//! Monster OOP Academy - an interactive terminal slide deck.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use monster_academy::logging::{init_logging, LogConfig};
use monster_academy::{app, theme};

#[derive(Parser, Debug)]
#[command(name = "monster-academy", version, about = "Interactive terminal slide deck for teaching OOP concepts")]
struct Cli {
    /// Starting theme preset (terminal, dracula, nord, gruvbox)
    #[arg(long, default_value = "dracula")]
    theme: String,

    /// Slide to open at (1-based, clamped into range)
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Append diagnostics to this file (stderr belongs to the deck UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level when --log-file is set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: tracing::level_filters::LevelFilter,

    /// List the available theme presets and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in theme::preset_names() {
            println!("{name}");
        }
        return Ok(());
    }

    init_logging(&LogConfig {
        level: cli.log_level,
        log_file: cli.log_file.clone(),
    })
    .context("failed to initialize logging")?;

    if !theme::set_theme(&cli.theme) {
        anyhow::bail!(
            "unknown theme '{}' (available: {})",
            cli.theme,
            theme::preset_names().join(", ")
        );
    }

    let start = cli.start.saturating_sub(1);
    let handle = app::mount(start).context("failed to mount the deck")?;
    let result = app::run(&handle);
    app::unmount(handle);

    result.context("event loop failed")?;
    Ok(())
}
