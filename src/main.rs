//! rclock - Terminal Digital Clock
//!
//! Shows the current local time and date, refreshed once per second.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use rclock::app::build_surface;
use rclock::display::ThemeName;
use rclock::{Application, ClockConfig, ConfigOverrides, SystemClock};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn cli() -> Command {
    Command::new("rclock")
        .version(rclock::VERSION)
        .about("A terminal digital clock")
        .long_about(
            "rclock shows the local time in 12-hour format together with the long date. \
             It draws a full-screen face on a terminal and falls back to one line per \
             second when stdout is not a terminal.",
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Print one line per refresh instead of drawing full-screen")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-date")
                .long("no-date")
                .help("Hide the date line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome or high-contrast"),
        )
        .arg(
            Arg::new("interval-ms")
                .long("interval-ms")
                .value_name("MS")
                .help("Refresh period in milliseconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("duration")
                .long("duration")
                .value_name("SECS")
                .help("Exit after this many seconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Read settings from this TOML file"),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let matches = cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config =
        ClockConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    let theme = match matches.get_one::<String>("theme") {
        Some(name) => Some(name.parse::<ThemeName>()?),
        None => None,
    };
    let overrides = ConfigOverrides {
        refresh_interval_ms: matches.get_one::<u64>("interval-ms").copied(),
        theme,
        plain: matches.get_flag("plain"),
        no_date: matches.get_flag("no-date"),
    };
    config.apply_overrides(&overrides);

    if config.refresh_interval_ms == 0 {
        anyhow::bail!("--interval-ms must be greater than zero");
    }

    if !config.plain && !std::io::stdout().is_terminal() {
        log::info!("stdout is not a terminal, switching to plain output");
        config.plain = true;
    }

    let run_for = matches
        .get_one::<u64>("duration")
        .map(|secs| Duration::from_secs(*secs));

    let surface = build_surface(&config)?;
    let mut app =
        Application::new(&config, Arc::new(SystemClock::new()), surface)?.with_run_limit(run_for);

    app.run().await?;

    Ok(())
}
