//! Binary entrypoint for the hero carousel host adapter.
use std::{io, process};

use clap::{Parser, Subcommand};
use config::{DEFAULT_CONFIG_LOCATION, source_for};
use hero_engine::{Hero, Mount, mount};
use logging::LogArgs;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*};

/// In-memory host page.
mod page;

use crate::page::Page;

#[derive(Parser, Debug)]
#[command(name = "hero", about = "Mount the hero carousel into an in-memory page", version)]
/// Command-line interface for the `hero` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Configuration location: an http(s) URL or a file path
    #[arg(long, value_name = "LOCATION", default_value = DEFAULT_CONFIG_LOCATION, global = true)]
    config: String,

    /// Id of the host element the widget mounts into
    #[arg(long, value_name = "ID", default_value = "hero-slot", global = true)]
    target: String,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate the configuration then exit.
    Check {
        /// Dump the parsed configuration as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
    /// Mount the widget and print the resulting page as HTML.
    Render,
    /// Mount the widget and follow auto-advance for a number of slide changes.
    Play {
        /// Number of slide changes to observe before exiting
        #[arg(long, default_value_t = 3)]
        ticks: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let env_filter = logging::env_filter_from_spec(&cli.log.spec());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().without_time().compact().with_writer(io::stderr))
        .init();

    let code = match cli.command {
        Command::Check { dump } => check(&cli.config, dump).await,
        Command::Render => render(&cli.config, &cli.target).await,
        Command::Play { ticks } => play(&cli.config, &cli.target, ticks).await,
    };
    process::exit(code);
}

async fn check(location: &str, dump: bool) -> i32 {
    let source = source_for(location);
    match config::load(&*source).await {
        Ok(cfg) => {
            if dump {
                match serde_json::to_string_pretty(&cfg) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        error!("failed to serialize config: {}", e);
                        return 1;
                    }
                }
            } else {
                println!(
                    "{}: ok ({} slides, autoplay {})",
                    location,
                    cfg.slide_count(),
                    match cfg.autoplay_interval() {
                        Some(d) => format!("every {}ms", d.as_millis()),
                        None => "off".to_string(),
                    }
                );
            }
            0
        }
        Err(e) => {
            error!("{}", e.pretty());
            1
        }
    }
}

async fn mount_page(location: &str, target: &str) -> (Page, Mount) {
    let page = Page::new(target);
    let source = source_for(location);
    let outcome = mount(page.dom.clone(), page.root, &*source).await;
    (page, outcome)
}

async fn render(location: &str, target: &str) -> i32 {
    let (page, outcome) = mount_page(location, target).await;
    println!("{}", page.to_html());
    match outcome {
        Mount::Ready(hero) => {
            hero.dispose();
            0
        }
        Mount::Fallback(_) => 1,
    }
}

async fn play(location: &str, target: &str, ticks: u32) -> i32 {
    let (_page, outcome) = mount_page(location, target).await;
    let hero = match outcome {
        Mount::Ready(hero) => hero,
        Mount::Fallback(_) => return 1,
    };
    let state = hero.state();
    if !state.timer_active || state.slide_count < 2 {
        info!("autoplay is off or there is nothing to advance to");
        return 0;
    }
    follow(&hero, ticks).await;
    hero.dispose();
    0
}

/// Log the current slide after each tick until `ticks` ticks were seen.
async fn follow(hero: &Hero, ticks: u32) {
    let mut changes = hero.controller().subscribe();
    let state = hero.state();
    info!(index = state.current_index, slides = state.slide_count, "playing");
    for tick in 1..=ticks {
        if changes.changed().await.is_err() {
            break;
        }
        let index = *changes.borrow_and_update();
        info!(index, tick, "slide");
    }
}
