//! Batch demo binary: feeds a byte stream through the terminal core and
//! prints the resulting grid (or the damage regions produced by the feed).
//! No PTY, no raw-mode input handling - this is a one-shot driver for
//! inspecting what the core does with a captured stream, not an interactive
//! terminal.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vtcore_core::{Callbacks, Terminal, TerminalConfig};
use vtcore_types::DamageKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Feed raw terminal output through vtcore and print the resulting grid", long_about = None)]
struct Args {
    /// Path to a file of raw terminal output; reads stdin when omitted.
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 80)]
    cols: u16,

    #[arg(long, default_value_t = 24)]
    rows: u16,

    #[arg(short, long)]
    debug: bool,

    /// Print damage regions produced by the feed instead of the final grid.
    #[arg(long)]
    damage: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "vtcore=debug" } else { "vtcore=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let input = read_input(&args.input)?;
    info!(bytes = input.len(), "read terminal output");

    let callbacks = Callbacks::new().with_device_response(Box::new(|bytes| {
        debug!(response = ?String::from_utf8_lossy(bytes), "device response (no PTY attached, dropped)");
    }));
    let config = TerminalConfig::new(args.cols, args.rows).with_callbacks(callbacks);
    let mut terminal = Terminal::new(config)?;
    let _ = terminal.take_damage();
    terminal.feed(&input);

    if args.damage {
        print_damage(&mut terminal);
    } else {
        print_grid(&terminal);
    }

    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_grid(terminal: &Terminal) {
    let snapshot = terminal.snapshot();
    for line in &snapshot.lines {
        let text: String = line
            .cells
            .iter()
            .filter(|cell| !cell.is_continuation())
            .map(|cell| if cell.cluster.is_empty() { " ".to_string() } else { cell.cluster.clone() })
            .collect();
        println!("{text}");
    }
    println!(
        "cursor: row={} col={} visible={}",
        snapshot.cursor.position.row, snapshot.cursor.position.col, snapshot.cursor.visible
    );
}

fn print_damage(terminal: &mut Terminal) {
    for region in terminal.take_damage() {
        let kind = match region.kind {
            DamageKind::Structural => "structural",
            DamageKind::Content => "content",
            DamageKind::Style => "style",
        };
        println!("row={} col={} len={} kind={kind}", region.row, region.col, region.len);
    }
}
