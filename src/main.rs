use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use frameview::dialog::{ConsolePrompt, FileDialogPicker};
use frameview::display::{DisplayGeometry, HighguiSurface, WinitGeometry};
use frameview::shell::SessionShell;
use frameview::utils::LastDirStore;

/// frameview - a minimal frame-accurate video playback viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Video file to play; a file picker opens when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting frameview v{}", env!("CARGO_PKG_VERSION"));

    let geometry = WinitGeometry::new()?;
    let monitor = geometry.primary_monitor_box()?;

    let mut surface = HighguiSurface::new();
    let mut picker = FileDialogPicker;
    let mut prompt = ConsolePrompt;
    let last_dir = LastDirStore::default_location()?;

    let mut shell = SessionShell::new(&mut surface, &mut picker, &mut prompt, monitor, last_dir);
    shell.run(args.file)?;

    info!("Exited cleanly");
    Ok(())
}
