use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use portfolio_term::actions::files;
use portfolio_term::data::page::Page;
use portfolio_term::data::state::AppState;
use portfolio_term::ui::app;
use tracing_subscriber::EnvFilter;

/// Browse a portfolio through a shell-like terminal
#[derive(Parser, Debug)]
#[command(name = "portfolio-term")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a profile file (default: built-in profile)
    #[arg(value_name = "PROFILE")]
    profile: Option<PathBuf>,

    /// Create a new profile template at the specified path
    #[arg(long, value_name = "PATH")]
    new: Option<PathBuf>,

    /// Page to open on start
    #[arg(long, value_enum, default_value_t = Page::Home)]
    page: Page,

    /// Start with the terminal panel hidden
    #[arg(long)]
    hidden: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error opening log file: {}", e);
            std::process::exit(1);
        }
    }

    // Handle --new flag: create template and exit
    if let Some(path) = args.new {
        if let Err(e) = files::create_template(&path) {
            eprintln!("Error creating template: {}", e);
            std::process::exit(1);
        }
        println!("Created profile template at: {}", path.display());
        return;
    }

    let profile = match files::load_profile(args.profile.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error loading profile: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = AppState::new(profile, args.page);
    state.terminal_visible = !args.hidden;

    if let Err(e) = app::run(&mut state) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Send tracing output to `path`; the TUI owns stdout.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_term=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
