use std::fs::{self, OpenOptions};
use std::io::{self, stdout, Stdout};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod error;
mod models;
mod theme;
mod ui;

use app::App;
use ui::ViewOptions;

/// Route tracing output to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore a second init (only possible in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(config::default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}: {})", log_path.display(), e);
    }
    info!(version = cli::VERSION, "starting msa-flow-tui");

    let (catalog, source) =
        config::resolve_catalog(args.catalog.as_deref(), &config::catalog_search_paths())
            .context("failed to load flow catalog")?;
    info!(%source, flows = catalog.len(), "catalog ready");

    // An unusable --flow fails every mode, reports included
    if let Some(flow) = args.flow {
        catalog
            .require(flow)
            .with_context(|| format!("cannot start on flow '{}'", flow))?;
    }

    let mut out = stdout().lock();
    if args.list_flows {
        return Ok(cli::write_flow_list(&mut out, &catalog)?);
    }
    if args.dump_catalog {
        return Ok(cli::write_catalog_json(&mut out, &catalog)?);
    }
    if args.check {
        return Ok(cli::write_check_summary(&mut out, &catalog, &source)?);
    }
    drop(out);

    let mut app = App::new(
        catalog,
        ViewOptions {
            show_architecture: !args.no_architecture,
            ..ViewOptions::default()
        },
    );
    if let Some(flow) = args.flow {
        app = app
            .with_initial_flow(flow)
            .with_context(|| format!("cannot start on flow '{}'", flow))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    // Restore the terminal before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .and_then(|mut terminal| run(&mut terminal, &mut app));

    restore_terminal()?;
    if let Err(ref e) = result {
        warn!(error = %e, "terminal loop failed");
    }
    let cursor = app.navigator.cursor();
    info!(flow = %cursor.flow, step = cursor.step, "exiting");

    Ok(result?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Draw, then block on the next input event. Every event is handled to
/// completion before the next frame is drawn.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;
        app.handle_event(event::read()?);
    }
    Ok(())
}
