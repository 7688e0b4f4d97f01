use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};
use tokio::sync::{mpsc, watch};

use typeahead::app::App;
use typeahead::config::{self, Config};
use typeahead::logging;
use typeahead::lookup::RegistryLookup;
use typeahead::navigation::RouteNavigator;
use typeahead::search::{SearchSession, SearchState};

/// Interactive package search against a registry
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Registry base URL (overrides the config file)
    #[arg(short, long)]
    registry: Option<String>,

    /// Quiet period in milliseconds before a typed query is searched
    #[arg(short, long)]
    debounce_ms: Option<u64>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(url) = args.registry {
        config.registry.url = url;
    }
    if let Some(ms) = args.debounce_ms {
        config.search.debounce_ms = ms;
    }

    logging::init(args.log_file.as_deref())?;
    log::debug!("Starting with registry {}", config.registry.url);

    let lookup = RegistryLookup::new(&config.registry.url, config.registry.timeout())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = runtime.block_on(run(terminal, config, lookup));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    if let Some(route) = result? {
        println!("{}", route);
    }
    Ok(())
}

/// Drive the UI until the user quits or opens a package
async fn run(
    mut terminal: DefaultTerminal,
    config: Config,
    lookup: RegistryLookup,
) -> Result<Option<String>> {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (state_tx, mut state_rx) = watch::channel(SearchState::default());
    let (routes_tx, mut routes_rx) = mpsc::unbounded_channel();

    let session = SearchSession::new(
        Arc::new(lookup),
        state_tx,
        RouteNavigator::new(routes_tx),
        config.search.debounce(),
    );
    let session = tokio::spawn(session.run(events_rx));

    let mut terminal_events = spawn_terminal_reader();
    let mut app = App::new(&config.ui.placeholder);
    let mut route = None;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some(read) = terminal_events.recv() => {
                if let Some(ui_event) = app.handle_terminal_event(read?) {
                    // The session only stops after this loop drops the sender
                    let _ = events_tx.send(ui_event);
                }
            }
            Ok(()) = state_rx.changed() => {
                app.apply_snapshot(state_rx.borrow_and_update().clone());
            }
            Some(next) = routes_rx.recv() => {
                route = Some(next);
                break;
            }
            else => break,
        }

        if app.should_quit() {
            break;
        }
    }

    // Closing the event channel tears the session down
    drop(events_tx);
    if let Err(e) = session.await {
        log::debug!("Search session ended abnormally: {}", e);
    }

    Ok(route)
}

/// Read terminal events on a blocking thread
fn spawn_terminal_reader() -> mpsc::UnboundedReceiver<std::io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        loop {
            let read = event::read();
            let failed = read.is_err();
            if tx.send(read).is_err() || failed {
                break;
            }
        }
    });
    rx
}
