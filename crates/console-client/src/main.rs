// crates/console-client/src/main.rs

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use console_client::api::{Backend, HttpBackend};
use console_client::app::{App, InputMode};
use console_client::config::ClientConfig;
use console_client::{runtime, ui};
use console_core::render::options_html;
use console_core::{Command, Console, Event};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as TermEvent, EventStream, KeyCode,
        KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend as TermBackend, CrosstermBackend},
    Terminal,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "order-console")]
#[clap(about = "Terminal console for monitoring and placing orders against the trading backend")]
struct Cli {
    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// API root, e.g. http://localhost:8080/api
    #[clap(short, long)]
    api_root: Option<String>,

    /// Seconds between order / execution-log refreshes
    #[clap(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    refresh_secs: Option<u64>,

    /// Load every feed once, print the rendered markup and exit
    #[clap(long)]
    snapshot: bool,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Log file used with --debug
    #[clap(long)]
    log_file: Option<PathBuf>,
}

// Single-threaded: every request and timer interleaves on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(api_root) = cli.api_root {
        config.api_root = api_root;
    }
    if let Some(secs) = cli.refresh_secs {
        config.refresh_secs = secs;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }

    // Setup logging; the terminal belongs to the UI, so it goes to a file
    if cli.debug {
        init_logging(&config.log_file)?;
    }

    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(&config.api_root, config.request_timeout())
            .context("building HTTP client")?,
    );

    if cli.snapshot {
        return print_snapshot(backend.as_ref()).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    // Create app and run
    let app = App::new(&config.api_root);
    let res = run_app(&mut terminal, app, backend, config.refresh_period()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("console_client=debug,info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn print_snapshot(backend: &dyn Backend) -> Result<()> {
    let mut console = Console::new(Local);
    let commands = console.initial_load();
    runtime::settle(&mut console, backend, commands).await;

    let page = console.page();
    println!("<div id=\"accounts-list\">\n{}\n</div>", page.accounts.to_cards_html());
    println!("<select id=\"accountId\">{}</select>", options_html(&page.account_options));
    println!("<tbody id=\"orders-body\">\n{}\n</tbody>", page.orders.to_html());
    println!("<tbody id=\"logs-body\">\n{}\n</tbody>", page.execution_logs.to_html());
    println!("<div id=\"message\">{}</div>", console.message().to_html());
    Ok(())
}

async fn run_app<B: TermBackend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    backend: Arc<dyn Backend>,
    period: Duration,
) -> Result<()> {
    // Spawned requests report back here
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    info!("Loading from {}...", app.api_root);
    runtime::spawn_all(app.console.initial_load(), &backend, &tx);

    let mut sync = runtime::sync_interval(period);
    let mut term_events = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        let hide_at = app.console.message().deadline();

        let commands = tokio::select! {
            _ = sync.tick() => app.tick(),

            Some(event) = rx.recv() => app.handle_event(event, Instant::now()),

            _ = sleep_until(hide_at.unwrap_or_else(Instant::now)), if hide_at.is_some() => {
                app.console.expire_message(Instant::now());
                Vec::new()
            }

            maybe = term_events.next() => match maybe {
                Some(Ok(TermEvent::Key(key))) => handle_key(&mut app, key),
                Some(Ok(_)) => Vec::new(),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        };

        runtime::spawn_all(commands, &backend, &tx);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    match app.input_mode {
        InputMode::Normal => match key.code {
            // Global hotkeys
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.should_quit = true;
            }
            KeyCode::Tab => app.next_panel(),
            KeyCode::BackTab => app.prev_panel(),
            KeyCode::F(1) => app.toggle_help(),

            // Order entry hotkeys
            KeyCode::Char('n') | KeyCode::Char('N') => app.start_order_entry(),
            KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_order_type(),
            KeyCode::Char('c') | KeyCode::Char('C') => return app.cancel_selected_order(),
            KeyCode::Char('r') | KeyCode::Char('R') => return app.refresh(),

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

            _ => {}
        },

        InputMode::Editing => match key.code {
            KeyCode::Enter => return app.submit_order(Instant::now()),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Tab => app.next_panel(),
            KeyCode::BackTab => app.prev_panel(),
            KeyCode::F(1) => app.toggle_help(),
            KeyCode::Up => app.move_selection_up(),
            KeyCode::Down => app.move_selection_down(),
            KeyCode::Left => app.cycle_choice(false),
            KeyCode::Right => app.cycle_choice(true),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Char(c) => app.enter_char(c),
            _ => {}
        },
    }

    Vec::new()
}
