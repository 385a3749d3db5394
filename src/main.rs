mod ui;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use heropath::build_info;
use heropath::core::constants::LOG_FILE_NAME;
use heropath::utils::persistence::{data_path, FileStore};
use heropath::{EngineOptions, GameEngine};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::app::App;

struct CliArgs {
    save_path: Option<PathBuf>,
    fresh: bool,
}

fn print_help() {
    println!("Hero's Path - incremental terminal RPG\n");
    println!("Usage: heropath [options]\n");
    println!("Options:");
    println!("  --save <path>  Use this save file instead of ~/.heropath/save.json");
    println!("  --fresh        Ignore the existing save and start over");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nKeys: a attack, s heal, Up/Down + Enter buy, Tab shop, [ ] category,");
    println!("      R rebirth, q quit");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        save_path: None,
        fresh: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line("heropath"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--save" => {
                if i + 1 < args.len() {
                    cli.save_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("--save needs a path");
                    std::process::exit(1);
                }
            }
            "--fresh" => cli.fresh = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'heropath --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

/// Logs go to a file so they never draw over the terminal UI.
fn init_logging() -> anyhow::Result<()> {
    let path = data_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed.as_millis() > 0 {
            app.tick(elapsed.as_millis() as u64);
            last_tick = Instant::now();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    init_logging()?;

    let store = match cli.save_path {
        Some(path) => FileStore::new(path),
        None => FileStore::in_data_dir()?,
    };
    info!(save = %store.path().display(), fresh = cli.fresh, "starting heropath");

    let engine = GameEngine::with_options(
        Box::new(store),
        EngineOptions {
            load_save: !cli.fresh,
            ..EngineOptions::default()
        },
    );
    let mut app = App::new(engine);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run_game(&mut terminal, &mut app);

    // Restore the terminal before reporting anything.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.engine.save() {
        warn!(error = %e, "final save failed");
        eprintln!("Could not save the game: {}", e);
    }
    info!("exiting");
    outcome
}
