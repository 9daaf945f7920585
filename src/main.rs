// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod ui;

use app::App;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridmenu::{config::Config, logging};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return handle_cli_args(&args);
    }

    // Load config; the verbosity is fixed from here on
    let config = Config::load()?;
    let logs = logging::init(config.debug_mode)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, logs);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    for line in app.logs.recent(usize::MAX) {
        println!("{}", line);
    }

    res
}

fn handle_cli_args(args: &[String]) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No command provided"))?;
    let program_name = args.first().map_or("gridmenu", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("gridmenu v{}", env!("CARGO_PKG_VERSION")),
        "config-path" => println!("{}", Config::config_path()?.display()),
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("gridmenu - list menu demo");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  config-path - Print the configuration file location");
    println!("  --help      - Show this help");
    println!("  --version   - Show version");
    println!();
    println!("Run without arguments to start the interactive demo.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.redraw_menu();
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) => {
                // Only handle KeyPress events to avoid duplicate handling
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                    continue;
                }
                app::handle_key(app, key.code)?;
            }
            Event::Mouse(_)
            | Event::Paste(_)
            | Event::FocusGained
            | Event::FocusLost
            | Event::Resize(_, _) => {}
        }
    }

    Ok(())
}
