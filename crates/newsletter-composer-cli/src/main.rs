use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use newsletter_composer_config::{Config, Launch};
use newsletter_composer_engine::{Composer, JsonStore, OwnerId};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

mod app;
mod ui;

use app::{App, Flow};

/// Written next to the store's record folders by the export key
const EXPORT_FILE: &str = "newsletter.html";

fn main() -> Result<()> {
    // The terminal UI owns stdout, so only log when asked to
    if env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "newsletter-composer-cli".to_string());
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} [store-directory]");
            process::exit(1);
        }
    };

    let launch = match Launch::resolve(args.get(1..).unwrap_or_default(), config) {
        Ok(launch) => launch,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [store-directory]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    let store = match JsonStore::create(&launch.store_path) {
        Ok(store) => store,
        Err(e) => {
            let source = if launch.from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Store path '{}'{source} is invalid: {e}",
                launch.store_path.display()
            );
            process::exit(1);
        }
    };

    let mut composer = Composer::new(OwnerId::new(launch.owner));
    if let Some(name) = launch.template_name {
        composer = composer.with_template_name(name);
    }
    let mut app = App::new(composer, store, launch.store_path.join(EXPORT_FILE));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    if app.snapshot().unsaved_changes {
        eprintln!("Quit with unsaved changes");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<JsonStore>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}
