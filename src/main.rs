use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use projboard::app::App;
use projboard::config::{self, Config};
use projboard::{handlers, logging, ui};

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e.into())
            }
        };
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config: {e}");
            Config::default()
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {e}");
    }

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "invalid key bindings, using defaults");
            eprintln!("Ignoring key bindings: {e}");
            App::new(Default::default())
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("started");
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &mut app))?;

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(&mut app, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!(projects = app.store.len(), "quit");
    Ok(())
}
