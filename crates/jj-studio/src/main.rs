use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod formatting;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use background::{spawn_background_worker, SharedState};
use jj_studio_config::AppConfig;
use middleware::{
    directory_picker_middleware::DirectoryPickerMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware, repository_middleware::RepositoryMiddleware,
    text_input_middleware::TextInputMiddleware, Middleware,
};
use reducers::app_reducer::reduce;
use state::AppState;

fn main() -> io::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting jj-studio, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::debug!("Loaded configuration: {:?}", config);

    let state = AppState::new(config.clone());
    let shared_state: SharedState = Arc::new(RwLock::new(state.clone()));

    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    // Middleware executes in this order
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(DirectoryPickerMiddleware::new()),
        Box::new(RepositoryMiddleware::new(&config)),
    ];
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state, &shared_state, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The worker may still be running if the app closed its last view
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        log::error!("Application error: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting jj-studio");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Apply everything the middleware chain let through
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to publish state: {}", e),
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Background worker is gone, quitting");
                    break;
                }
            }
        }
    }

    Ok(())
}
