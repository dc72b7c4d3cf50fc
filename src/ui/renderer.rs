use crate::config::Config;
use crate::service::SimulatedDeletionService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Async event loop with background task support
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let service = Arc::new(SimulatedDeletionService::new(
        Duration::from_millis(config.service.request_delay_ms),
        config.account.deletion_date.clone(),
    ));
    let mut app = AppComponent::new(&config, service);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Background completions surface as actions on tick
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    for action in background_actions {
                        app.apply_action(action);
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
