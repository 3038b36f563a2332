use crate::config::Config;
use crate::environment::AppEnvironment;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screen::ScreenIntent;
use crate::ui::terminal_guard::setup_terminal;

enum Step {
    Event(Option<AppEvent>),
    Delivered(ScreenIntent),
}

pub async fn run(config: &Config) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal()?;
    let environment = AppEnvironment::live(config.ui.tick_interval());
    let mut app = App::new(
        config.ui.initial_screen.state(),
        environment,
        config.ui.detail_split_percent,
    );
    app.start();
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        let step = tokio::select! {
            event = events.next() => Step::Event(event),
            intent = app.store_mut().next() => Step::Delivered(intent),
        };

        match step {
            Step::Event(Some(AppEvent::Key(key))) => handle_key(&mut app, key),
            Step::Event(Some(AppEvent::Resize(cols, rows))) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Step::Event(None) => {
                tracing::warn!("input closed, shutting down");
                break;
            }
            Step::Delivered(intent) => tracing::trace!(?intent, "effect delivery processed"),
        }
    }

    drop(app);
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
