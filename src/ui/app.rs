use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::environment::AppEnvironment;
use crate::ui::canvas::{Canvas, InputMap};
use crate::ui::counter::CounterIntent;
use crate::ui::mvi::Store;
use crate::ui::screen::{render_screen, ScreenIntent, ScreenReducer, ScreenState};

/// Root of the running application: the screen store plus the keys the
/// last rendered frame responds to.
pub struct App {
    store: Store<ScreenReducer>,
    inputs: InputMap,
    detail_split_percent: u16,
    should_quit: bool,
}

impl App {
    pub fn new(root: ScreenState, environment: AppEnvironment, detail_split_percent: u16) -> Self {
        Self {
            store: Store::new(root, ScreenReducer, environment),
            inputs: InputMap::new(),
            detail_split_percent,
            should_quit: false,
        }
    }

    /// Kick off the root screen's own work. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        if let ScreenState::Counter(_) = self.store.state() {
            self.store.send(ScreenIntent::Counter(CounterIntent::Start));
        }
        tracing::info!(root = %self.store.state().title(), "app started");
    }

    pub fn state(&self) -> &ScreenState {
        self.store.state()
    }

    pub fn store(&self) -> &Store<ScreenReducer> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<ScreenReducer> {
        &mut self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Draw the screen tree into `body` and rebuild the input map.
    pub fn render(&mut self, buf: &mut Buffer, body: Rect) {
        self.inputs.clear();
        let mut canvas = Canvas::new(buf, &mut self.inputs, body, self.detail_split_percent);
        let store = &self.store;
        canvas.navigation_container(|canvas| render_screen(canvas, store.view()));
    }

    /// Fire the deepest screen's binding for `code` and process the result.
    pub fn dispatch_key(&mut self, code: KeyCode) -> bool {
        let fired = self.inputs.dispatch_key(code);
        self.store.drain_queued();
        fired
    }

    /// Dismiss the deepest presentation, as the back gesture does.
    pub fn dismiss_top(&mut self) -> bool {
        let fired = self.inputs.dismiss_top();
        self.store.drain_queued();
        fired
    }

    pub fn can_dismiss(&self) -> bool {
        self.inputs.can_dismiss()
    }

    pub fn hints(&self) -> Vec<(KeyCode, &'static str)> {
        self.inputs.hints()
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        self.store.state().breadcrumbs()
    }
}
