use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::canvas::{screen_block, Canvas};
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::ScopedStore;
use crate::ui::navigation::{in_presentation_context, PresentationBinding, PresentationType};
use crate::ui::operators::{self, OperatorsIntent, OperatorsState};
use crate::ui::screen::captured_operators_presentation;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, STATUS_OK};

pub fn render(canvas: &mut Canvas<'_>, store: ScopedStore<'_, CounterState, CounterIntent>) {
    let binding = PresentationBinding::new(
        &store,
        |state| &state.operators,
        CounterIntent::Operators,
        CounterIntent::Dismiss,
        captured_operators_presentation,
    );
    binding.render(canvas, |canvas| draw(canvas, &store), render_captured);
}

fn render_captured(
    style: PresentationType,
    store: ScopedStore<'_, OperatorsState, OperatorsIntent>,
    canvas: &mut Canvas<'_>,
) {
    in_presentation_context(canvas, style, |canvas| operators::render(canvas, store));
}

fn draw(canvas: &mut Canvas<'_>, store: &ScopedStore<'_, CounterState, CounterIntent>) {
    let state = store.state();
    let timer = if state.is_running() {
        Span::styled("running", Style::default().fg(STATUS_OK))
    } else {
        Span::styled("stopped", Style::default().fg(HEADER_SEPARATOR))
    };
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Count: "),
            Span::styled(
                state.counter.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::raw("  Timer: "), timer]),
    ];
    let area = canvas.area();
    canvas.render_widget(Paragraph::new(lines).block(screen_block(state.title())), area);

    let emitter = store.emitter();
    canvas.on_key(KeyCode::Char('s'), "start", &emitter, CounterIntent::Start);
    canvas.on_key(KeyCode::Char('x'), "stop", &emitter, CounterIntent::Stop);
    canvas.on_key(KeyCode::Char('c'), "capture", &emitter, CounterIntent::TappedCapture);
}
