use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::canvas::{screen_block, Canvas};
use crate::ui::mvi::ScopedStore;
use crate::ui::navigation::PresentationBinding;
use crate::ui::operators::intent::OperatorsIntent;
use crate::ui::operators::state::OperatorsState;
use crate::ui::screen::{render_presented, screen_presentation};
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR};

pub fn render(canvas: &mut Canvas<'_>, store: ScopedStore<'_, OperatorsState, OperatorsIntent>) {
    let binding = PresentationBinding::new(
        &store,
        |state| &state.presentation,
        |child| OperatorsIntent::Presentation(Box::new(child)),
        OperatorsIntent::Dismiss,
        screen_presentation,
    );
    binding.render(canvas, |canvas| draw(canvas, &store), render_presented);
}

fn draw(canvas: &mut Canvas<'_>, store: &ScopedStore<'_, OperatorsState, OperatorsIntent>) {
    let state = store.state();
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Value: "),
            Span::styled(
                state.value.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if state.is_fork {
        lines.push(Line::from(Span::styled(
            "  forked",
            Style::default().fg(HEADER_SEPARATOR),
        )));
    }
    let area = canvas.area();
    canvas.render_widget(Paragraph::new(lines).block(screen_block(state.title())), area);

    let emitter = store.emitter();
    canvas.on_key(KeyCode::Char('+'), "+1", &emitter, OperatorsIntent::TappedAdd(1.0));
    canvas.on_key(KeyCode::Char('-'), "-1", &emitter, OperatorsIntent::TappedSubtract(1.0));
    canvas.on_key(KeyCode::Char('*'), "×2", &emitter, OperatorsIntent::TappedMultiply(2.0));
    canvas.on_key(KeyCode::Char('/'), "÷2", &emitter, OperatorsIntent::TappedDivide(2.0));
    canvas.on_key(KeyCode::Char('f'), "fork", &emitter, OperatorsIntent::TappedFork);
    canvas.on_key(KeyCode::Char('n'), "counter", &emitter, OperatorsIntent::TappedCounter);
}
