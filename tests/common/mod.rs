//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use recursive_nav::environment::AppEnvironment;
use recursive_nav::ui::app::App;
use recursive_nav::ui::counter::CounterState;
use recursive_nav::ui::operators::OperatorsState;
use recursive_nav::ui::screen::ScreenState;

pub const DETAIL_SPLIT: u16 = 40;

pub fn operators_app() -> App {
    App::new(ScreenState::default(), AppEnvironment::test(), DETAIL_SPLIT)
}

pub fn counter_app() -> App {
    App::new(
        ScreenState::Counter(CounterState::default()),
        AppEnvironment::test(),
        DETAIL_SPLIT,
    )
}

/// Render the app body into a fresh buffer of the given size.
pub fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    app.render(&mut buf, area);
    buf
}

pub fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.left()..buf.area.right())
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

/// Column and row of the first occurrence of `needle`.
pub fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (buf.area.top()..buf.area.bottom()).find_map(|y| {
        let row = row_text(buf, y);
        row.find(needle)
            .map(|index| (row[..index].chars().count() as u16, y))
    })
}

pub fn contains(buf: &Buffer, needle: &str) -> bool {
    find(buf, needle).is_some()
}

pub fn as_counter(state: &ScreenState) -> &CounterState {
    match state {
        ScreenState::Counter(counter) => counter,
        other => panic!("expected counter, got {other:?}"),
    }
}

pub fn as_operators(state: &ScreenState) -> &OperatorsState {
    match state {
        ScreenState::Operators(operators) => operators,
        other => panic!("expected operators, got {other:?}"),
    }
}
