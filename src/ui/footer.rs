use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the deepest screen plus the global keys.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        area: Rect,
        hints: &[(KeyCode, &'static str)],
        can_dismiss: bool,
    ) -> Paragraph<'static> {
        let hints = hint_text(hints, can_dismiss);
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain non-ASCII symbols.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

pub fn hint_text(hints: &[(KeyCode, &'static str)], can_dismiss: bool) -> String {
    let mut parts: Vec<String> = hints
        .iter()
        .map(|(code, label)| format!("{}: {}", key_label(*code), label))
        .collect();
    if can_dismiss {
        parts.push("Esc: Back".to_string());
    }
    parts.push("q: Quit".to_string());
    format!(" {}", parts.join(" │ "))
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_list_keys_then_globals() {
        let text = hint_text(&[(KeyCode::Char('s'), "start")], true);
        assert_eq!(text, " s: start │ Esc: Back │ q: Quit");
    }

    #[test]
    fn back_hint_only_when_dismissable() {
        let text = hint_text(&[], false);
        assert_eq!(text, " q: Quit");
    }
}
