use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Path from the root screen to the deepest presented one.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, breadcrumbs: &[String]) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let last = breadcrumbs.len().saturating_sub(1);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (index, crumb) in breadcrumbs.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ›  ", separator_style));
            }
            let style = if index == last {
                Style::default().fg(ACCENT)
            } else {
                text_style
            };
            spans.push(Span::styled(crumb.clone(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
