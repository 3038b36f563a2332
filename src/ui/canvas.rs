//! Terminal rendering surface for screens and their presentations.
//!
//! A [`Canvas`] draws into a ratatui buffer and records which keys the
//! visible screens respond to. It offers the three presentation primitives
//! the navigation layer drives: a push destination (primary or detail
//! column of the current navigation container), a modal sheet, and a
//! full-screen cover. Each primitive is gated by an [`IsPresented`] flag and
//! is invoked on every frame whether or not it is active.

use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::ui::layout::centered_rect;
use crate::ui::mvi::Emitter;
use crate::ui::navigation::{IsPresented, NavigationPlacement};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};

/// Below this width a navigation container does not split into columns.
pub const MIN_SPLIT_WIDTH: u16 = 64;

const SHEET_PERCENT_X: u16 = 70;
const SHEET_PERCENT_Y: u16 = 70;

type Fire = Arc<dyn Fn() -> bool + Send + Sync>;

/// Bordered frame every screen draws its body in.
pub fn screen_block(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

struct KeyBinding {
    depth: usize,
    key: KeyCode,
    label: &'static str,
    fire: Fire,
}

struct DismissBinding {
    depth: usize,
    fire: Fire,
}

/// Keys the current frame responds to.
///
/// Only the deepest presented screen is interactive; its dismissal gesture
/// is the one `Esc` triggers.
#[derive(Default)]
pub struct InputMap {
    keys: Vec<KeyBinding>,
    dismissals: Vec<DismissBinding>,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.dismissals.clear();
    }

    pub fn bind<A>(&mut self, depth: usize, key: KeyCode, label: &'static str, emitter: &Emitter<A>, intent: A)
    where
        A: Clone + Send + Sync + 'static,
    {
        let emitter = emitter.clone();
        self.keys.push(KeyBinding {
            depth,
            key,
            label,
            fire: Arc::new(move || emitter.send(intent.clone())),
        });
    }

    pub fn register_dismiss(&mut self, depth: usize, fire: Fire) {
        self.dismissals.push(DismissBinding { depth, fire });
    }

    /// Depth of the deepest presented screen in this frame.
    pub fn top_depth(&self) -> usize {
        let keys = self.keys.iter().map(|binding| binding.depth);
        let dismissals = self.dismissals.iter().map(|binding| binding.depth);
        keys.chain(dismissals).max().unwrap_or(0)
    }

    /// Fire the deepest screen's binding for `key`.
    pub fn dispatch_key(&self, key: KeyCode) -> bool {
        let top = self.top_depth();
        self.keys
            .iter()
            .rev()
            .find(|binding| binding.depth == top && binding.key == key)
            .is_some_and(|binding| (binding.fire)())
    }

    /// Trigger the dismissal gesture of the deepest presentation.
    pub fn dismiss_top(&self) -> bool {
        let top = self.top_depth();
        self.dismissals
            .iter()
            .rev()
            .find(|binding| binding.depth == top)
            .is_some_and(|binding| (binding.fire)())
    }

    pub fn can_dismiss(&self) -> bool {
        let top = self.top_depth();
        self.dismissals.iter().any(|binding| binding.depth == top)
    }

    /// Keys of the deepest screen, in registration order.
    pub fn hints(&self) -> Vec<(KeyCode, &'static str)> {
        let top = self.top_depth();
        self.keys
            .iter()
            .filter(|binding| binding.depth == top)
            .map(|binding| (binding.key, binding.label))
            .collect()
    }
}

/// Primary and detail columns of a navigation container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub primary: Rect,
    pub detail: Rect,
}

impl NavigationContext {
    /// Unsplit context: both placements share `area`.
    pub fn single(area: Rect) -> Self {
        Self {
            primary: area,
            detail: area,
        }
    }

    pub fn split(area: Rect, detail_percent: u16) -> Self {
        if area.width < MIN_SPLIT_WIDTH {
            return Self::single(area);
        }
        let detail_percent = detail_percent.clamp(10, 90);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - detail_percent),
                Constraint::Percentage(detail_percent),
            ])
            .split(area);
        Self {
            primary: columns[0],
            detail: columns[1],
        }
    }

    pub fn is_split(&self) -> bool {
        self.primary != self.detail
    }
}

pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    inputs: &'a mut InputMap,
    area: Rect,
    body: Rect,
    context: NavigationContext,
    depth: usize,
    detail_percent: u16,
}

impl<'a> Canvas<'a> {
    /// Root canvas over `body`, the region presentations may cover.
    pub fn new(buf: &'a mut Buffer, inputs: &'a mut InputMap, body: Rect, detail_percent: u16) -> Self {
        Self {
            buf,
            inputs,
            area: body,
            body,
            context: NavigationContext::single(body),
            depth: 0,
            detail_percent,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        widget.render(area, self.buf);
    }

    /// Bind `key` to dispatch `intent` while this screen is the deepest.
    pub fn on_key<A>(&mut self, key: KeyCode, label: &'static str, emitter: &Emitter<A>, intent: A)
    where
        A: Clone + Send + Sync + 'static,
    {
        self.inputs.bind(self.depth, key, label, emitter, intent);
    }

    /// Start a fresh navigation container over the current area.
    pub fn navigation_container<F>(&mut self, content: F)
    where
        F: FnOnce(&mut Canvas<'_>),
    {
        let context = NavigationContext::split(self.area, self.detail_percent);
        if context.is_split() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "  Nothing selected",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
            self.render_widget(hint, context.detail);
        }
        let depth = self.depth;
        let mut canvas = self.child(context.primary, context, depth);
        content(&mut canvas);
    }

    /// Push destination in the current navigation container.
    pub fn push_destination<F>(&mut self, placement: NavigationPlacement, is_presented: &IsPresented, content: F)
    where
        F: FnOnce(&mut Canvas<'_>),
    {
        if !is_presented.get() {
            self.placeholder();
            return;
        }
        let target = match placement {
            NavigationPlacement::Primary => self.context.primary,
            NavigationPlacement::Detail => self.context.detail,
        };
        let context = self.context;
        self.present_in(target, context, None, is_presented, content);
    }

    /// Modal sheet centered over the body.
    pub fn sheet<F>(&mut self, is_presented: &IsPresented, content: F)
    where
        F: FnOnce(&mut Canvas<'_>),
    {
        if !is_presented.get() {
            self.placeholder();
            return;
        }
        let area = centered_rect(SHEET_PERCENT_X, SHEET_PERCENT_Y, self.body);
        self.present_in(area, NavigationContext::single(area), Some(" sheet "), is_presented, content);
    }

    /// Modal covering the whole body.
    pub fn full_screen_cover<F>(&mut self, is_presented: &IsPresented, content: F)
    where
        F: FnOnce(&mut Canvas<'_>),
    {
        if !is_presented.get() {
            self.placeholder();
            return;
        }
        let area = self.body;
        self.present_in(area, NavigationContext::single(area), Some(" cover "), is_presented, content);
    }

    /// Attachment point of an inactive presentation. Draws nothing.
    pub fn placeholder(&mut self) {}

    fn present_in<F>(
        &mut self,
        area: Rect,
        context: NavigationContext,
        chrome: Option<&'static str>,
        is_presented: &IsPresented,
        content: F,
    ) where
        F: FnOnce(&mut Canvas<'_>),
    {
        self.render_widget(Clear, area);
        let (inner, context) = match chrome {
            Some(title) => {
                let block = Block::default()
                    .title(Span::styled(title, Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER));
                let inner = block.inner(area);
                self.render_widget(block, area);
                (inner, NavigationContext::single(inner))
            }
            None => (area, context),
        };

        let depth = self.depth + 1;
        self.inputs.register_dismiss(depth, is_presented.dismiss_handle());
        let mut canvas = self.child(inner, context, depth);
        content(&mut canvas);
    }

    fn child(&mut self, area: Rect, context: NavigationContext, depth: usize) -> Canvas<'_> {
        Canvas {
            buf: &mut *self.buf,
            inputs: &mut *self.inputs,
            area,
            body: self.body,
            context,
            depth,
            detail_percent: self.detail_percent,
        }
    }
}
