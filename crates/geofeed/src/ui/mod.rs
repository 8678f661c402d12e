//! Frame rendering.
//!
//! The renderer reads the widget and draws; it never mutates state. Target
//! rects for popover anchors are collected during layout so the popover
//! pass can position each box above its live anchor.

mod overlay;
mod timeline_pane;

use crate::{ChatWidget, TooltipTarget};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// On-screen rects of popover-anchorable widgets, filled in during layout.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TargetRects {
    pub(crate) message_input: Option<Rect>,
    pub(crate) coords_input: Option<Rect>,
}

impl TargetRects {
    pub(crate) fn rect_for(&self, target: TooltipTarget) -> Option<Rect> {
        match target {
            TooltipTarget::MessageInput => self.message_input,
            TooltipTarget::CoordsInput => self.coords_input,
        }
    }
}

/// Draw one frame of the widget.
pub fn draw(frame: &mut Frame<'_>, widget: &ChatWidget, show_key_hints: bool) {
    let area = frame.area();
    let mut targets = TargetRects::default();

    let mut constraints = Vec::with_capacity(5);
    let banner_slot = widget.banner().is_some();
    if banner_slot {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(5));
    let preview_slot = widget.preview_visible();
    if preview_slot {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if banner_slot {
        render_banner(frame, chunks[next], widget);
        next += 1;
    }
    timeline_pane::render(frame, chunks[next], widget);
    next += 1;
    if preview_slot {
        overlay::render_preview(frame, chunks[next], widget);
        next += 1;
    }
    render_status(frame, chunks[next], widget, show_key_hints);
    next += 1;
    render_compose(frame, chunks[next], widget, &mut targets);

    if widget.prompt().is_some() {
        overlay::render_coords_modal(frame, area, widget, &mut targets);
    }

    overlay::render_popovers(frame, area, widget.tooltip(), &targets);
}

fn render_banner(frame: &mut Frame<'_>, area: Rect, widget: &ChatWidget) {
    let Some(text) = widget.banner() else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {text} "),
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        Span::styled(" Ctrl+B to dismiss ", Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, widget: &ChatWidget, show_key_hints: bool) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(area);

    let left = if widget.is_recording() {
        Line::from(vec![
            Span::styled(
                " REC ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Ctrl+F finish · Ctrl+X cancel"),
        ])
    } else if widget.is_playing() {
        Line::from(Span::styled(
            " playing... (Ctrl+P replays the selected post)",
            Style::default().fg(Color::Cyan),
        ))
    } else if show_key_hints {
        Line::from(Span::styled(
            " Enter post · Ctrl+A voice · Ctrl+V video · Ctrl+P play · Ctrl+H keys",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(left), halves[0]);

    let timer_style = if widget.is_recording() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let timer = Line::from(Span::styled(widget.timer_display(), timer_style));
    frame.render_widget(Paragraph::new(timer), halves[1]);
}

fn render_compose(
    frame: &mut Frame<'_>,
    area: Rect,
    widget: &ChatWidget,
    targets: &mut TargetRects,
) {
    let marked = widget.tooltip().is_marked(TooltipTarget::MessageInput);
    let border_style = if marked {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Message");
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(widget.input()).block(block), area);
    targets.message_input = Some(area);

    // Cursor sits after the typed text unless the modal has focus.
    if widget.prompt().is_none() {
        let x = inner.x + widget.input().len().min(usize::from(inner.width)) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}
