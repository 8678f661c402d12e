//! Overlays: the coordinate modal, the live capture preview, and popovers.

use crate::{ChatWidget, Tooltip, TooltipTarget, popover_rect, ui::TargetRects};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 7;

const POPOVER_MAX_WIDTH: u16 = 48;
const POPOVER_MIN_WIDTH: u16 = 20;

/// The manual coordinate-entry modal, centered over the feed.
pub(crate) fn render_coords_modal(
    frame: &mut Frame<'_>,
    area: Rect,
    widget: &ChatWidget,
    targets: &mut TargetRects,
) {
    let Some(prompt) = widget.prompt() else {
        return;
    };

    let modal = centered(area, MODAL_WIDTH, MODAL_HEIGHT);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Post coordinates");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let marked = widget.tooltip().is_marked(TooltipTarget::CoordsInput);
    let border_style = if marked {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Coordinates");
    let input_inner = input_block.inner(rows[0]);

    frame.render_widget(
        Paragraph::new(prompt.input.as_str()).block(input_block),
        rows[0],
    );
    targets.coords_input = Some(rows[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter submit · Esc cancel · Ctrl+H format",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[1],
    );

    let x = input_inner.x + prompt.input.len().min(usize::from(input_inner.width)) as u16;
    frame.set_cursor_position((x, input_inner.y));
}

/// The live capture pane shown while recording video.
pub(crate) fn render_preview(frame: &mut Frame<'_>, area: Rect, widget: &ChatWidget) {
    let stats = widget.capture_stats().unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "recording",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  elapsed {}", widget.timer_display())),
        ]),
        Line::from(format!(
            "captured {} bytes in {} chunks",
            stats.bytes, stats.chunks
        )),
        Line::from(Span::styled(
            "camera is live",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Live preview")),
        area,
    );
}

/// Draw every registered popover above its anchor.
pub(crate) fn render_popovers(
    frame: &mut Frame<'_>,
    area: Rect,
    tooltip: &Tooltip,
    targets: &TargetRects,
) {
    for popover in tooltip.iter() {
        // Anchors inside closed overlays have no rect this frame.
        let Some(target_rect) = targets.rect_for(popover.target) else {
            continue;
        };

        let title = popover.message.title.as_str();
        let content = popover.message.content.as_str();

        let width = (title.len().max(content.len()) as u16 + 4)
            .clamp(POPOVER_MIN_WIDTH, POPOVER_MAX_WIDTH)
            .min(area.width);
        let inner_width = width.saturating_sub(2).max(1);
        let content_rows = (content.len() as u16).div_ceil(inner_width).max(1);
        let height = content_rows + 3;

        let rect = popover_rect(target_rect, width, height, area);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(content),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            rect,
        );
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
