//! The post feed pane.

use crate::ChatWidget;

use geofeed_core::{MediaBlob, MediaKind, Post, format_date, format_timer};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub(crate) fn render(frame: &mut Frame<'_>, area: Rect, widget: &ChatWidget) {
    let items: Vec<ListItem<'_>> = widget
        .timeline()
        .posts()
        .iter()
        .map(post_item)
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Timeline"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(widget.selected());

    frame.render_stateful_widget(list, area, &mut state);
}

fn post_item(post: &Post) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        format_date(post.created_at),
        Style::default().fg(Color::DarkGray),
    ))];

    match &post.media {
        Some(blob) => lines.push(media_line(blob)),
        None => lines.push(Line::from(post.text.as_str())),
    }

    if let Some(coords) = post.coords {
        lines.push(Line::from(Span::styled(
            coords.to_string(),
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::default());

    ListItem::new(Text::from(lines))
}

/// The playable attachment row of a recorded post.
fn media_line(blob: &MediaBlob) -> Line<'_> {
    let label = match blob.kind {
        MediaKind::Audio => {
            let duration = blob.duration_secs().map(format_timer);
            format!(
                "[voice note · {} · {}]",
                duration.as_deref().unwrap_or("??:??"),
                human_size(blob.len())
            )
        }
        MediaKind::Video => format!("[video clip · {}]", human_size(blob.len())),
    };

    Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}
