use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use shortly_core::{FormViewModel, SUBMIT_LABEL};

use super::constants::*;
use super::layout::regions;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, view: &FormViewModel, spinner_frame: usize) {
    let area = frame.area();
    let show_alert = view.alert.is_some();
    let show_result = view.short_url.is_some();
    let regions = regions(area, show_alert, show_result);

    frame.render_widget(header(), regions.header);
    frame.render_widget(input_box(view), regions.input);
    frame.render_widget(submit_button(view, spinner_frame), regions.submit);
    if let Some(alert) = &view.alert {
        frame.render_widget(alert_box(alert), regions.alert);
    }
    if let Some(short_url) = &view.short_url {
        frame.render_widget(result_box(short_url, view), regions.result);
    }
    frame.render_widget(footer(regions.footer), regions.footer);

    if view.input_enabled {
        place_cursor(frame, regions.input, &view.input_text);
    }
}

pub fn submit_label(view: &FormViewModel, spinner_frame: usize) -> String {
    if view.show_spinner {
        SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()].to_string()
    } else {
        SUBMIT_LABEL.to_string()
    }
}

pub fn copy_button_text(view: &FormViewModel) -> String {
    format!("[ {} ]", view.copy_label)
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(TEXT))),
    ])
    .alignment(Alignment::Center)
}

fn input_box(view: &FormViewModel) -> Paragraph<'static> {
    let line = if view.input_text.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(PLACEHOLDER),
        ))
    } else {
        Line::from(Span::styled(
            view.input_text.clone(),
            Style::default().fg(TEXT),
        ))
    };
    let mut style = Style::default();
    if !view.input_enabled {
        style = style.add_modifier(Modifier::DIM);
    }
    Paragraph::new(line).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title(" URL "),
    )
}

fn submit_button(view: &FormViewModel, spinner_frame: usize) -> Paragraph<'static> {
    let mut style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    if !view.submit_enabled {
        style = Style::default().fg(PLACEHOLDER);
    }
    Paragraph::new(submit_label(view, spinner_frame))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
}

fn alert_box(alert: &str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(alert.to_string(), Style::default().fg(ALERT)),
        Span::styled("  (Esc ×)", Style::default().fg(PLACEHOLDER)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ALERT)),
    )
}

fn result_box(short_url: &str, view: &FormViewModel) -> Paragraph<'static> {
    let copy_style = if view.copy_label == shortly_core::COPIED_LABEL {
        Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    Paragraph::new(vec![
        Line::from(Span::styled(RESULT_HEADING, Style::default().fg(TEXT))),
        Line::from(vec![
            Span::styled(
                short_url.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(copy_button_text(view), copy_style),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    )
}

fn footer(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count.
    let hints_width = KEY_HINTS.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(KEY_HINTS, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    )
}

fn place_cursor(frame: &mut Frame<'_>, input: Rect, text: &str) {
    if input.width < 3 || input.height < 3 {
        return;
    }
    let max_offset = input.width.saturating_sub(3);
    let offset = (text.chars().count() as u16).min(max_offset);
    frame.set_cursor_position((input.x + 1 + offset, input.y + 1));
}
