use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 3;
const ALERT_HEIGHT: u16 = 3;
const RESULT_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;
const SUBMIT_WIDTH: u16 = 14;

pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub alert: Rect,
    pub result: Rect,
    pub footer: Rect,
}

/// Splits the screen top to bottom. Alert and result collapse to zero height
/// when there is nothing to show.
pub fn regions(area: Rect, show_alert: bool, show_result: bool) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(if show_alert { ALERT_HEIGHT } else { 0 }),
            Constraint::Length(if show_result { RESULT_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SUBMIT_WIDTH)])
        .split(rows[1]);

    Regions {
        header: rows[0],
        input: form[0],
        submit: form[1],
        alert: rows[2],
        result: rows[3],
        footer: rows[5],
    }
}
