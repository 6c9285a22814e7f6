//! Common UI styles and layout helpers for the card TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Card;

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Color::Gray)
    }
}

/// "label ........ value" line used by the summary panels
pub fn labeled_row<'a>(label: &'a str, value: String, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<32}", label), Styles::inactive()),
        Span::styled(value, value_style),
    ])
}

/// Screen title bar
pub fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .style(Styles::title())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// Compact card banner: brand, masked number and holder
pub fn draw_card_banner(f: &mut Frame, area: Rect, card: &Card) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", card.brand.as_str()), Styles::selected()),
            Span::raw(" "),
            Span::styled(card.masked_number.clone(), Styles::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(card.holder_name.clone(), Styles::inactive())),
        Line::from(Span::styled(format!("Expires: {}", card.expiry), Styles::inactive())),
    ];
    let banner = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border()),
    );
    f.render_widget(banner, area);
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
