use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::AppState;
use super::components::{Component, DetailComponent, HeaderComponent, ViewportComponent};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    let header = HeaderComponent;
    header.render(f, main_chunks[0], state);

    let viewport = ViewportComponent;
    viewport.render(f, main_chunks[1], state);

    let detail = DetailComponent;
    detail.render(f, main_chunks[2], state);

    render_footer(f, main_chunks[3], state);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let active = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    // Dim whichever direction is unavailable, like greyed-out buttons.
    let prev_style = if state.navigator.at_start() {
        disabled
    } else {
        active
    };
    let next_style = if state.navigator.at_end() {
        disabled
    } else {
        active
    };

    let hints = Line::from(vec![
        Span::styled("←/h", key),
        Span::styled(" previous epoch   ", prev_style),
        Span::styled("→/l", key),
        Span::styled(" next epoch   ", next_style),
        Span::styled("Home/End", key),
        Span::raw(" jump   "),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);

    let footer_widget = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer_widget, area);
}
