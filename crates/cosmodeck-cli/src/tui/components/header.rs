use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        render_title_bar(f, chunks[0], state);
        render_info_line(f, chunks[1], state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let record = state.current();

    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Cosmodeck",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" → {}", record.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let position = format!(
        "epoch {}/{}",
        state.navigator.index() + 1,
        state.navigator.len()
    );

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(position)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Right),
        layout[1],
    );
}

fn render_info_line(f: &mut Frame, area: Rect, state: &AppState) {
    let record = state.current();

    let info = Line::from(vec![
        Span::styled("Time: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(record.time_since_origin),
        Span::styled("   Temp: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(record.temperature.unwrap_or("n/a")),
    ]);

    f.render_widget(Paragraph::new(info), area);
}
