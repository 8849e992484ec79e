use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct DetailComponent;

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let record = state.current();

        let mut lines = vec![Line::from(Span::raw(record.description))];
        if let Some(note) = record.note {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(Color::DarkGray),
            )));
        }

        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Key events "),
        );

        f.render_widget(widget, area);
    }
}
