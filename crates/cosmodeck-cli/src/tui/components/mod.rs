use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod detail;
pub(crate) mod header;
pub(crate) mod viewport;

pub(crate) use detail::DetailComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use viewport::ViewportComponent;
