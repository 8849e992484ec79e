use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Points},
    },
};

use super::Component;
use crate::tui::app::AppState;
use cosmodeck_core::{Rgb, Scene};

pub(crate) struct ViewportComponent;

impl Component for ViewportComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let record = state.current();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", record.visual_style));

        let inner = block.inner(area);
        if inner.width < 2 || inner.height < 2 {
            f.render_widget(block, area);
            return;
        }

        // Recompose from scratch every frame. The seed folds in the inner
        // dimensions, so a resize lands on a fresh scatter while the
        // recipe stays fixed per style.
        let seed = state.scene_seed(inner.width, inner.height);
        let scene = Scene::compose(record.visual_style, seed);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(to_color(scene.background))
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for ring in &scene.rings {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: ring.radius,
                        color: to_color(ring.color),
                    });
                }
                for blob in &scene.blobs {
                    ctx.draw(&Circle {
                        x: blob.x,
                        y: blob.y,
                        radius: blob.radius,
                        color: to_color(blob.color),
                    });
                    // Braille circles are outlines; mark the core too.
                    ctx.draw(&Points {
                        coords: &[(blob.x, blob.y)],
                        color: to_color(blob.color),
                    });
                }
                for dot in &scene.dots {
                    ctx.draw(&Points {
                        coords: &[(dot.x, dot.y)],
                        color: to_color(dot.color),
                    });
                }
            });

        f.render_widget(canvas, area);
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
