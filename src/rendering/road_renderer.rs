use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::geometry::Bounds;
use crate::rendering::to_color;
use crate::theme::Theme;

const DASH_LENGTH: i32 = 20;
const DASH_GAP: i32 = 20;
const DASH_WIDTH: u32 = 4;
const LANES: i32 = 3;

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn render_background(canvas: &mut Canvas<Window>, theme: &Theme) {
        canvas.set_draw_color(to_color(theme.background));
        canvas.clear();
    }

    /// Dashed lane dividers; `scroll` shifts them down so the road appears to move.
    pub fn render_lane_markers(
        canvas: &mut Canvas<Window>,
        theme: &Theme,
        area: &Bounds,
        scroll: f32,
    ) -> Result<(), String> {
        canvas.set_draw_color(to_color(theme.lane_marking()));

        let period = DASH_LENGTH + DASH_GAP;
        let offset = (scroll as i32).rem_euclid(period) - period;
        let lane_width = area.width() as i32 / LANES;
        let height = area.height() as i32;

        for lane in 1..LANES {
            let x = area.left as i32 + lane * lane_width - DASH_WIDTH as i32 / 2;
            let mut y = area.top as i32 + offset;
            while y < height {
                canvas.fill_rect(Rect::new(x, y, DASH_WIDTH, DASH_LENGTH as u32))?;
                y += period;
            }
        }
        Ok(())
    }
}
