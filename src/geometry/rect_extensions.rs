use sdl2::rect::Rect;

use crate::geometry::bounds::Bounds;

pub trait RectExtensions {
    fn to_rect(&self) -> Rect;
}

impl RectExtensions for Bounds {
    fn to_rect(&self) -> Rect {
        Rect::new(
            self.left.floor() as i32,
            self.top.floor() as i32,
            self.width().round().max(1.0) as u32,
            self.height().round().max(1.0) as u32,
        )
    }
}
