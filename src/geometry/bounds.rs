use crate::geometry::position::Position;

/// Axis-aligned rectangle in window pixels, `left <= right`, `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Bounds {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Bounds::new(0.0, 0.0, width, height)
    }

    pub fn at(position: Position, width: f32, height: f32) -> Self {
        Bounds::new(
            position.x,
            position.y,
            position.x + width,
            position.y + height,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Position {
        Position {
            x: self.left + self.width() / 2.0,
            y: self.top + self.height() / 2.0,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    pub fn is_inside(&self, outer: &Bounds, allowed_margin: f32) -> bool {
        outer.left - self.left <= allowed_margin
            && self.right - outer.right <= allowed_margin
            && outer.top - self.top <= allowed_margin
            && self.bottom - outer.bottom <= allowed_margin
    }

    /// Box of valid positions for the center of an object of the given size,
    /// so that the object stays fully inside `self`.
    pub fn center_bounds(&self, width: f32, height: f32) -> Bounds {
        let x_padding = (width / 2.0).min(self.width() / 2.0);
        let y_padding = (height / 2.0).min(self.height() / 2.0);
        Bounds::new(
            self.left + x_padding,
            self.top + y_padding,
            self.right - x_padding,
            self.bottom - y_padding,
        )
    }

    /// Fractional position of `point` inside this box. Degenerate axes map to
    /// the middle.
    pub fn fraction_of(&self, point: Position) -> (f32, f32) {
        let fx = if self.width() > 0.0 {
            (point.x - self.left) / self.width()
        } else {
            0.5
        };
        let fy = if self.height() > 0.0 {
            (point.y - self.top) / self.height()
        } else {
            0.5
        };
        (fx, fy)
    }

    pub fn point_at_fraction(&self, fraction: (f32, f32)) -> Position {
        Position {
            x: self.left + self.width() * fraction.0,
            y: self.top + self.height() * fraction.1,
        }
    }

    /// Top-left position that keeps an object of the given size inside `self`.
    pub fn clamp_top_left(&self, position: Position, width: f32, height: f32) -> Position {
        let max_x = (self.right - width).max(self.left);
        let max_y = (self.bottom - height).max(self.top);
        Position {
            x: position.x.clamp(self.left, max_x),
            y: position.y.clamp(self.top, max_y),
        }
    }
}
