use crate::direction::Direction;
use crate::geometry::bounds::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    pub fn move_in_direction(&self, direction: Direction, pixels: f32) -> Position {
        let (dx, dy) = direction.unit();
        Position {
            x: self.x + dx * pixels,
            y: self.y + dy * pixels,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Window corner an [`Anchor`] measures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn multipliers(&self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (0.0, 0.0),
            Corner::TopRight => (1.0, 0.0),
            Corner::BottomLeft => (0.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }
}

/// A point given as a pixel offset from one corner of the play area, measured
/// to the matching corner of the object. Placing a HUD label at
/// `Anchor::new(4.0, 4.0, Corner::TopRight)` keeps it 4px from the top-right
/// whatever the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub corner: Corner,
}

impl Anchor {
    pub fn new(x: f32, y: f32, corner: Corner) -> Self {
        Anchor { x, y, corner }
    }

    /// Anchor from fractions of the area size, as reported by touch events.
    pub fn from_fraction(fx: f32, fy: f32, corner: Corner, area: &Bounds) -> Self {
        Anchor::new(
            fx.clamp(0.0, 1.0) * area.width(),
            fy.clamp(0.0, 1.0) * area.height(),
            corner,
        )
    }

    /// Top-left of an object of the given size placed at this anchor.
    pub fn resolve(&self, area: &Bounds, width: f32, height: f32) -> Position {
        let (mx, my) = self.corner.multipliers();
        let base_x = area.left + mx * area.width();
        let base_y = area.top + my * area.height();

        let x_offset = (if mx > 0.0 { -self.x } else { self.x }) - width * mx;
        let y_offset = (if my > 0.0 { -self.y } else { self.y }) - height * my;

        Position::new(base_x + x_offset, base_y + y_offset)
    }
}
