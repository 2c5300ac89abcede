use rand::Rng;

use crate::geometry::bounds::Bounds;
use crate::geometry::position::Position;

/// Player start: horizontally centered, resting `bottom_padding` above the
/// bottom edge.
pub fn player_spawn_position(area: &Bounds, width: f32, height: f32, bottom_padding: f32) -> Position {
    let center_x = area.left + area.width() / 2.0;
    let start = Position::new(center_x - width / 2.0, area.bottom - (height + bottom_padding));
    area.clamp_top_left(start, width, height)
}

/// Obstacle start: top edge on the top of the area, at a random x that keeps
/// the whole block inside the area horizontally.
pub fn obstacle_spawn_position<R: Rng + ?Sized>(rng: &mut R, area: &Bounds, width: f32) -> Position {
    let max_x = area.right - width;
    let x = if max_x > area.left {
        rng.gen_range(area.left..=max_x)
    } else {
        area.left
    };
    Position::new(x, area.top)
}
