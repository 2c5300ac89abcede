use crate::geometry::{Bounds, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Obstacle,
}

/// Pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub velocity: Velocity,
    pub solid: bool,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, position: Position, width: f32, height: f32) -> Self {
        Entity {
            id,
            kind,
            position,
            width,
            height,
            velocity: Velocity::default(),
            solid: true,
        }
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Velocity { x, y };
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, self.width, self.height)
    }

    pub fn advance(&mut self, delta_time: f32) {
        self.position = self
            .position
            .offset(self.velocity.x * delta_time, self.velocity.y * delta_time);
    }

    /// True once the entity has fully left `area` in the direction it travels.
    pub fn has_exited(&self, area: &Bounds) -> bool {
        let b = self.bounds();
        (self.velocity.y > 0.0 && b.top >= area.bottom)
            || (self.velocity.y < 0.0 && b.bottom <= area.top)
            || (self.velocity.x > 0.0 && b.left >= area.right)
            || (self.velocity.x < 0.0 && b.right <= area.left)
    }

    /// Keep the entity's relative place when the play area changes size.
    pub fn rescale(&mut self, old_area: &Bounds, new_area: &Bounds) {
        let old_centers = old_area.center_bounds(self.width, self.height);
        let fraction = old_centers.fraction_of(self.bounds().center());
        let new_center = new_area
            .center_bounds(self.width, self.height)
            .point_at_fraction(fraction);
        self.position = Position::new(new_center.x - self.width / 2.0, new_center.y - self.height / 2.0);
    }
}
