use crate::core::collision_detector::CollisionDetector;
use crate::core::entity::{Entity, EntityId, EntityKind};
use crate::direction::Direction;
use crate::geometry::spawn::player_spawn_position;
use crate::geometry::{Bounds, Position};

/// Owns the player and every live obstacle. Obstacles are kept in spawn
/// order and addressed by their [`EntityId`].
pub struct World {
    area: Bounds,
    player: Entity,
    player_padding: f32,
    obstacles: Vec<Entity>,
    next_entity_id: u32,
}

impl World {
    pub fn new(area: Bounds, player_width: f32, player_height: f32, player_padding: f32) -> Self {
        let start = player_spawn_position(&area, player_width, player_height, player_padding);
        World {
            area,
            player: Entity::new(EntityId(0), EntityKind::Player, start, player_width, player_height),
            player_padding,
            obstacles: Vec::new(),
            next_entity_id: 1,
        }
    }

    pub fn area(&self) -> &Bounds {
        &self.area
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: EntityId) -> Option<&Entity> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn set_player_velocity(&mut self, x: f32, y: f32) {
        self.player.velocity.x = x;
        self.player.velocity.y = y;
    }

    /// Move the player; a move past the play area stops at its edge.
    pub fn move_player(&mut self, direction: Direction, pixels: f32) {
        let target = self.player.position.move_in_direction(direction, pixels);
        self.place_player(target);
    }

    /// Apply the player's own velocity for one step, clamped like `move_player`.
    pub fn advance_player(&mut self, delta_time: f32) {
        let v = self.player.velocity;
        let target = self.player.position.offset(v.x * delta_time, v.y * delta_time);
        self.place_player(target);
    }

    /// Put the player's center on `x`, clamped to the play area.
    pub fn center_player_at_x(&mut self, x: f32) {
        let target = Position::new(x - self.player.width / 2.0, self.player.position.y);
        self.place_player(target);
    }

    fn place_player(&mut self, target: Position) {
        self.player.position = self
            .area
            .clamp_top_left(target, self.player.width, self.player.height);
    }

    pub fn advance_obstacles(&mut self, delta_time: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(delta_time);
        }
    }

    pub fn spawn_obstacle(&mut self, position: Position, width: f32, height: f32, speed: f32) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        let obstacle = Entity::new(id, EntityKind::Obstacle, position, width, height)
            .with_velocity(0.0, speed);
        log::debug!("Spawned obstacle {} at ({:.0}, {:.0}) speed {:.1}", id.0, position.x, position.y, speed);
        self.obstacles.push(obstacle);
        id
    }

    /// Drop obstacles that have left the play area, returning how many.
    pub fn remove_exited(&mut self) -> usize {
        let area = self.area;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.has_exited(&area));
        before - self.obstacles.len()
    }

    pub fn detect_collision(&self) -> Option<EntityId> {
        CollisionDetector::first_collision(&self.player, &self.obstacles)
    }

    pub fn resize(&mut self, new_area: Bounds) {
        let old_area = self.area;
        self.player.rescale(&old_area, &new_area);
        for obstacle in &mut self.obstacles {
            obstacle.rescale(&old_area, &new_area);
        }
        self.area = new_area;
        let position = self.player.position;
        self.place_player(position);
    }

    /// Clear obstacles and put the player back at its start position.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.player.velocity = Default::default();
        self.player.position = player_spawn_position(
            &self.area,
            self.player.width,
            self.player.height,
            self.player_padding,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world() -> World {
        World::new(Bounds::from_size(300.0, 300.0), 40.0, 64.0, 5.0)
    }

    #[test]
    fn left_edge_move_left_is_a_no_op() {
        let mut w = world();
        w.move_player(Direction::Left, 1000.0);
        let at_edge = w.player().position;
        assert_eq!(at_edge.x, 0.0);
        w.move_player(Direction::Left, 5.0);
        assert_eq!(w.player().position, at_edge);
    }

    #[test]
    fn center_at_x_is_clamped() {
        let mut w = world();
        w.center_player_at_x(100.0);
        assert_eq!(w.player().bounds().center().x, 100.0);
        w.center_player_at_x(299.0);
        assert_eq!(w.player().bounds().right, 300.0);
    }

    #[test]
    fn obstacle_from_top_is_gone_after_height_over_speed_ticks() {
        let mut w = world();
        let speed = 5.0;
        let id = w.spawn_obstacle(Position::new(0.0, 0.0), 50.0, 50.0, speed);
        let ticks = (300.0 / speed) as usize;
        for tick in 1..=ticks {
            w.advance_obstacles(1.0);
            w.remove_exited();
            if tick < ticks {
                assert!(w.obstacle(id).is_some(), "left early at tick {tick}");
            }
        }
        assert!(w.obstacle(id).is_none());
    }

    #[test]
    fn resize_rescales_and_keeps_player_inside() {
        let mut w = world();
        w.move_player(Direction::Right, 1000.0);
        w.resize(Bounds::from_size(150.0, 120.0));
        assert!(w.player().bounds().is_inside(w.area(), 0.0));
        assert_eq!(w.player().bounds().right, 150.0);
    }

    #[test]
    fn reset_clears_obstacles() {
        let mut w = world();
        w.spawn_obstacle(Position::new(10.0, 0.0), 50.0, 50.0, 5.0);
        w.move_player(Direction::Left, 50.0);
        w.reset();
        assert!(w.obstacles().is_empty());
        assert_eq!(w.player().position, Position::new(130.0, 231.0));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn player_never_leaves_play_area(
            moves in prop::collection::vec((arb_direction(), 0.0f32..400.0), 0..60),
            resize in prop::option::of((60u32..900, 80u32..900)),
        ) {
            let mut w = world();
            for (direction, pixels) in moves {
                w.move_player(direction, pixels);
                prop_assert!(w.player().bounds().is_inside(w.area(), 0.0));
            }
            if let Some((width, height)) = resize {
                w.resize(Bounds::from_size(width as f32, height as f32));
                prop_assert!(w.player().bounds().is_inside(w.area(), 1e-3));
            }
        }
    }
}
