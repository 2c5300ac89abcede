use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ObstacleSettings;
use crate::core::entity::EntityId;
use crate::core::world::World;
use crate::geometry::spawn::obstacle_spawn_position;

/// Feeds falling blocks into the world. The cadence tightens and the blocks
/// speed up every `ramp_ticks` of score.
pub struct Spawner {
    settings: ObstacleSettings,
    rng: StdRng,
    cooldown: u32,
}

impl Spawner {
    pub fn new(settings: ObstacleSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cooldown = settings.first_delay;
        Spawner {
            settings,
            rng,
            cooldown,
        }
    }

    fn difficulty_level(&self, score: u64) -> u64 {
        score / self.settings.ramp_ticks
    }

    pub fn spawn_interval(&self, score: u64) -> u32 {
        let reduction = self
            .difficulty_level(score)
            .saturating_mul(self.settings.interval_step as u64);
        let interval = (self.settings.base_interval as u64).saturating_sub(reduction);
        interval.max(self.settings.min_interval as u64) as u32
    }

    pub fn obstacle_speed(&self, score: u64) -> f32 {
        let boost = self.difficulty_level(score) as f32 * self.settings.speed_step;
        (self.settings.base_speed + boost).min(self.settings.max_speed)
    }

    pub fn ticks_until_spawn(&self) -> u32 {
        self.cooldown
    }

    /// One spawner step: drop exited obstacles, then spawn if the cooldown
    /// has run out. Returns the number removed and the new obstacle, if any.
    pub fn update(&mut self, world: &mut World, score: u64) -> (usize, Option<EntityId>) {
        let removed = world.remove_exited();

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return (removed, None);
        }

        let area = *world.area();
        let position = obstacle_spawn_position(&mut self.rng, &area, self.settings.width);
        let id = world.spawn_obstacle(
            position,
            self.settings.width,
            self.settings.height,
            self.obstacle_speed(score),
        );
        self.cooldown = self.spawn_interval(score).saturating_sub(1);
        (removed, Some(id))
    }

    pub fn reset(&mut self) {
        self.cooldown = self.settings.first_delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use proptest::prelude::*;

    fn settings() -> ObstacleSettings {
        ObstacleSettings {
            first_delay: 3,
            base_interval: 10,
            min_interval: 4,
            interval_step: 2,
            ramp_ticks: 100,
            ..ObstacleSettings::default()
        }
    }

    fn world() -> World {
        World::new(Bounds::from_size(300.0, 300.0), 40.0, 64.0, 5.0)
    }

    #[test]
    fn first_spawn_waits_for_grace_delay() {
        let mut spawner = Spawner::new(settings(), Some(1));
        let mut w = world();
        for _ in 0..3 {
            assert_eq!(spawner.update(&mut w, 0).1, None);
        }
        assert!(spawner.update(&mut w, 0).1.is_some());
        assert_eq!(w.obstacles().len(), 1);
    }

    #[test]
    fn spawns_every_interval_ticks() {
        let mut spawner = Spawner::new(ObstacleSettings { first_delay: 0, ..settings() }, Some(1));
        let mut w = world();
        let spawned: Vec<bool> = (0..21).map(|_| spawner.update(&mut w, 0).1.is_some()).collect();
        let ticks: Vec<usize> = spawned.iter().enumerate().filter(|(_, s)| **s).map(|(i, _)| i).collect();
        assert_eq!(ticks, vec![0, 10, 20]);
    }

    #[test]
    fn difficulty_ramps_with_score() {
        let spawner = Spawner::new(settings(), Some(1));
        assert_eq!(spawner.spawn_interval(0), 10);
        assert_eq!(spawner.spawn_interval(99), 10);
        assert_eq!(spawner.spawn_interval(100), 8);
        assert_eq!(spawner.spawn_interval(10_000), 4);
        assert_eq!(spawner.obstacle_speed(0), 5.0);
        assert_eq!(spawner.obstacle_speed(200), 6.0);
        assert_eq!(spawner.obstacle_speed(u64::MAX), 12.0);
    }

    #[test]
    fn same_seed_same_lanes() {
        let run = |seed| {
            let mut spawner = Spawner::new(ObstacleSettings { first_delay: 0, ..settings() }, Some(seed));
            let mut w = world();
            for _ in 0..50 {
                spawner.update(&mut w, 0);
            }
            w.obstacles().iter().map(|o| o.position.x).collect::<Vec<_>>()
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn reset_restores_grace_delay() {
        let mut spawner = Spawner::new(settings(), Some(1));
        let mut w = world();
        for _ in 0..5 {
            spawner.update(&mut w, 0);
        }
        spawner.reset();
        assert_eq!(spawner.ticks_until_spawn(), 3);
    }

    proptest! {
        #[test]
        fn interval_never_below_minimum(score in any::<u64>()) {
            let spawner = Spawner::new(settings(), Some(0));
            prop_assert!(spawner.spawn_interval(score) >= 4);
            prop_assert!(spawner.obstacle_speed(score) <= 12.0);
        }
    }
}
