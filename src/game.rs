use crate::config::Settings;
use crate::core::{EntityId, GamePhase, Session, Spawner, World};
use crate::direction::Direction;
use crate::geometry::Bounds;
use crate::statistics::Statistics;

/// Everything the simulation needs from the player for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held steering key, takes priority over touch.
    pub steer: Option<Direction>,
    /// Touch target as a fraction of the play area width.
    pub target_x_fraction: Option<f32>,
    pub restart: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Crashed(EntityId),
    Restarted,
    Over,
}

pub struct Game {
    world: World,
    session: Session,
    spawner: Spawner,
    statistics: Statistics,
    player_speed: f32,
}

impl Game {
    pub fn new(settings: &Settings, player_width: f32, player_height: f32) -> Self {
        let area = Bounds::from_size(settings.window.width as f32, settings.window.height as f32);
        Game {
            world: World::new(area, player_width, player_height, settings.player.bottom_padding),
            session: Session::new(),
            spawner: Spawner::new(settings.obstacles.clone(), settings.game.seed),
            statistics: Statistics::new(),
            player_speed: settings.player.speed,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// Advance the game by one tick.
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        if input.restart && self.session.phase() == GamePhase::GameOver {
            self.restart();
            return TickOutcome::Restarted;
        }
        if !self.session.is_playing() {
            return TickOutcome::Over;
        }

        self.steer_player(input);
        self.world.advance_obstacles(1.0);

        if let Some(obstacle) = self.world.detect_collision() {
            self.session.on_collision();
            self.statistics.record_crash(self.session.score());
            log::info!(
                "Crashed into block {} with score {} ({} dodged)",
                obstacle.0,
                self.session.score(),
                self.session.dodged()
            );
            return TickOutcome::Crashed(obstacle);
        }

        let (removed, spawned) = self.spawner.update(&mut self.world, self.session.score());
        if removed > 0 {
            self.session.record_dodged(removed);
            self.statistics.record_dodged(removed);
        }
        if spawned.is_some() {
            self.statistics.record_spawn();
        }

        self.session.record_tick();
        self.statistics.record_tick();
        TickOutcome::Running
    }

    fn steer_player(&mut self, input: &TickInput) {
        if let Some(direction) = input.steer {
            self.world.set_player_velocity(direction.sign() * self.player_speed, 0.0);
            self.world.advance_player(1.0);
            return;
        }
        self.world.set_player_velocity(0.0, 0.0);

        if let Some(fraction) = input.target_x_fraction {
            let area = *self.world.area();
            let target_x = area.left + fraction * area.width();
            let center_x = self.world.player().bounds().center().x;
            let difference = target_x - center_x;
            if difference.abs() <= self.player_speed {
                self.world.center_player_at_x(target_x);
            } else {
                let direction = if difference > 0.0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
                self.world.move_player(direction, self.player_speed);
            }
        }
    }

    /// Start a fresh run. Only meaningful after a crash.
    pub fn restart(&mut self) {
        log::info!("Starting new game (best so far {})", self.session.best_score());
        self.world.reset();
        self.spawner.reset();
        self.session.restart();
        self.statistics.record_restart();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Play area resized to {}x{}", width, height);
        self.world.resize(Bounds::from_size(width as f32, height as f32));
    }
}
