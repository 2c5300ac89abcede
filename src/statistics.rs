use std::time::Instant;

/// Totals across every run of one program session.
pub struct Statistics {
    pub games_played: u32,
    pub obstacles_spawned: u64,
    pub obstacles_dodged: u64,
    pub best_score: u64,
    pub total_ticks: u64,
    pub restarts: u32,
    run_scores: Vec<u64>,
    session_start: Instant,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            games_played: 0,
            obstacles_spawned: 0,
            obstacles_dodged: 0,
            best_score: 0,
            total_ticks: 0,
            restarts: 0,
            run_scores: Vec::new(),
            session_start: Instant::now(),
        }
    }

    pub fn record_spawn(&mut self) {
        self.obstacles_spawned = self.obstacles_spawned.saturating_add(1);
    }

    pub fn record_dodged(&mut self, count: usize) {
        self.obstacles_dodged = self
            .obstacles_dodged
            .saturating_add(u64::try_from(count).unwrap_or(u64::MAX));
    }

    pub fn record_tick(&mut self) {
        self.total_ticks = self.total_ticks.saturating_add(1);
    }

    pub fn record_crash(&mut self, score: u64) {
        self.games_played = self.games_played.saturating_add(1);
        self.best_score = self.best_score.max(score);
        self.run_scores.push(score);
    }

    pub fn record_restart(&mut self) {
        self.restarts = self.restarts.saturating_add(1);
    }

    pub fn average_score(&self) -> f32 {
        if self.run_scores.is_empty() {
            return 0.0;
        }
        self.run_scores.iter().sum::<u64>() as f32 / self.run_scores.len() as f32
    }

    pub fn display(&self) {
        let elapsed_sec = self.session_start.elapsed().as_secs_f32();

        println!("\n╔══════════════════════════════════════════╗");
        println!("║              FINAL STATISTICS            ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║ Session Duration: {:>12.1}s          ║", elapsed_sec);
        println!("║ Runs Finished: {:>16}          ║", self.games_played);
        println!("║ Best Score: {:>19}          ║", self.best_score);
        println!("║ Average Score: {:>16.1}          ║", self.average_score());
        println!("║ Restarts: {:>21}          ║", self.restarts);
        println!("╠══════════════════════════════════════════╣");
        println!("║ Blocks Spawned: {:>15}          ║", self.obstacles_spawned);
        println!("║ Blocks Dodged: {:>16}          ║", self.obstacles_dodged);
        println!("║ Ticks Played: {:>17}          ║", self.total_ticks);
        println!("╚══════════════════════════════════════════╝");
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
