#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Score and phase of the current run. The score counts the ticks survived.
#[derive(Debug, Clone)]
pub struct Session {
    phase: GamePhase,
    score: u64,
    best_score: u64,
    dodged: u64,
}

impl Session {
    pub fn new() -> Self {
        Session {
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            dodged: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn dodged(&self) -> u64 {
        self.dodged
    }

    /// Count one survived tick. No effect once the run is over.
    pub fn record_tick(&mut self) {
        if self.is_playing() {
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
        }
    }

    pub fn record_dodged(&mut self, count: usize) {
        if self.is_playing() {
            self.dodged = self.dodged.saturating_add(u64::try_from(count).unwrap_or(u64::MAX));
        }
    }

    /// Returns true when this call ended the run.
    pub fn on_collision(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::GameOver;
                true
            }
            GamePhase::GameOver => false,
        }
    }

    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.dodged = 0;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
