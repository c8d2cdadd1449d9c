/// Running totals for one exercise instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub current_streak: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_attempt(&mut self, correct: bool) {
        self.total_attempts += 1;
        if correct {
            self.correct_attempts += 1;
            self.current_streak += 1;
        } else {
            self.current_streak = 0;
        }
    }

    /// Fraction of correct attempts, `0.0` before the first attempt.
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        self.correct_attempts as f64 / self.total_attempts as f64
    }
}
