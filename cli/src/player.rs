use serde::{Deserialize, Serialize};

/// Win/loss record for a named player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            played: 0,
            won: 0,
            lost: 0,
        }
    }

    pub fn record_win(&mut self) {
        self.played += 1;
        self.won += 1;
    }

    pub fn record_loss(&mut self) {
        self.played += 1;
        self.lost += 1;
    }

    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player")
    }
}
