use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use buscaminas_core::BoardSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::Player;

const SAVE_FILE: &str = "game.json";
const STALE_AFTER_DAYS: i64 = 7;

/// One saved game: the board snapshot plus the player's running record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub saved_at: DateTime<Utc>,
    pub board: BoardSnapshot,
    pub player: Player,
}

/// Owns the save directory and the JSON encoding of [`SavedGame`]. The core
/// only hands over a [`BoardSnapshot`]; the on-disk format lives here.
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn save(&self, board: BoardSnapshot, player: &Player) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating save directory {}", self.dir.display()))?;

        let saved = SavedGame {
            saved_at: Utc::now(),
            board,
            player: player.clone(),
        };
        let json = serde_json::to_string_pretty(&saved).context("encoding save file")?;
        fs::write(self.path(), json)
            .with_context(|| format!("writing {}", self.path().display()))?;
        log::debug!("Game saved to {}", self.path().display());
        Ok(())
    }

    pub fn load(&self) -> anyhow::Result<Option<SavedGame>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let json =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let saved: SavedGame =
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;

        if (Utc::now() - saved.saved_at).num_days() >= STALE_AFTER_DAYS {
            log::warn!("Save file is more than {STALE_AFTER_DAYS} days old");
        }
        Ok(Some(saved))
    }

    pub fn delete(&self) -> anyhow::Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buscaminas_core::Board;

    fn temp_manager(tag: &str) -> SaveManager {
        let dir = std::env::temp_dir().join(format!(
            "buscaminas-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        SaveManager::new(dir)
    }

    #[test]
    fn save_load_round_trip() {
        let manager = temp_manager("round-trip");
        let mut board = Board::from_mine_coords(4, &[(0, 0)]).unwrap();
        board.reveal((1, 1)).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);
        let mut player = Player::new("Ana");
        player.record_win();

        manager.save(snapshot.clone(), &player).unwrap();
        let loaded = manager.load().unwrap().unwrap();

        assert_eq!(loaded.board, snapshot);
        assert_eq!(loaded.player, player);
        assert_eq!(Board::from_snapshot(&loaded.board).unwrap(), board);

        manager.delete().unwrap();
        assert!(!manager.exists());
    }

    #[test]
    fn load_without_a_save_is_none() {
        let manager = temp_manager("missing");

        assert!(!manager.exists());
        assert!(manager.load().unwrap().is_none());
    }

    #[test]
    fn delete_without_a_save_is_fine() {
        let manager = temp_manager("delete");

        manager.delete().unwrap();
    }
}
