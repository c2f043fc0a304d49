use std::fs;
use std::path::{Path, PathBuf};

use super::format;
use crate::error::SaveError;
use crate::game::{Board, Disk, GameState, PlayerMode};

/// The single flat save slot: one file, one game.
///
/// The store reads and writes the slot and cross-checks a loaded board
/// against the dimensions it was created with; a saved game of the wrong
/// shape counts as no valid save at all.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
    width: usize,
    height: usize,
}

impl SaveStore {
    /// A store for `path`, expecting `width` x `height` boards.
    pub fn new(path: impl Into<PathBuf>, width: usize, height: usize) -> Self {
        SaveStore {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a state, replacing the slot. The text is written to a `.tmp`
    /// sibling first and renamed over the slot so a failed write never
    /// leaves a truncated save behind.
    pub fn save(&self, state: &GameState) -> Result<(), SaveError> {
        let text = format::encode(state);
        let tmp = self.path.with_extension("tmp");
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| SaveError::FileWrite {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }
        fs::write(&tmp, text).map_err(|e| SaveError::FileWrite {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| SaveError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Restore the saved state.
    pub fn load(&self) -> Result<GameState, SaveError> {
        let text = fs::read_to_string(&self.path).map_err(|e| SaveError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        let state = format::decode(&text)?;

        let board = state.board();
        if !board.is_rectangular()
            || board.width() != self.width
            || board.height() != self.height
        {
            let found_width = board
                .rows()
                .map(|row| row.len())
                .find(|&w| w != self.width)
                .unwrap_or_else(|| board.width());
            return Err(SaveError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                found_width,
                found_height: board.height(),
            });
        }
        Ok(state)
    }

    /// Restore the saved state, falling back to a fresh game of the
    /// expected size when the slot is missing, malformed, or the wrong
    /// shape.
    pub fn load_or_new(&self) -> GameState {
        self.load().unwrap_or_else(|_| {
            GameState::from_parts(
                Some(Disk::Dark),
                PlayerMode::Manual,
                PlayerMode::Manual,
                Board::with_centre_opening(self.width, self.height),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn store_in(dir: &Path, width: usize, height: usize) -> SaveStore {
        SaveStore::new(dir.join("game.save"), width, height)
    }

    #[test]
    fn test_saves_and_reloads_a_game() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);

        let state = GameState::initial()
            .apply_move(Position::new(3, 2))
            .unwrap()
            .state;
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_save_replaces_the_previous_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);

        let first = GameState::initial();
        store.save(&first).unwrap();

        let second = first.apply_move(Position::new(2, 3)).unwrap().state;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn test_load_fails_without_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);

        assert!(matches!(
            store.load().unwrap_err(),
            SaveError::FileRead { .. }
        ));
    }

    #[test]
    fn test_load_rejects_mismatched_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);
        fs::write(store.path(), "x00\n---\n---\n---").unwrap();

        match store.load().unwrap_err() {
            SaveError::DimensionMismatch {
                found_width,
                found_height,
                ..
            } => {
                assert_eq!(found_width, 3);
                assert_eq!(found_height, 3);
            }
            other => panic!("expected a dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 3, 3);
        fs::write(store.path(), "x00\n---\n--\n---").unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            SaveError::DimensionMismatch { found_width: 2, .. }
        ));
    }

    #[test]
    fn test_load_rejects_malformed_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);
        fs::write(store.path(), "not a save file").unwrap();

        assert!(matches!(store.load().unwrap_err(), SaveError::Format(_)));
    }

    #[test]
    fn test_load_or_new_falls_back_to_a_fresh_game() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 8, 8);
        fs::write(store.path(), "garbage").unwrap();

        assert_eq!(store.load_or_new(), GameState::initial());
    }

    #[test]
    fn test_load_or_new_uses_the_expected_size() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path(), 6, 6);

        let state = store.load_or_new();
        assert_eq!(state.board().width(), 6);
        assert_eq!(state.board().height(), 6);
        assert_eq!(state.turn(), Some(Disk::Dark));
        assert_eq!(state.count_disks(Disk::Dark), 2);
        assert_eq!(state.count_disks(Disk::Light), 2);
    }
}
