use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{PlayerAgent, RandomAgent};
use crate::config::AppConfig;
use crate::game::{Board, Disk, GameState, MoveError, PlayerMode, Position, TurnAdvance};
use crate::save::SaveStore;

/// The driver: owns the single game, feeds it moves, and saves it after
/// every committed change.
pub struct App {
    state: GameState,
    store: SaveStore,
    agent: RandomAgent,
    cursor: Position,
    board_width: usize,
    board_height: usize,
    auto_move_delay: Duration,
    /// Deadline for the pending automatic move, if one is scheduled.
    /// Cleared to cancel when the side turns manual, the game resets, or
    /// the game ends.
    auto_move_at: Option<Instant>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Restore the saved game, or start a fresh one with the configured
    /// player modes when no valid save exists.
    pub fn new(config: &AppConfig) -> Self {
        let (width, height) = (config.board.width, config.board.height);
        let store = SaveStore::new(&config.save_path, width, height);
        let state = store.load().unwrap_or_else(|_| {
            GameState::from_parts(
                Some(Disk::Dark),
                config.players.dark,
                config.players.light,
                Board::with_centre_opening(width, height),
            )
        });

        App {
            state,
            store,
            agent: RandomAgent::new(),
            cursor: Position::new(width / 2, height / 2),
            board_width: width,
            board_height: height,
            auto_move_delay: Duration::from_millis(config.auto_move_delay_ms),
            auto_move_at: None,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick_auto_move();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.x + 1 < self.board_width {
                    self.cursor.x += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.y > 0 {
                    self.cursor.y -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.y + 1 < self.board_height {
                    self.cursor.y += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at_cursor();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            KeyCode::Char('1') => {
                self.toggle_mode(Disk::Dark);
            }
            KeyCode::Char('2') => {
                self.toggle_mode(Disk::Light);
            }
            _ => {}
        }
    }

    /// Place the manual player's disk at the cursor.
    fn place_at_cursor(&mut self) {
        if let Some(side) = self.state.turn() {
            if self.state.mode(side) == PlayerMode::Automatic {
                self.message = Some(format!("{} moves automatically.", side.name()));
                return;
            }
        }
        self.play(self.cursor);
    }

    /// Apply a move for the side to move, resolve the next turn, and
    /// persist the result. Rejected moves leave the game untouched.
    fn play(&mut self, pos: Position) {
        let Some(side) = self.state.turn() else {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        };
        match self.state.apply_move(pos) {
            Ok(applied) => {
                let flips = applied.flipped.len();
                self.message = Some(format!(
                    "{} placed at ({}, {}) and flipped {} {}.",
                    side.name(),
                    pos.x,
                    pos.y,
                    flips,
                    if flips == 1 { "disk" } else { "disks" }
                ));
                self.state = applied.state;
                self.resolve_turn();
                self.persist();
            }
            Err(MoveError::IllegalMove) => {
                self.message =
                    Some("Illegal move: a placement must flip at least one disk.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn resolve_turn(&mut self) {
        self.auto_move_at = None;
        match self.state.advance_turn() {
            TurnAdvance::Next(_) => {}
            TurnAdvance::Passed(side) => {
                self.message = Some(format!(
                    "{} has no legal move and passes; {} moves again.",
                    side.name(),
                    side.flipped().name()
                ));
            }
            TurnAdvance::Finished => {
                let dark = self.state.count_disks(Disk::Dark);
                let light = self.state.count_disks(Disk::Light);
                self.message = Some(match self.state.side_with_more_disks() {
                    Some(side) => format!(
                        "{} wins {}-{}! Press 'r' for a new game.",
                        side.name(),
                        dark.max(light),
                        dark.min(light)
                    ),
                    None => format!("It's a {dark}-{light} draw! Press 'r' for a new game."),
                });
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.state) {
            self.message = Some(format!("Save failed: {err}"));
        }
    }

    /// Start a fresh game, keeping the current player modes.
    fn reset(&mut self) {
        self.state = GameState::from_parts(
            Some(Disk::Dark),
            self.state.mode(Disk::Dark),
            self.state.mode(Disk::Light),
            Board::with_centre_opening(self.board_width, self.board_height),
        );
        self.cursor = Position::new(self.board_width / 2, self.board_height / 2);
        self.auto_move_at = None;
        self.message = Some("New game started!".to_string());
        self.persist();
    }

    fn toggle_mode(&mut self, side: Disk) {
        let mode = self.state.mode(side).toggled();
        self.state.set_mode(side, mode);
        if mode == PlayerMode::Manual && self.state.turn() == Some(side) {
            // Cancel the deferred move this side had scheduled
            self.auto_move_at = None;
        }
        self.message = Some(format!("{} is now {}.", side.name(), mode.name()));
        self.persist();
    }

    /// Schedule and fire the automatic side's deferred move.
    fn tick_auto_move(&mut self) {
        let Some(side) = self.state.turn() else {
            self.auto_move_at = None;
            return;
        };
        if self.state.mode(side) != PlayerMode::Automatic {
            return;
        }

        match self.auto_move_at {
            None => {
                self.auto_move_at = Some(Instant::now() + self.auto_move_delay);
            }
            Some(deadline) if Instant::now() >= deadline => {
                self.auto_move_at = None;
                if let Some(pos) = self.agent.choose_move(&self.state, side) {
                    self.play(pos);
                }
            }
            Some(_) => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.state, self.cursor, &self.message);
    }
}
