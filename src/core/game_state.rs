//! Game state module - piece lifecycle over the board
//!
//! Ties together board, piece, and color supply. Movement and rotation are
//! boolean try-operations: build a candidate, commit only if it fits. The
//! gravity step is the single lock site; the driver owns the clock.

use crate::core::piece::try_rotate;
use crate::core::{Board, ColorQueue, PiecePair};
use crate::types::{GameAction, PuyoColor};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<PiecePair>,
    color_queue: ColorQueue,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            color_queue: ColorQueue::new(seed),
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first pair
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<PiecePair> {
        self.active
    }

    /// Upcoming color pair, for the NEXT preview
    pub fn next_pair(&self) -> (PuyoColor, PuyoColor) {
        self.color_queue.peek_pair()
    }

    /// Spawn a new pair from the color queue.
    ///
    /// Fails and sets game over when the spawn cells are occupied.
    pub fn spawn_piece(&mut self) -> bool {
        let (satellite, pivot) = self.color_queue.draw_pair();
        let piece = PiecePair::new(satellite, pivot);

        if !piece.fits(&self.board) {
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active pair by (dr, dc).
    ///
    /// On failure the pair is left exactly as it was.
    pub fn try_move(&mut self, dr: i8, dc: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.translated(dr, dc);
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        false
    }

    /// Try to rotate the active pair one step, with wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if let Some(rotated) = try_rotate(&active, &self.board) {
            self.active = Some(rotated);
            return true;
        }

        false
    }

    /// Drop the active pair to the floor without locking it.
    ///
    /// Locking happens on the next gravity step, as for any grounded pair.
    /// Returns the number of rows descended.
    pub fn hard_drop(&mut self) -> u8 {
        let mut dropped = 0;
        while self.try_move(1, 0) {
            dropped += 1;
        }
        dropped
    }

    /// Lock the active pair onto the board.
    ///
    /// Fails when a cell is still above the visible grid; the board is
    /// left unmodified in that case.
    pub fn lock_piece(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.board.lock_pair(&active.cells())
    }

    /// Advance one gravity step.
    ///
    /// Descend one row if possible; otherwise lock, resolve cascades, and
    /// spawn the next pair. A failed lock or spawn ends the game.
    /// Returns false once the game is over (or before start).
    pub fn step(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        if self.try_move(1, 0) {
            return true;
        }

        if !self.lock_piece() {
            self.game_over = true;
            self.active = None;
            return false;
        }
        self.active = None;

        self.board.settle();
        self.spawn_piece()
    }

    /// Apply a discrete player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if !self.started || self.game_over => false,
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop() > 0,
        }
    }

    /// Reset to a fresh game, reseeding from the current RNG state so each
    /// run gets a new color sequence.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.color_queue = ColorQueue::new(self.color_queue.seed());
        self.active = None;
        self.game_over = false;
        self.started = true;
        self.spawn_piece();
    }
}
