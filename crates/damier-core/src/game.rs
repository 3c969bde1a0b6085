use std::fmt;

use crate::board::Board;
use crate::constants::{DEFAULT_TIME_LIMIT, NO_CAPTURE_DRAW_LIMIT};
use crate::fen::FenError;
use crate::movegen::split_into_single_steps;
use crate::position::Position;
use crate::types::{Move, MoveList, Side};

/// Resolution of a position where the side to move still has pieces but no
/// legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockedPolicy {
    /// The game is drawn.
    #[default]
    Draw,
    /// The blocked side loses.
    OpponentWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    DrawNoCaptures,
    DrawRepetition,
    DrawBlocked,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "game in progress"),
            Self::Won(Side::Black) => write!(f, "black wins"),
            Self::Won(Side::Gray) => write!(f, "gray wins"),
            Self::DrawNoCaptures => write!(f, "draw by fifty captureless turns"),
            Self::DrawRepetition => write!(f, "draw by threefold repetition"),
            Self::DrawBlocked => write!(f, "draw by blocked position"),
        }
    }
}

/// Blitz clock values. The engine stores them and the save format carries
/// them; ticking them down is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    /// Seconds elapsed since the game started.
    pub total_time: f64,
    /// Seconds left on the black clock.
    pub black_time: f64,
    /// Seconds left on the gray clock.
    pub gray_time: f64,
}

impl Clock {
    pub fn remaining(&self, side: Side) -> f64 {
        match side {
            Side::Black => self.black_time,
            Side::Gray => self.gray_time,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            black_time: DEFAULT_TIME_LIMIT,
            gray_time: DEFAULT_TIME_LIMIT,
        }
    }
}

impl Position {
    /// Winner by elimination: the side whose opponent has no pieces left.
    pub fn check_winner(&self) -> Option<Side> {
        if self.board.count(Side::Black) == 0 {
            return Some(Side::Gray);
        }
        if self.board.count(Side::Gray) == 0 {
            return Some(Side::Black);
        }
        None
    }

    pub fn is_no_capture_draw(&self) -> bool {
        self.no_capture_turns >= NO_CAPTURE_DRAW_LIMIT
    }

    /// True when the side to move still has pieces but no legal move.
    pub fn is_blocked(&self) -> bool {
        self.board.count(self.turn) > 0 && self.moves().is_empty()
    }
}

/// A playable session: the position plus the clock and the blocked-position
/// policy. Drive it in a loop: `legal_moves`, `apply`, `status`, repeat
/// until `status` reports the game over.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    position: Position,
    clock: Clock,
    blocked_policy: BlockedPolicy,
}

impl Game {
    pub fn new() -> Self {
        Self::with_blocked_policy(BlockedPolicy::default())
    }

    pub fn with_blocked_policy(blocked_policy: BlockedPolicy) -> Self {
        Self {
            position: Position::new(),
            clock: Clock::default(),
            blocked_policy,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self {
            position: Position::from_fen(fen)?,
            clock: Clock::default(),
            blocked_policy: BlockedPolicy::default(),
        })
    }

    pub(crate) fn from_parts(position: Position, clock: Clock) -> Self {
        Self {
            position,
            clock,
            blocked_policy: BlockedPolicy::default(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn turn(&self) -> Side {
        self.position.turn
    }

    pub fn fen(&self) -> String {
        self.position.fen()
    }

    /// Starts a fresh game: starting layout, zeroed counters, cleared
    /// repetition history, full clocks. The blocked policy is kept.
    pub fn reset(&mut self) {
        self.position = Position::new();
        self.clock = Clock::default();
    }

    /// Legal moves for the side to move, or an empty list once the game is
    /// over.
    pub fn legal_moves(&self) -> MoveList {
        if self.status().is_over() {
            return MoveList::new();
        }
        self.position.moves()
    }

    /// Truncates multi-jump captures to their first hop; see
    /// [`split_into_single_steps`](crate::movegen::split_into_single_steps).
    pub fn split_into_single_steps(&self, moves: &[Move]) -> MoveList {
        split_into_single_steps(&self.position.board, moves)
    }

    /// Applies a legal move, passes the turn, and returns the updated
    /// per-side capture tallies.
    pub fn apply(&mut self, mv: &Move) -> [u32; 2] {
        let caps = self.position.apply_move(mv);
        self.position.end_turn();
        caps
    }

    /// Applies one hop of a capture chain without passing the turn. After
    /// the last hop the caller finishes with [`Self::end_turn`].
    pub fn apply_step(&mut self, mv: &Move) -> [u32; 2] {
        self.position.apply_move(mv)
    }

    pub fn end_turn(&mut self) {
        self.position.end_turn();
    }

    /// Game-end checks in priority order: elimination win, captureless-turn
    /// draw, repetition draw, then blocked position per policy.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.position.check_winner() {
            return GameStatus::Won(winner);
        }
        if self.position.is_no_capture_draw() {
            return GameStatus::DrawNoCaptures;
        }
        if self.position.is_repeated() {
            return GameStatus::DrawRepetition;
        }
        if self.position.is_blocked() {
            return match self.blocked_policy {
                BlockedPolicy::Draw => GameStatus::DrawBlocked,
                BlockedPolicy::OpponentWins => GameStatus::Won(self.turn().opponent()),
            };
        }
        GameStatus::InProgress
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn check_winner(&self) -> Option<Side> {
        self.position.check_winner()
    }

    pub fn is_repeated(&self) -> bool {
        self.position.is_repeated()
    }

    pub fn record_position(&mut self) {
        self.position.record_position();
    }

    pub fn moves_count(&self) -> u32 {
        self.position.moves_count
    }

    pub fn total_captures(&self) -> u32 {
        self.position.total_captures
    }

    pub fn captures_for(&self, side: Side) -> u32 {
        self.position.captures[side.index()]
    }

    pub fn no_capture_turns(&self) -> u32 {
        self.position.no_capture_turns
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn blocked_policy(&self) -> BlockedPolicy {
        self.blocked_policy
    }

    pub fn set_blocked_policy(&mut self, policy: BlockedPolicy) {
        self.blocked_policy = policy;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
