use core::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::board::{error::BoardError, Board, Level, Position};
use crate::evaluate::{game_ending, GameEnding};
use crate::move_generation::{
    faction_has_moves, is_legal, is_threatening_king, legal_destinations,
};
use crate::moves::{execute_move, Move};
use crate::pieces::Faction;
use crate::search::{search, SearchConfig, SearchContext, SearchError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    Stalemate,
    OutOfMoves,
    /// Every player piece is boxed in or gone.
    NoMovesLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost(LossReason),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "checkmate, puzzle solved"),
            GameStatus::Lost(LossReason::Stalemate) => write!(f, "stalemate"),
            GameStatus::Lost(LossReason::OutOfMoves) => write!(f, "out of moves"),
            GameStatus::Lost(LossReason::NoMovesLeft) => write!(f, "no moves left"),
        }
    }
}

/// What a player move did to the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMoveOutcome {
    Checkmate,
    Stalemate,
    Check,
    Continue,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("The puzzle is already over ({status})")]
    Finished { status: GameStatus },
    #[error("It is not the {faction}'s turn")]
    WrongTurn { faction: Faction },
    #[error("There is no player piece at {position}")]
    NotYourPiece { position: Position },
    #[error("Illegal move {mv}")]
    IllegalMove { mv: Move },
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub struct PuzzleGame {
    initial: Board,
    board: Board,
    history: Vec<Board>,
    status: GameStatus,
    config: SearchConfig,
}

impl PuzzleGame {
    pub fn new(level: &Level) -> Result<Self, GameError> {
        Self::from_board(Board::from_level(level))
    }

    pub fn from_board(board: Board) -> Result<Self, GameError> {
        board.validate()?;
        Ok(Self {
            initial: board.clone(),
            board,
            history: Vec::new(),
            status: GameStatus::InProgress,
            config: SearchConfig::default(),
        })
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn moves_used(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn moves_remaining(&self) -> u32 {
        self.board.move_budget().saturating_sub(self.moves_used())
    }

    /// Legal destinations for the player piece on `from`. Empty for enemy
    /// pieces and empty squares.
    pub fn legal_moves(&self, from: Position) -> Vec<Position> {
        match self.board.piece_at(from) {
            Some(piece) if piece.faction() == Faction::Player => {
                legal_destinations(&self.board, from)
            }
            _ => Vec::new(),
        }
    }

    pub fn player_move(&mut self, mv: Move) -> Result<PlayerMoveOutcome, GameError> {
        self.ensure_turn(Faction::Player)?;
        match self.board.piece_at(mv.from) {
            Some(piece) if piece.faction() == Faction::Player => {}
            _ => return Err(GameError::NotYourPiece { position: mv.from }),
        }
        if !is_legal(&self.board, mv) {
            return Err(GameError::IllegalMove { mv });
        }

        let snapshot = self.board.clone();
        execute_move(&mut self.board, mv.from, mv.to)?;
        self.history.push(snapshot);
        info!("player plays {} ({} left)", mv, self.moves_remaining());

        let outcome = match game_ending(&mut self.board) {
            Some(GameEnding::Checkmate) => {
                self.status = GameStatus::Won;
                PlayerMoveOutcome::Checkmate
            }
            Some(GameEnding::Stalemate) => {
                self.status = GameStatus::Lost(LossReason::Stalemate);
                PlayerMoveOutcome::Stalemate
            }
            None if is_threatening_king(&mut self.board) => PlayerMoveOutcome::Check,
            None => PlayerMoveOutcome::Continue,
        };
        if self.is_over() {
            info!("puzzle finished: {}", self.status);
        }
        Ok(outcome)
    }

    /// Lets the engine answer the last player move. The enemy looks as far
    /// ahead as the player has moves left.
    pub fn enemy_move(&mut self) -> Result<Option<Move>, GameError> {
        self.ensure_turn(Faction::Enemy)?;

        let lookahead = self.moves_remaining();
        let mut context = SearchContext::new(self.config);
        let result = search(&mut context, &mut self.board, lookahead)?;
        debug!(
            "enemy search: score {} at depth {}, {} positions",
            result.score,
            result.depth,
            context.searched_position_count()
        );

        let reply = match result.best_move {
            Some(reply) => reply,
            None => return Ok(None),
        };
        execute_move(&mut self.board, reply.from, reply.to)?;
        info!("enemy plays {}", reply);

        if self.moves_remaining() == 0 {
            self.status = GameStatus::Lost(LossReason::OutOfMoves);
        } else if !faction_has_moves(&self.board, Faction::Player) {
            self.status = GameStatus::Lost(LossReason::NoMovesLeft);
        }
        if self.is_over() {
            info!("puzzle finished: {}", self.status);
        }
        Ok(Some(reply))
    }

    /// The move the engine would play for the player.
    pub fn suggest_move(&mut self) -> Result<Option<Move>, GameError> {
        self.ensure_turn(Faction::Player)?;
        let lookahead = self.moves_remaining();
        let mut context = SearchContext::new(self.config);
        let result = search(&mut context, &mut self.board, lookahead)?;
        Ok(result.best_move)
    }

    /// Takes back the last player move together with any enemy reply.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot;
        self.status = GameStatus::InProgress;
        info!("undo ({} left)", self.moves_remaining());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Plays both sides with the engine until the puzzle ends and returns
    /// every move made, player and enemy interleaved.
    pub fn autoplay(&mut self) -> Result<Vec<Move>, GameError> {
        let mut played = Vec::new();
        while !self.is_over() {
            if self.board.enemy_turn() {
                match self.enemy_move()? {
                    Some(reply) => played.push(reply),
                    None => break,
                }
                continue;
            }

            match self.suggest_move()? {
                Some(mv) => {
                    self.player_move(mv)?;
                    played.push(mv);
                }
                None => {
                    self.status = GameStatus::Lost(LossReason::NoMovesLeft);
                    info!("puzzle finished: {}", self.status);
                }
            }
        }
        Ok(played)
    }

    fn ensure_turn(&self, faction: Faction) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::Finished {
                status: self.status,
            });
        }
        if self.board.side_to_move() != faction {
            return Err(GameError::WrongTurn { faction });
        }
        Ok(())
    }
}
