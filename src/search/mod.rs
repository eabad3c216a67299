//! Iterative-deepening negamax search.
//!
//! Each call to [`get_best_move`] searches depths 1 through
//! `lookahead + extra_depth`, keeping the deepest completed result and stopping
//! as soon as a forced win is found. The transposition table lives for a single
//! call; nothing is shared between searches.
//!
//! The board is searched in place. Every probe is undone before the search
//! returns, so the caller gets its board back exactly as it was.

mod move_orderer;
mod negamax;
pub mod transposition_table;

use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::board::{error::BoardError, Board};
use crate::evaluate::{evaluate, Score, BEST_SCORE, INFINITY};
use crate::moves::Move;

pub use move_orderer::order_moves;
use negamax::negamax;
use transposition_table::TranspositionTable;

/// Depth added on top of the lookahead budget.
pub const DEFAULT_EXTRA_DEPTH: u8 = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("cannot search an invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub extra_depth: u8,
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extra_depth: DEFAULT_EXTRA_DEPTH,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn new(extra_depth: u8, max_depth: Option<u8>) -> Self {
        Self {
            extra_depth,
            max_depth,
        }
    }

    /// Deepest iteration for a given lookahead budget.
    pub fn depth_limit(&self, lookahead: u32) -> u8 {
        let limit = lookahead
            .saturating_add(u32::from(self.extra_depth))
            .min(u32::from(u8::MAX)) as u8;
        match self.max_depth {
            Some(max_depth) => limit.min(max_depth),
            None => limit,
        }
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct SearchStats {
    pub nodes: usize,
    pub leaves: usize,
    pub cutoffs: usize,
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    table: TranspositionTable,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            table: TranspositionTable::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.nodes
    }

    pub fn tt_size(&self) -> usize {
        self.table.size()
    }

    pub fn tt_probes(&self) -> usize {
        self.table.probes()
    }

    pub fn tt_hits(&self) -> usize {
        self.table.hits()
    }

    pub fn tt_overwrites(&self) -> usize {
        self.table.overwrites()
    }

    pub fn reset(&mut self) {
        self.stats = SearchStats::default();
        self.table.clear();
    }
}

/// Outcome of a search. `best_move` is `None` when the side to move has no
/// legal move or the position is already decided. `score` is in tenths, from
/// the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u8,
}

/// Searches with the default configuration.
pub fn get_best_move(board: &mut Board, lookahead: u32) -> Result<SearchResult, SearchError> {
    let mut context = SearchContext::new(SearchConfig::default());
    search(&mut context, board, lookahead)
}

/// Runs iterative deepening with a fresh transposition table.
pub fn search(
    context: &mut SearchContext,
    board: &mut Board,
    lookahead: u32,
) -> Result<SearchResult, SearchError> {
    board.validate()?;
    context.reset();

    let depth_limit = context.config.depth_limit(lookahead);
    debug!(
        "searching {} to move, lookahead {}, depth limit {}",
        board.side_to_move(),
        lookahead,
        depth_limit
    );

    let perspective: Score = if board.enemy_turn() { -1 } else { 1 };
    let mut result = SearchResult {
        best_move: None,
        score: evaluate(board) * perspective,
        depth: 0,
    };

    let start = Instant::now();
    for depth in 1..=depth_limit {
        let (score, best_move) = negamax(context, board, depth, -INFINITY, INFINITY);
        result = SearchResult {
            best_move,
            score,
            depth,
        };
        debug!(
            "depth {}: score {} move {} ({} nodes, tt {}/{} hits, {} entries)",
            depth,
            score,
            best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            context.stats.nodes,
            context.table.hits(),
            context.table.probes(),
            context.table.size()
        );

        if score == BEST_SCORE {
            break;
        }
    }
    debug!(
        "search finished at depth {} in {:?}",
        result.depth,
        start.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests;
