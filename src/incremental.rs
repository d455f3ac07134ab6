use std::collections::HashSet;

use log::debug;

use crate::{
    cost::CostModel,
    grid::Position,
    search::{Goal, Search, SearchResult, TiePolicy},
    Error,
};

/// What an obstruction insertion cost the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolve {
    /// The obstruction lies off every cached optimal cell; the cached result still holds.
    Unaffected,
    /// A full search was run again.
    Researched,
}

/// Keeps a search result valid while obstructions are added one at a time,
/// re-searching only when a new obstruction lands on a cached optimal cell.
///
/// Under [`TiePolicy::Inclusive`] the cached cells are every optimal cell, so the reported
/// score and cell set always equal those of a fresh search. Under [`TiePolicy::Strict`] only
/// the score is guaranteed to match; the cached path is still one of the optimal ones.
#[derive(Debug)]
pub struct IncrementalSolver<M: CostModel, G> {
    search: Search<M, G>,
    result: SearchResult<M::State>,
    path_cells: HashSet<Position>,
    research_n: usize,
}

impl<M, G> IncrementalSolver<M, G>
where
    M: CostModel,
    G: Goal<M::State>,
{
    pub fn new(search: Search<M, G>) -> Self {
        let result = search.run();
        let path_cells = Self::cached_cells(&search, &result);
        Self {
            search,
            result,
            path_cells,
            research_n: 1,
        }
    }

    fn cached_cells(search: &Search<M, G>, result: &SearchResult<M::State>) -> HashSet<Position> {
        match search.tie_policy() {
            TiePolicy::Inclusive => result.reconstruct_all_optimal_cells(),
            TiePolicy::Strict => result
                .reconstruct_single_path()
                .map(|path| path.into_iter().collect())
                .unwrap_or_default(),
        }
    }

    /// Insert an obstruction and bring the cached result up to date.
    ///
    /// A duplicate insertion returns [`Error::AlreadyObstructed`] and changes nothing.
    pub fn add_obstruction(&mut self, pos: Position) -> Result<Resolve, Error> {
        self.search.add_obstruction(pos)?;
        if !self.result.is_found() {
            debug!("Obstruction at {} can't revive a search with no path.", pos);
            return Ok(Resolve::Unaffected);
        }

        if !self.path_cells.contains(&pos) {
            debug!("Obstruction at {} is off the cached optimum.", pos);
            return Ok(Resolve::Unaffected);
        }

        self.result = self.search.run();
        self.path_cells = Self::cached_cells(&self.search, &self.result);
        self.research_n += 1;
        debug!(
            "Obstruction at {} hit the cached optimum, searched again: {:?}.",
            pos,
            self.result.best_score()
        );

        Ok(Resolve::Researched)
    }

    pub fn search(&self) -> &Search<M, G> {
        &self.search
    }

    pub fn result(&self) -> &SearchResult<M::State> {
        &self.result
    }

    pub fn best_score(&self) -> Option<usize> {
        self.result.best_score()
    }

    /// Cells of the cached optimum, see the type-level docs for what they cover.
    pub fn path_cells(&self) -> &HashSet<Position> {
        &self.path_cells
    }

    /// Number of full searches run so far, the initial one included.
    pub fn research_n(&self) -> usize {
        self.research_n
    }
}

/// Insert `positions` in order and return the first one after which the goal is unreachable.
///
/// Positions already obstructed are skipped. A solver whose goal is unreachable before any
/// insertion yields [`Error::NoPathBeforeInsertion`], since no position in the list can be the cut.
pub fn first_blocking<M, G>(
    solver: &mut IncrementalSolver<M, G>,
    positions: &[Position],
) -> Result<Option<Position>, Error>
where
    M: CostModel,
    G: Goal<M::State>,
{
    if !solver.result().is_found() {
        return Err(Error::NoPathBeforeInsertion);
    }

    for pos in positions {
        match solver.add_obstruction(*pos) {
            Ok(_) | Err(Error::AlreadyObstructed(_)) => (),
            Err(e) => return Err(e),
        }

        if !solver.result().is_found() {
            return Ok(Some(*pos));
        }
    }

    Ok(None)
}
