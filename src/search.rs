use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, LinkedList},
    fmt::Debug,
};

use log::{debug, trace};

use crate::{
    cost::{CostModel, SearchState},
    grid::{Grid, Position},
    Error,
};

/// Whether equal-cost alternate routes to a state are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePolicy {
    /// Keep every route whose score ties the best one; needed to enumerate all optimal cells.
    Inclusive,
    /// Keep only strict improvements; one arbitrary optimal path survives.
    Strict,
}

impl TiePolicy {
    fn admits(&self, candidate_score: usize, known_score: usize) -> bool {
        match self {
            TiePolicy::Inclusive => candidate_score <= known_score,
            TiePolicy::Strict => candidate_score < known_score,
        }
    }
}

/// Stable handle of an entry in the search arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

#[derive(Debug, Clone)]
pub struct Entry<S> {
    state: S,
    score: usize,
    parent: Option<EntryId>,
}

impl<S> Entry<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }
}

#[derive(Debug, Clone, Copy)]
struct FrontierItem {
    score: usize,
    id: EntryId,
}

impl Ord for FrontierItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for FrontierItem {}

/// Min-ordered worklist of arena entries keyed by cumulative score.
#[derive(Debug, Default)]
struct Frontier {
    items: BinaryHeap<Reverse<FrontierItem>>,
}

impl Frontier {
    fn push(&mut self, score: usize, id: EntryId) {
        self.items.push(Reverse(FrontierItem { score, id }));
    }

    fn pop_min(&mut self) -> Result<FrontierItem, Error> {
        self.items
            .pop()
            .map(|Reverse(item)| item)
            .ok_or(Error::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Best cumulative score seen so far for each state.
#[derive(Debug)]
struct ScoreTable<S> {
    scores: HashMap<S, usize>,
}

impl<S: SearchState> ScoreTable<S> {
    fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    fn get(&self, state: &S) -> Option<usize> {
        self.scores.get(state).copied()
    }

    /// Record `score` for `state` if the policy admits it, and tell whether it did.
    fn offer(&mut self, state: &S, score: usize, policy: TiePolicy) -> bool {
        match self.scores.get_mut(state) {
            Some(known_score) if policy.admits(score, *known_score) => {
                *known_score = score;
                true
            }
            Some(_) => false,
            None => {
                self.scores.insert(state.clone(), score);
                true
            }
        }
    }
}

/// Predicate telling whether a state counts as arrival at the goal.
pub trait Goal<S> {
    fn is_reached(&self, state: &S) -> bool;
}

impl<S, F> Goal<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_reached(&self, state: &S) -> bool {
        self(state)
    }
}

/// Any state standing on the position, whatever its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalAt(pub Position);

impl<S: SearchState> Goal<S> for GoalAt {
    fn is_reached(&self, state: &S) -> bool {
        *state.pos() == self.0
    }
}

/// One configured shortest-path search over a grid.
pub struct Search<M: CostModel, G> {
    grid: Grid,
    start: M::State,
    model: M,
    goal: G,
    tie_policy: TiePolicy,
}

impl<M, G> Debug for Search<M, G>
where
    M: CostModel + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("grid", &self.grid)
            .field("start", &self.start)
            .field("model", &self.model)
            .field("tie_policy", &self.tie_policy)
            .finish_non_exhaustive()
    }
}

impl<M, G> Search<M, G>
where
    M: CostModel,
    G: Goal<M::State>,
{
    pub fn new(
        grid: Grid,
        start: M::State,
        model: M,
        goal: G,
        tie_policy: TiePolicy,
    ) -> Result<Self, Error> {
        if !grid.is_open(start.pos()) {
            return Err(Error::InvalidStartState(*start.pos()));
        }

        Ok(Self {
            grid,
            start,
            model,
            goal,
            tie_policy,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    pub fn add_obstruction(&mut self, pos: Position) -> Result<(), Error> {
        self.grid.add_obstruction(pos)
    }

    pub fn run(&self) -> SearchResult<M::State> {
        let mut result = SearchResult::new();
        if !self.grid.is_open(self.start.pos()) {
            debug!("Start {} is obstructed, no path.", self.start.pos());
            return result;
        }

        let start_id = result.push_entry(self.start.clone(), 0, None);
        let mut frontier = Frontier::default();
        frontier.push(0, start_id);
        let mut best_scores = ScoreTable::new();
        best_scores.offer(&self.start, 0, self.tie_policy);
        let mut expanded_states = HashSet::new();
        let mut next_states = Vec::new();
        let mut max_frontier_n = frontier.len();
        loop {
            let cur_item = match frontier.pop_min() {
                Ok(item) => item,
                Err(e) => {
                    trace!("{}", e);
                    break;
                }
            };
            if result
                .best_score
                .is_some_and(|min_score| cur_item.score > min_score)
            {
                break;
            }

            let cur_state = result.entries[cur_item.id.0].state.clone();
            if best_scores
                .get(&cur_state)
                .is_some_and(|known_score| cur_item.score > known_score)
            {
                // Dominated by a cheaper route found after this one was pushed.
                continue;
            }

            result
                .arrivals
                .entry(cur_state.clone())
                .or_default()
                .push(cur_item.id);

            if self.goal.is_reached(&cur_state) {
                trace!(
                    "Goal arrival at {} with score {}.",
                    cur_state.pos(),
                    cur_item.score
                );
                result.best_score.get_or_insert(cur_item.score);
                result.goal_arrivals.push(cur_item.id);
                continue;
            }

            if !expanded_states.insert(cur_state.clone()) {
                continue;
            }

            next_states.clear();
            self.model
                .transitions(&self.grid, &cur_state, &mut next_states);
            for (next_state, cost) in next_states.drain(..) {
                let next_score = cur_item.score + cost;
                if best_scores.offer(&next_state, next_score, self.tie_policy) {
                    let next_id = result.push_entry(next_state, next_score, Some(cur_item.id));
                    frontier.push(next_score, next_id);
                }
            }
            max_frontier_n = max_frontier_n.max(frontier.len());
        }

        debug!(
            "Search finished: best score {:?}, {} goal arrival(s), {} entries, {} expanded states, frontier peak {}.",
            result.best_score,
            result.goal_arrivals.len(),
            result.entries.len(),
            expanded_states.len(),
            max_frontier_n,
        );
        result
    }
}

/// Outcome of [`Search::run`]. Entries stay in the arena after the frontier drops them,
/// so any goal arrival can be walked back to the start.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    best_score: Option<usize>,
    goal_arrivals: Vec<EntryId>,
    entries: Vec<Entry<S>>,
    arrivals: HashMap<S, Vec<EntryId>>,
}

impl<S: SearchState> SearchResult<S> {
    fn new() -> Self {
        Self {
            best_score: None,
            goal_arrivals: Vec::new(),
            entries: Vec::new(),
            arrivals: HashMap::new(),
        }
    }

    fn push_entry(&mut self, state: S, score: usize, parent: Option<EntryId>) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(Entry {
            state,
            score,
            parent,
        });
        id
    }

    /// `None` when the goal can't be reached.
    pub fn best_score(&self) -> Option<usize> {
        self.best_score
    }

    pub fn is_found(&self) -> bool {
        self.best_score.is_some()
    }

    pub fn goal_arrivals(&self) -> impl Iterator<Item = &Entry<S>> {
        self.goal_arrivals.iter().map(|id| &self.entries[id.0])
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry<S>> {
        self.entries.get(id.0)
    }

    /// States from start to goal along the first optimal arrival.
    pub fn reconstruct_single_states(&self) -> Option<Vec<S>> {
        let goal_id = *self.goal_arrivals.first()?;
        let mut states = Vec::new();
        let mut cur_id = Some(goal_id);
        while let Some(id) = cur_id {
            debug_assert!(states.len() < self.entries.len(), "parent chain cycles");
            let entry = &self.entries[id.0];
            states.push(entry.state.clone());
            cur_id = entry.parent;
        }
        states.reverse();

        Some(states)
    }

    /// Positions from start to goal along the first optimal arrival.
    pub fn reconstruct_single_path(&self) -> Option<Vec<Position>> {
        let mut path: Vec<Position> = self
            .reconstruct_single_states()?
            .iter()
            .map(|state| *state.pos())
            .collect();
        path.dedup();

        Some(path)
    }

    /// Every position lying on at least one optimal path, start and goal included.
    ///
    /// Complete only under [`TiePolicy::Inclusive`]; the strict policy yields one path per goal arrival.
    pub fn reconstruct_all_optimal_cells(&self) -> HashSet<Position> {
        let mut cells = HashSet::new();
        let mut search_ids: LinkedList<EntryId> = self.goal_arrivals.iter().copied().collect();
        let mut searched_ids: HashSet<EntryId> = search_ids.iter().copied().collect();
        while let Some(cur_id) = search_ids.pop_front() {
            let entry = &self.entries[cur_id.0];
            cells.insert(*entry.state.pos());
            let Some(parent_id) = entry.parent else {
                continue;
            };

            // The parent was expanded at its final score, so every arrival tying it is optimal too.
            let parent = &self.entries[parent_id.0];
            let tied_ids = self
                .arrivals
                .get(&parent.state)
                .into_iter()
                .flatten()
                .filter(|id| self.entries[id.0].score == parent.score);
            for id in std::iter::once(&parent_id).chain(tied_ids) {
                if searched_ids.insert(*id) {
                    search_ids.push_back(*id);
                }
            }
        }

        cells
    }
}
