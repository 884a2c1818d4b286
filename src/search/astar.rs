use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::search::frontier::Frontier;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// A node satisfying the goal predicate was reached.
    Found,
    /// The frontier emptied before reaching a goal.
    NoPath,
    /// The expansion budget ran out before reaching a goal.
    BudgetExhausted,
}

/// Search outcome. The path runs start to goal inclusive and is empty unless
/// the status is `Found`.
#[derive(Debug, Clone)]
pub struct SearchResult<T> {
    pub status: SearchStatus,
    pub path: Vec<T>,
}

impl<T> SearchResult<T> {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    fn not_found(status: SearchStatus) -> Self {
        Self {
            status,
            path: Vec::new(),
        }
    }
}

pub struct AStar;

impl AStar {
    /// Best-first search over an abstract node type.
    ///
    /// `neighbors` enumerates the nodes adjacent to a node, `edge_cost`
    /// returns the nonnegative cost of moving between two adjacent nodes,
    /// and `heuristic` estimates the remaining cost to a goal (admissible
    /// and consistent for optimality; this is not verified). `budget` caps
    /// the number of node expansions so malformed or infinite graphs still
    /// terminate.
    ///
    /// Once a node is expanded it is never re-expanded, even if a cheaper
    /// route to it turns up later; with an inconsistent heuristic this can
    /// yield a suboptimal path.
    #[tracing::instrument(level = "trace", skip_all, fields(budget = budget))]
    pub fn run<T, G, N, E, H>(
        start: T,
        is_goal: G,
        neighbors: N,
        edge_cost: E,
        heuristic: H,
        budget: usize,
    ) -> SearchResult<T>
    where
        T: Clone + Eq + Hash,
        G: Fn(&T) -> bool,
        N: Fn(&T) -> Vec<T>,
        E: Fn(&T, &T) -> f64,
        H: Fn(&T) -> f64,
    {
        let mut frontier = Frontier::new();
        let mut came_from: HashMap<T, T> = HashMap::new();
        let mut g_score: HashMap<T, f64> = HashMap::new();
        let mut closed: HashSet<T> = HashSet::new();

        g_score.insert(start.clone(), 0.0);
        frontier.enqueue(start.clone(), heuristic(&start));

        let mut expansions = 0usize;

        while let Some(current) = frontier.dequeue() {
            if is_goal(&current) {
                tracing::trace!(expansions, "path found");
                return SearchResult {
                    status: SearchStatus::Found,
                    path: reconstruct_path(&came_from, current),
                };
            }

            if closed.contains(&current) {
                continue;
            }

            if expansions >= budget {
                tracing::warn!(expansions, "expansion budget exhausted");
                return SearchResult::not_found(SearchStatus::BudgetExhausted);
            }
            expansions += 1;
            closed.insert(current.clone());

            let current_g = g_score.get(&current).copied().unwrap_or(0.0);

            for neighbor in neighbors(&current) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let step = edge_cost(&current, &neighbor);
                debug_assert!(step >= 0.0, "edge costs must be nonnegative");
                let tentative = current_g + step;

                if let Some(&best) = g_score.get(&neighbor) {
                    if best < tentative {
                        continue;
                    }
                }

                came_from.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative);
                frontier.enqueue(neighbor.clone(), tentative + heuristic(&neighbor));
            }
        }

        tracing::trace!(expansions, "frontier emptied, no path");
        SearchResult::not_found(SearchStatus::NoPath)
    }
}

fn reconstruct_path<T>(came_from: &HashMap<T, T>, goal: T) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(prev) = came_from.get(&current) {
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    path
}
