mod astar;
mod clean;
mod frontier;

pub use astar::{AStar, SearchResult, SearchStatus};
pub use clean::clean_path;
pub use frontier::Frontier;
