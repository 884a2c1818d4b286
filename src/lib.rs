pub mod fsm;
pub mod grid;
pub mod los;
pub mod scheduler;
pub mod search;

// Re-export commonly used types for convenience
pub use fsm::{State, StateMachine};
pub use grid::{Cell, Grid};
pub use los::{bresenham, line_of_sight};
pub use scheduler::{Scheduler, Updatable};
pub use search::{AStar, Frontier, SearchResult, SearchStatus, clean_path};
