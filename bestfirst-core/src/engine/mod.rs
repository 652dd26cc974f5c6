pub mod deadline;
pub mod frontier;
pub mod search;
pub mod visited;

pub use deadline::Deadline;
pub use frontier::{Frontier, FrontierEntry};
pub use search::AStar;
pub use visited::{Visited, VisitedEntry};
