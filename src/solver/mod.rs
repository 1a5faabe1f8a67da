// Three strategies over the same `Instance`: exhaustive enumeration, occurrence-count greedy
// and GRASP. Each one takes the instance by `&mut` and overwrites its assignment.
pub mod exhaustive;
pub mod grasp;
pub mod greedy;

pub use crate::solver::exhaustive::{exists, exists_full};
pub use crate::solver::grasp::{grasp_search, Grasp, GraspConfig, GraspOutcome};
pub use crate::solver::greedy::{greedy_assign, randomized_greedy_assign};
