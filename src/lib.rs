pub mod dimacs;
pub mod error;
pub mod generator;
pub mod instance;
pub mod solver;

pub use error::{Precondition, Result, SatError};
pub use generator::Generator;
pub use instance::*;
