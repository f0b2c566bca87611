//! Directed evolution of a single weight trait.
//!
//! A population of weights is culled to its heaviest members per sex, bred
//! by drawing pups between each pair's weights, and mutated by random
//! factors, until the mean weight reaches the goal or the generation limit
//! is hit. See [Simulation] for the loop and the modules for each step.

pub mod config;
pub mod crossover;
pub mod error;
pub mod mutation;
pub mod population;
pub mod random;
pub mod scenario;
pub mod selection;
pub mod serialize;

pub use config::Config;
pub use error::{Error, PersistError};
pub use population::Weight;
pub use random::{Source, WyRng};
pub use scenario::{GenerationReport, Outcome, Reporter, Simulation, State};
pub use selection::BreedingPool;
pub use serialize::{FromJson, ToJson};
