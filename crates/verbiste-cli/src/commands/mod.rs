//! CLI command implementations.

mod auxiliary;
mod conjugate;
mod data;
mod search;

pub use auxiliary::{run_auxiliary, AuxiliaryArgs};
pub use conjugate::{run_conjugate, ConjugateArgs};
pub use data::DataArgs;
pub use search::{run_search, SearchArgs};
