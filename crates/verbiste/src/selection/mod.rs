//! Search result selection state and its persistence.

mod controller;
mod persist;

pub use controller::{
    Candidate, SelectionController, SelectionEvent, SelectionKey, SelectionState, UnknownKey,
};
pub use persist::{
    AUXILIARY_KEY, MemoryStore, PersistedSelection, QUERY_KEY, QueryStringStore, SelectionStore,
};
