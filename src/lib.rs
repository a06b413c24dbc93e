// TodoStore - Reactive in-memory state container for a single-page task list

pub mod filter;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::FilterMode;
pub use store::{Change, EditMode, StoreSnapshot, TaskStore};
pub use task::Task;
