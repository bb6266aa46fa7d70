//! In-memory task and comment storage.

mod comment;
mod task;

pub use comment::InMemoryTaskCommentRepository;
pub use task::InMemoryTaskRepository;
