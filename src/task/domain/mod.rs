//! Domain model for tasks and task comments.
//!
//! Both entities validate their fields on construction and carry no
//! identity until a repository assigns one.

mod comment;
mod error;
mod ids;
mod policy;
mod status;
mod task;

pub use comment::{PersistedCommentData, TaskComment};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{CommentId, EstimatedHours, TaskId};
pub use policy::TaskSchedulePolicy;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
