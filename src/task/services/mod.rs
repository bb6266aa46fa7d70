//! Application services for task orchestration.
//!
//! Each use-case is a separate type constructed with exactly the ports it
//! needs.

mod add_comment;
mod create_task;
mod find_by_status;
mod get_task;
mod response;

pub use add_comment::{AddCommentError, AddCommentRequest, AddCommentToTask};
pub use create_task::{CreateTask, CreateTaskError, CreateTaskRequest};
pub use find_by_status::FindTasksByStatus;
pub use get_task::{GetTaskById, TaskDetails, TaskQueryError};
pub use response::{CommentResponse, TaskResponse, TaskWithCommentsResponse};
