use thiserror::Error;

use tui_debris_core::CollisionError;
use tui_debris_types::ShapeId;

use crate::scheduler::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown {0}")]
    UnknownShape(ShapeId),
}

/// Why a task could not finish its step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error(transparent)]
    Collision(#[from] CollisionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A task error labelled with the task that raised it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task {task_name} ({task_id}) faulted: {source}")]
pub struct TaskFault {
    pub task_id: TaskId,
    pub task_name: &'static str,
    #[source]
    pub source: TaskError,
}
