//! Cooperative tick scheduler
//!
//! Every task is an explicit state machine. Once per tick the scheduler walks
//! the active set and either counts down a task's suspension or resumes it for
//! exactly one [`Step`].
//!
//! # Ordering
//!
//! Tasks are visited by [`Lane`] first and registration order second. The lane
//! order puts projectiles before debris, so a hit marked by a projectile is
//! seen by the struck debris later in the same pass.
//!
//! # Mutation during a pass
//!
//! - Spawned tasks go to a pending queue and join the active set at the start
//!   of the next pass, so a pass never visits a task spawned during it.
//! - A task that returns [`Step::Done`] is dropped on the spot. Its slot stays
//!   empty until the pass ends and is compacted then, so neighbours are neither
//!   skipped nor visited twice.

use std::fmt;

use tui_debris_core::ticks_for;
use tui_debris_types::{Step, SuspensionRequest};

use crate::canvas::{Canvas, ControlSource};
use crate::error::{TaskError, TaskFault};
use crate::world::World;

/// Identity of a registered task, unique for the scheduler's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(&self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Visit-order category of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    Ship,
    Projectile,
    Debris,
    Scenery,
}

/// A resumable unit of behaviour.
pub trait Task {
    /// Label used in logs and faults
    fn name(&self) -> &'static str;

    fn lane(&self) -> Lane {
        Lane::Scenery
    }

    /// Run until the next suspension point or completion.
    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError>;
}

struct Entry {
    id: TaskId,
    lane: Lane,
    name: &'static str,
    counter: u32,
    task: Option<Box<dyn Task>>,
}

/// Queue of tasks waiting to join the active set
#[derive(Default)]
pub struct Spawner {
    pending: Vec<Entry>,
    next_id: u64,
}

impl Spawner {
    pub fn spawn<T: Task + 'static>(&mut self, task: T) -> TaskId {
        self.spawn_boxed(Box::new(task))
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        log::trace!("spawned {} {}", task.name(), id);
        self.pending.push(Entry {
            id,
            lane: task.lane(),
            name: task.name(),
            counter: 0,
            task: Some(task),
        });
        id
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub(crate) fn pending_names(&self) -> Vec<&'static str> {
        self.pending.iter().map(|e| e.name).collect()
    }
}

/// Everything a task may touch while it runs.
pub struct TaskCx<'a> {
    pub world: &'a mut World,
    pub canvas: &'a mut dyn Canvas,
    pub controls: &'a mut dyn ControlSource,
    spawner: &'a mut Spawner,
    task_id: TaskId,
}

impl<'a> TaskCx<'a> {
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        controls: &'a mut dyn ControlSource,
        spawner: &'a mut Spawner,
        task_id: TaskId,
    ) -> Self {
        Self {
            world,
            canvas,
            controls,
            spawner,
            task_id,
        }
    }

    /// Queue a task; it first runs on the next pass.
    pub fn spawn<T: Task + 'static>(&mut self, task: T) -> TaskId {
        self.spawner.spawn(task)
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Counts from one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Tasks resumed this pass
    pub resumed: usize,
    /// Tasks whose suspension was counted down instead
    pub suspended: usize,
    /// Tasks that completed this pass
    pub completed: usize,
}

pub struct Scheduler {
    tick_secs: f64,
    active: Vec<Entry>,
    spawner: Spawner,
}

impl Scheduler {
    pub fn new(tick_secs: f64) -> Self {
        Self {
            tick_secs,
            active: Vec::new(),
            spawner: Spawner::default(),
        }
    }

    /// Add a task; it first runs on the next pass.
    pub fn register<T: Task + 'static>(&mut self, task: T) -> TaskId {
        self.spawner.spawn(task)
    }

    /// Live tasks, pending ones included
    pub fn len(&self) -> usize {
        self.active.iter().filter(|e| e.task.is_some()).count() + self.spawner.pending()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.entry(id).is_some()
    }

    /// Remaining suspension of a task, in ticks
    pub fn suspension_of(&self, id: TaskId) -> Option<u32> {
        self.entry(id).map(|e| e.counter)
    }

    /// Number of live tasks with the given name
    pub fn count_named(&self, name: &str) -> usize {
        self.active
            .iter()
            .chain(self.spawner.pending.iter())
            .filter(|e| e.task.is_some() && e.name == name)
            .count()
    }

    /// Run one tick's worth of progress.
    ///
    /// A task that returns an error is removed and the pass stops there; the
    /// error comes back labelled with the task's id and name. Tasks after it
    /// are left untouched for this tick.
    pub fn advance_all(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        controls: &mut dyn ControlSource,
    ) -> Result<PassReport, TaskFault> {
        self.merge_pending();

        let tick_secs = self.tick_secs;
        let mut report = PassReport::default();
        let mut fault = None;

        for entry in self.active.iter_mut() {
            let Some(task) = entry.task.as_mut() else {
                continue;
            };

            if entry.counter > 0 {
                entry.counter -= 1;
                report.suspended += 1;
                continue;
            }

            report.resumed += 1;
            let mut cx = TaskCx::new(
                &mut *world,
                &mut *canvas,
                &mut *controls,
                &mut self.spawner,
                entry.id,
            );
            match task.step(&mut cx) {
                Ok(Step::Suspend(SuspensionRequest::YieldOnce)) => entry.counter = 0,
                Ok(Step::Suspend(SuspensionRequest::SleepFor(secs))) => {
                    entry.counter = ticks_for(secs, tick_secs);
                }
                Ok(Step::Done) => {
                    log::trace!("{} {} completed", entry.name, entry.id);
                    entry.task = None;
                    report.completed += 1;
                }
                Err(source) => {
                    log::error!("{} {} faulted: {}", entry.name, entry.id, source);
                    entry.task = None;
                    fault = Some(TaskFault {
                        task_id: entry.id,
                        task_name: entry.name,
                        source,
                    });
                    break;
                }
            }
        }

        self.active.retain(|e| e.task.is_some());

        match fault {
            Some(fault) => Err(fault),
            None => Ok(report),
        }
    }

    /// Move pending tasks into the active set, keeping (lane, id) order.
    fn merge_pending(&mut self) {
        for entry in self.spawner.pending.drain(..) {
            let at = self.active.partition_point(|e| e.lane <= entry.lane);
            self.active.insert(at, entry);
        }
    }

    fn entry(&self, id: TaskId) -> Option<&Entry> {
        self.active
            .iter()
            .chain(self.spawner.pending.iter())
            .find(|e| e.id == id && e.task.is_some())
    }
}
