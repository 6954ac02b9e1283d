use tui_debris_types::Step;

use crate::error::TaskError;
use crate::scheduler::{Task, TaskCx};
use crate::tasks::Debris;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectorState {
    /// Look up the current delay
    Checking,
    /// The delay has elapsed; launch on this step
    Armed,
}

/// Launches debris at the pace set by the difficulty schedule.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    state: DirectorState,
    launched: u64,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self {
            state: DirectorState::Checking,
            launched: 0,
        }
    }

    /// Debris launched so far
    pub fn launched(&self) -> u64 {
        self.launched
    }

    fn launch(&mut self, cx: &mut TaskCx<'_>) -> Result<(), TaskError> {
        let field = cx.world.playfield;
        let column = cx
            .world
            .rng
            .between(field.border, field.cols.saturating_sub(field.border + 1));
        let Some(&shape) = cx.world.rng.pick(&cx.world.sprites.debris) else {
            log::warn!("no debris shapes loaded");
            return Ok(());
        };
        let debris = Debris::launch(cx.world, &*cx.canvas, column, shape)?;
        log::debug!("debris {} launched at column {}", debris.obstacle(), column);
        cx.spawn(debris);
        self.launched += 1;
        Ok(())
    }
}

impl Task for SpawnDirector {
    fn name(&self) -> &'static str {
        "spawn-director"
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if cx.world.is_game_over() {
            return Ok(Step::Done);
        }

        if self.state == DirectorState::Armed {
            self.launch(cx)?;
            self.state = DirectorState::Checking;
        }

        match cx.world.spawn_delay() {
            Some(delay) => {
                self.state = DirectorState::Armed;
                Ok(Step::sleep(delay))
            }
            None => Ok(Step::sleep(cx.world.config.debris.idle_recheck_secs)),
        }
    }
}
