use tailor_logging::{tailor_debug, tailor_info};

/// One stage of the simulated Workday application flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub label: &'static str,
    pub description: &'static str,
}

pub const FLOW_STEPS: [FlowStep; 4] = [
    FlowStep {
        label: "Click Apply",
        description: "Blue apply button",
    },
    FlowStep {
        label: "Apply Manually",
        description: "Select manual option",
    },
    FlowStep {
        label: "Sign In",
        description: "Auto-login credentials",
    },
    FlowStep {
        label: "Auto-fill",
        description: "Fill all fields",
    },
];

/// Highest step index a run reaches before the next tick resets it.
pub const LAST_STEP: u8 = (FLOW_STEPS.len() - 1) as u8;

/// Generation number of a flow run. Ticks carry the run they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced { step: u8 },
    /// The run passed its last step and the counter is back at idle.
    Finished,
    /// Tick for a run that is not the active one.
    Ignored,
}

/// Bounded step counter: `Idle(0)` or `Running(0..=LAST_STEP)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowProgress {
    current_step: u8,
    active_run: Option<RunId>,
    runs_started: u64,
}

impl FlowProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn is_running(&self) -> bool {
        self.active_run.is_some()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    /// Starts a run at step 0. Returns `None` if a run is already active.
    pub fn start(&mut self) -> Option<RunId> {
        if let Some(run) = self.active_run {
            tailor_debug!("Flow start rejected, run {} still active", run.0);
            return None;
        }
        self.runs_started += 1;
        let run = RunId(self.runs_started);
        self.active_run = Some(run);
        self.current_step = 0;
        tailor_info!("Flow run {} started", run.0);
        Some(run)
    }

    pub fn tick(&mut self, run: RunId) -> TickOutcome {
        if self.active_run != Some(run) {
            tailor_debug!("Ignoring stale tick for run {}", run.0);
            return TickOutcome::Ignored;
        }
        if self.current_step >= LAST_STEP {
            self.reset();
            tailor_info!("Flow run {} finished", run.0);
            TickOutcome::Finished
        } else {
            self.current_step += 1;
            TickOutcome::Advanced {
                step: self.current_step,
            }
        }
    }

    /// Cancels the active run. Returns whether a run was active.
    pub fn stop(&mut self) -> bool {
        match self.active_run {
            Some(run) => {
                tailor_info!("Flow run {} stopped at step {}", run.0, self.current_step);
                self.reset();
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) {
        self.active_run = None;
        self.current_step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowProgress, RunId, TickOutcome, LAST_STEP};

    #[test]
    fn four_ticks_return_to_idle() {
        let mut flow = FlowProgress::new();
        let run = flow.start().expect("idle flow starts");
        for step in 1..=LAST_STEP {
            assert_eq!(flow.tick(run), TickOutcome::Advanced { step });
        }
        assert!(flow.is_running());
        assert_eq!(flow.tick(run), TickOutcome::Finished);
        assert!(!flow.is_running());
        assert_eq!(flow.current_step(), 0);
    }

    #[test]
    fn runs_get_distinct_generations() {
        let mut flow = FlowProgress::new();
        let first = flow.start().unwrap();
        flow.stop();
        let second = flow.start().unwrap();
        assert_ne!(first, second);
        assert_eq!(flow.tick(first), TickOutcome::Ignored);
        assert_eq!(flow.tick(RunId(99)), TickOutcome::Ignored);
        assert_eq!(flow.current_step(), 0);
    }

    #[test]
    fn tick_while_idle_is_ignored() {
        let mut flow = FlowProgress::new();
        assert_eq!(flow.tick(RunId(1)), TickOutcome::Ignored);
        assert!(!flow.stop());
    }
}
