use crate::core::{SimulationConfig, StepMode};

/// Decides how many fixed simulation steps each scheduler tick runs
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    time_step: f32,
    max_substeps: u32,
    mode: StepMode,
    accumulator: f32,
}

impl FixedStepScheduler {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            time_step: config.time_step,
            max_substeps: config.max_substeps,
            mode: config.step_mode,
            accumulator: 0.0,
        }
    }

    /// The dt every step is run with
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Time carried over to the next tick in accumulated mode
    pub fn pending_time(&self) -> f32 {
        self.accumulator
    }

    /// Registers `elapsed` seconds of wall-clock time and returns how many steps to run.
    ///
    /// In fixed mode this is always 1. In accumulated mode leftover time below one
    /// step carries over; time beyond `max_substeps` steps is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        match self.mode {
            StepMode::Fixed => 1,
            StepMode::Accumulated => {
                self.accumulator += elapsed.max(0.0);

                // Tolerance keeps e.g. 0.1s at dt=1/30 from rounding down to 2 steps
                let due = (self.accumulator / self.time_step + 1.0e-4).floor();
                let steps = if due > self.max_substeps as f32 {
                    log::warn!(
                        "simulation falling behind: {:.3}s pending, running {} steps and dropping the rest",
                        self.accumulator,
                        self.max_substeps
                    );
                    self.accumulator = 0.0;
                    self.max_substeps
                } else {
                    let steps = due as u32;
                    self.accumulator = (self.accumulator - steps as f32 * self.time_step).max(0.0);
                    steps
                };

                steps
            }
        }
    }

    /// Drops any carried-over time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
