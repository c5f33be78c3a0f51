use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TimerAction {
    Start,
    Pause,
    Reset,
    Tick,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("cannot {action} a timer that is {from}")]
    InvalidTransition {
        from: TimerState,
        action: TimerAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running { remaining: u32 },
    Completed,
}

/// Countdown for one cooking step.
///
/// ```text
/// Idle --start--> Running --pause--> Paused --start--> Running
///                 Running --tick(0)--> Completed
/// Paused | Completed --reset--> Idle
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepTimer {
    duration: u32,
    remaining: u32,
    state: TimerState,
}

impl StepTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            state: TimerState::Idle,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Starts or resumes. A timer with nothing left completes at once.
    pub fn start(&mut self) -> Result<TimerState, TimerError> {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                self.state = if self.remaining == 0 {
                    TimerState::Completed
                } else {
                    TimerState::Running
                };

                Ok(self.state)
            }
            from => Err(TimerError::InvalidTransition {
                from,
                action: TimerAction::Start,
            }),
        }
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Ok(())
            }
            from => Err(TimerError::InvalidTransition {
                from,
                action: TimerAction::Pause,
            }),
        }
    }

    pub fn reset(&mut self) -> Result<(), TimerError> {
        match self.state {
            TimerState::Paused | TimerState::Completed => {
                self.state = TimerState::Idle;
                self.remaining = self.duration;
                Ok(())
            }
            from => Err(TimerError::InvalidTransition {
                from,
                action: TimerAction::Reset,
            }),
        }
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> Result<Tick, TimerError> {
        if self.state != TimerState::Running {
            return Err(TimerError::InvalidTransition {
                from: self.state,
                action: TimerAction::Tick,
            });
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.state = TimerState::Completed;
            return Ok(Tick::Completed);
        }

        Ok(Tick::Running {
            remaining: self.remaining,
        })
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }
}

/// `MM:SS` for a number of seconds.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
