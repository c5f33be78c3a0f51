use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{sync::watch, task::JoinHandle, time::Instant};

use crate::{StepTimer, Tick, TimerError, TimerState};

const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub remaining: u32,
}

impl From<&StepTimer> for TimerSnapshot {
    fn from(timer: &StepTimer) -> Self {
        Self {
            state: timer.state(),
            remaining: timer.remaining(),
        }
    }
}

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Drives a [`StepTimer`] on the tokio clock.
///
/// While running, a background task ticks once per second. Pausing,
/// resetting or dropping the handle aborts that task. `on_complete` runs
/// once each time the countdown reaches zero.
///
/// `start` must be called from within a tokio runtime.
pub struct TimerHandle {
    timer: Arc<Mutex<StepTimer>>,
    on_complete: Callback,
    updates: Arc<watch::Sender<TimerSnapshot>>,
    task: Option<JoinHandle<()>>,
}

fn lock(timer: &Mutex<StepTimer>) -> MutexGuard<'_, StepTimer> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TimerHandle {
    pub fn new(duration: u32, on_complete: impl Fn() + Send + Sync + 'static) -> Self {
        let timer = StepTimer::new(duration);
        let (updates, _) = watch::channel(TimerSnapshot::from(&timer));

        Self {
            timer: Arc::new(Mutex::new(timer)),
            on_complete: Arc::new(on_complete),
            updates: Arc::new(updates),
            task: None,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&*lock(&self.timer))
    }

    /// Receives a snapshot after every state change and tick.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.updates.subscribe()
    }

    pub fn start(&mut self) -> Result<(), TimerError> {
        let state = {
            let mut timer = lock(&self.timer);
            let state = timer.start()?;
            self.updates.send_replace(TimerSnapshot::from(&*timer));
            state
        };

        if state == TimerState::Completed {
            tracing::debug!("timer had nothing left, completed on start");
            (self.on_complete)();
            return Ok(());
        }

        self.task = Some(tokio::spawn(run(
            self.timer.clone(),
            self.on_complete.clone(),
            self.updates.clone(),
        )));

        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        {
            let mut timer = lock(&self.timer);
            timer.pause()?;
            self.updates.send_replace(TimerSnapshot::from(&*timer));
        }

        self.cancel();

        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), TimerError> {
        {
            let mut timer = lock(&self.timer);
            timer.reset()?;
            self.updates.send_replace(TimerSnapshot::from(&*timer));
        }

        self.cancel();

        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    timer: Arc<Mutex<StepTimer>>,
    on_complete: Callback,
    updates: Arc<watch::Sender<TimerSnapshot>>,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + TICK, TICK);

    loop {
        interval.tick().await;

        let tick = {
            let mut timer = lock(&timer);
            let tick = timer.tick();
            updates.send_replace(TimerSnapshot::from(&*timer));
            tick
        };

        match tick {
            Ok(Tick::Running { remaining }) => {
                tracing::trace!(remaining, "timer tick");
            }
            Ok(Tick::Completed) => {
                tracing::debug!("timer completed");
                on_complete();
                break;
            }
            Err(err) => {
                tracing::debug!(error = %err, "timer task stopped");
                break;
            }
        }
    }
}
