//! Repeating countdown tick as a cancellable tokio task.
//!
//! The first tick fires immediately, then once per second. The task ends on
//! its own after emitting the first expired tick; dropping or cancelling the
//! handle aborts it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::state::{calc_time_left, CountdownState};
use crate::services::holiday::HolidayError;
use crate::utils::date::parse_local_midnight;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// One recomputation of the remaining time, tagged with the timer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub timer_id: u64,
    pub state: CountdownState,
}

pub type TickSink = Arc<dyn Fn(CountdownTick) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Ticking,
    /// Target reached; the final zero tick has been emitted and the task stopped.
    Expired,
}

/// Handle to the running countdown task.
pub struct CountdownTimer {
    id: u64,
    target: DateTime<Local>,
    task: JoinHandle<()>,
}

impl CountdownTimer {
    pub fn start(runtime: &Handle, id: u64, target: DateTime<Local>, sink: TickSink) -> Self {
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let state = calc_time_left(target, Local::now());
                sink(CountdownTick { timer_id: id, state });

                if state.is_expired() {
                    log::info!("Countdown {} reached its target {}", id, target);
                    break;
                }
            }
        });

        log::debug!("Started countdown {} towards {}", id, target);
        Self { id, target, task }
    }

    /// Start counting down to local midnight of an ISO date string.
    pub fn start_for_date(
        runtime: &Handle,
        id: u64,
        date_str: &str,
        sink: TickSink,
    ) -> Result<Self, HolidayError> {
        let target = parse_local_midnight(date_str)
            .ok_or_else(|| HolidayError::InvalidDate(date_str.to_string()))?;
        Ok(Self::start(runtime, id, target, sink))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn phase(&self) -> TimerPhase {
        if self.task.is_finished() {
            TimerPhase::Expired
        } else {
            TimerPhase::Ticking
        }
    }

    pub fn cancel(self) {
        log::debug!("Cancelled countdown {}", self.id);
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
