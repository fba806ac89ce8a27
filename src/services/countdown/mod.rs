mod state;
mod timer;

pub use state::{calc_time_left, pad, CountdownState};
pub use timer::{CountdownTick, CountdownTimer, TickSink, TimerPhase, TICK_INTERVAL};
