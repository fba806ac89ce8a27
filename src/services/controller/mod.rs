//! Country selection → fetch → render → countdown.
//!
//! The controller is owned by the UI thread. Fetches run on a worker thread
//! and countdown ticks on a tokio task; both report back through one channel
//! that [`HolidayController::poll`] drains every frame.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::models::holiday::HolidayRecord;
use crate::services::countdown::{CountdownTick, CountdownTimer, TickSink, TimerPhase};
use crate::services::display::HolidayDisplay;
use crate::services::holiday::{HolidayError, HolidaySource};

/// Called from worker threads whenever a new event is queued.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
enum ControllerEvent {
    Fetched {
        generation: u64,
        country: String,
        result: Result<HolidayRecord, HolidayError>,
    },
    Tick(CountdownTick),
}

pub struct HolidayController {
    source: Arc<dyn HolidaySource>,
    runtime: Handle,
    active_country: String,
    active_timer: Option<CountdownTimer>,
    /// Incremented per load; results from older loads are discarded.
    generation: u64,
    display: HolidayDisplay,
    events_tx: Sender<ControllerEvent>,
    events_rx: Receiver<ControllerEvent>,
    waker: Waker,
}

impl HolidayController {
    pub fn new(
        source: Arc<dyn HolidaySource>,
        runtime: Handle,
        initial_country: impl Into<String>,
        display: HolidayDisplay,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            source,
            runtime,
            active_country: initial_country.into(),
            active_timer: None,
            generation: 0,
            display,
            events_tx,
            events_rx,
            waker: Arc::new(|| {}),
        }
    }

    /// Hook used to wake the UI (egui `request_repaint`) when events arrive.
    pub fn set_waker(&mut self, waker: Waker) {
        self.waker = waker;
    }

    pub fn active_country(&self) -> &str {
        &self.active_country
    }

    pub fn display(&self) -> &HolidayDisplay {
        &self.display
    }

    pub fn timer_phase(&self) -> Option<TimerPhase> {
        self.active_timer.as_ref().map(CountdownTimer::phase)
    }

    /// Initial load of the configured default country.
    pub fn start(&mut self) {
        let country = self.active_country.clone();
        self.load(&country);
    }

    /// React to a selector click. Re-selecting the active country does nothing.
    pub fn select_country(&mut self, code: &str) -> bool {
        if code == self.active_country {
            log::debug!("Country {} already active, ignoring selection", code);
            return false;
        }

        self.active_country = code.to_string();
        self.load(code);
        true
    }

    fn load(&mut self, code: &str) {
        if let Some(timer) = self.active_timer.take() {
            timer.cancel();
        }

        self.display.set_loading(true);
        self.generation += 1;

        let generation = self.generation;
        let country = code.to_string();
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        let waker = Arc::clone(&self.waker);

        log::info!("Loading next holiday for {} (request {})", country, generation);

        thread::spawn(move || {
            let result = source.fetch_next_holiday(&country);
            let _ = tx.send(ControllerEvent::Fetched {
                generation,
                country,
                result,
            });
            waker();
        });
    }

    /// Apply everything the workers have queued since the last call.
    pub fn poll(&mut self, now: Instant) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                ControllerEvent::Fetched {
                    generation,
                    country,
                    result,
                } => self.handle_fetched(generation, &country, result),
                ControllerEvent::Tick(tick) => self.handle_tick(tick, now),
            }
        }
    }

    fn handle_fetched(
        &mut self,
        generation: u64,
        country: &str,
        result: Result<HolidayRecord, HolidayError>,
    ) {
        if generation != self.generation {
            log::debug!(
                "Discarding stale holiday result for {} (request {}, current {})",
                country,
                generation,
                self.generation
            );
            return;
        }

        let outcome = match result {
            Ok(holiday) => {
                self.display.render_holiday_info(Some(&holiday));
                CountdownTimer::start_for_date(
                    &self.runtime,
                    generation,
                    &holiday.date,
                    self.tick_sink(),
                )
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(timer) => self.active_timer = Some(timer),
            Err(err) => {
                log::error!("Failed to load holiday for {}: {}", country, err);
                self.display.render_holiday_info(None);
                self.display.set_loading(false);
            }
        }
    }

    fn handle_tick(&mut self, tick: CountdownTick, now: Instant) {
        let is_current = self
            .active_timer
            .as_ref()
            .is_some_and(|timer| timer.id() == tick.timer_id);
        if !is_current {
            return;
        }

        self.display.apply_countdown(&tick.state, now);
    }

    fn tick_sink(&self) -> TickSink {
        let tx = self.events_tx.clone();
        let waker = Arc::clone(&self.waker);
        Arc::new(move |tick| {
            let _ = tx.send(ControllerEvent::Tick(tick));
            waker();
        })
    }
}
