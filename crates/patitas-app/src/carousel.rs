// Rust guideline compliant 2026-10-16

//! Auto-advancing carousel over the recent records.
//!
//! A background task advances the window every interval and publishes the
//! visible frame on a watch channel. Manual navigation holds the state lock;
//! a tick that finds it held is skipped rather than queued.

use patitas_core::{AnimalRecord, Carousel};

use crate::error::{AppError, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// The records visible at one carousel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Index of the first visible record.
    pub offset: usize,
    /// Visible records, at most one window long.
    pub records: Vec<AnimalRecord>,
}

#[derive(Debug)]
struct State {
    carousel: Carousel,
    records: Vec<AnimalRecord>,
}

impl State {
    fn frame(&self) -> Frame {
        Frame {
            offset: self.carousel.offset(),
            records: self.carousel.visible(&self.records).to_vec(),
        }
    }
}

/// Owner of a running carousel.
///
/// Dropping the handle cancels the ticking task; once it exits the frame
/// channel closes.
#[derive(Debug)]
pub struct CarouselHandle {
    state: Arc<Mutex<State>>,
    frames: Arc<watch::Sender<Frame>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CarouselHandle {
    /// Starts a carousel over `records`.
    ///
    /// No task is spawned when every record fits in one window; the frame
    /// then never changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `interval` is zero.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime while the collection needs
    /// rotating.
    pub fn spawn(records: Vec<AnimalRecord>, window: usize, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(AppError::InvalidInput(
                "Carousel interval must be greater than zero".to_string(),
            ));
        }

        let carousel = Carousel::new(records.len(), window);
        let state = State { carousel, records };
        let (sender, _) = watch::channel(state.frame());

        let state = Arc::new(Mutex::new(state));
        let frames = Arc::new(sender);
        let cancel = CancellationToken::new();

        let task = if carousel.can_rotate() {
            Some(tokio::spawn(run(
                Arc::clone(&state),
                Arc::clone(&frames),
                cancel.clone(),
                Instant::now() + interval,
                interval,
            )))
        } else {
            tracing::debug!("Carousel fits in one window, not rotating");
            None
        };

        Ok(Self {
            state,
            frames,
            cancel,
            task,
        })
    }

    /// Subscribes to frame updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.subscribe()
    }

    /// The most recently published frame.
    #[must_use]
    pub fn current(&self) -> Frame {
        self.frames.borrow().clone()
    }

    /// Moves one record forward and returns the new frame.
    pub async fn next(&self) -> Frame {
        let mut nav = self.begin_navigation().await;
        nav.next();
        nav.frame()
    }

    /// Moves one record back and returns the new frame.
    pub async fn prev(&self) -> Frame {
        let mut nav = self.begin_navigation().await;
        nav.prev();
        nav.frame()
    }

    /// Takes the navigation lock.
    ///
    /// Ticks are skipped while the returned guard is alive. The frame is
    /// published when the guard drops.
    pub async fn begin_navigation(&self) -> Navigation<'_> {
        Navigation {
            state: self.state.lock().await,
            frames: &self.frames,
        }
    }

    /// Whether the ticking task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
            && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops automatic advancing. Manual navigation keeps working.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Exclusive access to the carousel position.
pub struct Navigation<'a> {
    state: MutexGuard<'a, State>,
    frames: &'a watch::Sender<Frame>,
}

impl Navigation<'_> {
    /// Moves one record forward, wrapping.
    pub fn next(&mut self) {
        self.state.carousel.advance();
    }

    /// Moves one record back, wrapping.
    pub fn prev(&mut self) {
        self.state.carousel.retreat();
    }

    /// The frame at the current position.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.state.frame()
    }
}

impl Drop for Navigation<'_> {
    fn drop(&mut self) {
        self.frames.send_replace(self.state.frame());
    }
}

async fn run(
    state: Arc<Mutex<State>>,
    frames: Arc<watch::Sender<Frame>>,
    cancel: CancellationToken,
    first_tick: Instant,
    interval: Duration,
) {
    let mut ticker = time::interval_at(first_tick, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let Ok(mut state) = state.try_lock() else {
                    tracing::debug!("Navigation in progress, skipping tick");
                    continue;
                };
                state.carousel.advance();
                frames.send_replace(state.frame());
            }
        }
    }

    tracing::debug!("Carousel stopped");
}
