//! Banner carousel state machine.
//!
//! The carousel owns a single integer position into the banner list. With
//! zero or one banners nothing is scheduled and the indicator controls are
//! hidden; otherwise a timer advances the position every 4 seconds,
//! wrapping, and a manual selection jumps straight to the chosen index and
//! restarts the countdown. The driver keeps exactly one timer alive,
//! resetting its deadline only when the position changes.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep};
use tracing::debug;

use perfume_house_core::Banner;

/// Interval between automatic slide advances.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(4000);

/// Pure carousel state. Position invariant: `0 <= position < len` whenever
/// `len > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    position: usize,
}

impl Carousel {
    /// A carousel over `len` banners, starting at position 0.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, position: 0 }
    }

    /// The current position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Advance to the next slide, wrapping. Returns the new position.
    pub const fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.position = (self.position + 1) % self.len;
        }
        self.position
    }

    /// Jump to a manually selected slide.
    ///
    /// Out-of-range indices are ignored (the indicator row can only emit
    /// in-range ones). Returns whether the position changed.
    pub const fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.position {
            return false;
        }
        self.position = index;
        true
    }

    /// Whether the automatic timer runs at all.
    #[must_use]
    pub const fn runs_timer(&self) -> bool {
        self.len > 1
    }

    /// Whether the manual indicator controls are shown.
    #[must_use]
    pub const fn shows_indicators(&self) -> bool {
        self.len > 1
    }
}

/// Handle to the running carousel driver.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    position: watch::Receiver<usize>,
    commands: mpsc::Sender<usize>,
}

impl CarouselHandle {
    /// The currently visible slide index.
    #[must_use]
    pub fn position(&self) -> usize {
        *self.position.borrow()
    }

    /// Request a manual selection. Fire-and-forget; a full command queue
    /// drops the click rather than blocking a request handler.
    pub fn select(&self, index: usize) {
        let _ = self.commands.try_send(index);
    }
}

/// Spawn the carousel driver once the bootstrap publishes its banner list.
///
/// The first publication (even an empty one) fixes the carousel's working
/// copy for the lifetime of the process - matching a page load in the
/// browser.
#[must_use]
pub fn spawn(mut banners: watch::Receiver<Vec<Banner>>) -> CarouselHandle {
    let (position_tx, position_rx) = watch::channel(0);
    let (command_tx, command_rx) = mpsc::channel(8);

    tokio::spawn(async move {
        if banners.changed().await.is_err() {
            return;
        }
        let len = banners.borrow_and_update().len();
        run(len, position_tx, command_rx).await;
    });

    CarouselHandle {
        position: position_rx,
        commands: command_tx,
    }
}

/// Drive the carousel over `len` banners until the command channel closes.
///
/// Exposed separately from [`spawn`] so the timing behavior can be tested
/// under a paused clock.
pub async fn run(len: usize, position: watch::Sender<usize>, mut commands: mpsc::Receiver<usize>) {
    let mut carousel = Carousel::new(len);
    if !carousel.runs_timer() {
        // Nothing to cycle; the single banner (if any) stays at position 0.
        return;
    }

    let timer = sleep(SLIDE_INTERVAL);
    tokio::pin!(timer);
    loop {
        tokio::select! {
            () = timer.as_mut() => {
                position.send_replace(carousel.advance());
                timer.as_mut().reset(Instant::now() + SLIDE_INTERVAL);
            }
            command = commands.recv() => match command {
                Some(index) => {
                    // The countdown restarts only when the position
                    // actually changes; an ignored selection leaves the
                    // running timer untouched.
                    if carousel.select(index) {
                        debug!(index, "manual slide selection");
                        position.send_replace(carousel.position());
                        timer.as_mut().reset(Instant::now() + SLIDE_INTERVAL);
                    }
                }
                None => break,
            },
        }
    }
}
