use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

/// Cooperative stop signal for a running frame loop
///
/// Clones share the same flag, so a handler thread or a test can cancel a
/// loop it does not own.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Source of frame ticks driving the loop
///
/// The windowed app is driven by the display's redraw callbacks instead;
/// schedulers exist so headless runs and tests control exactly how many
/// frames execute.
pub trait FrameScheduler {
    /// Returns true if another frame should run
    fn next_frame(&mut self) -> bool;
}

/// Deterministic scheduler yielding a fixed number of frames
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Scheduler that never runs dry; pair it with a `CancelToken`
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl FrameScheduler for Unbounded {
    fn next_frame(&mut self) -> bool {
        true
    }
}

/// Run `step` once per scheduler tick until the scheduler runs dry, the
/// token is cancelled, or the step fails. Returns the number of frames
/// executed.
pub fn run<F>(
    scheduler: &mut dyn FrameScheduler,
    token: &CancelToken,
    mut step: F,
) -> Result<u64>
where
    F: FnMut() -> Result<()>,
{
    let mut frames = 0;
    while !token.is_cancelled() && scheduler.next_frame() {
        step()?;
        frames += 1;
    }
    Ok(frames)
}
