//! Resize coordination: coalesce bursts of size notifications into at most
//! one layout recomputation per frame.
//!
//! The coordinator is either *idle* (holding the last committed size) or
//! *pending* (a notification arrived, a frame has been requested, and the
//! newest dimensions wait in a single slot). Later notifications overwrite
//! the slot; they never queue and never request a second frame.
//!
//! Hosts drive it in two steps:
//! 1. call [`ResizeCoordinator::notify_surface_resize`] (or the window-level
//!    fallback) from their resize hook, passing a [`FrameScheduler`];
//! 2. call [`ResizeCoordinator::on_frame`] when the requested frame fires and
//!    re-render only if it returns new layout parameters.

use crate::layout::{LayoutOptions, LayoutParams, compute_layout};
use log::trace;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Surface size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Round measured (fractional) pixels; negative or NaN become zero.
    pub fn from_measured(width: f64, height: f64) -> Self {
        let px = |v: f64| if v.is_finite() { v.round().max(0.0) as u32 } else { 0 };
        Self {
            width: px(width),
            height: px(height),
        }
    }
}

/// Single-shot, coalescing "call me back on the next frame" primitive.
pub trait FrameScheduler {
    /// Ask for one callback at the next paint opportunity.
    fn request_frame(&mut self);
}

/// Scheduler for hosts that fire frames themselves; it only counts requests.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pub requested: usize,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

/// Deadline-based scheduler for hosts without a paint callback: a request
/// becomes due one frame interval after it was made.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    due_at: Option<Instant>,
}

/// ~60 fps.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl FrameTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due_at: None,
        }
    }

    /// Request a frame relative to an explicit `now`.
    pub fn request_frame_at(&mut self, now: Instant) {
        if self.due_at.is_none() {
            self.due_at = Some(now + self.interval);
        }
    }

    /// `true` once when the outstanding request is due; clears it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.due_at.is_some()
    }
}

impl FrameScheduler for FrameTicker {
    fn request_frame(&mut self) {
        self.request_frame_at(Instant::now());
    }
}

/// Idle/pending state machine around [`compute_layout`].
#[derive(Debug, Clone)]
pub struct ResizeCoordinator {
    options: LayoutOptions,
    committed: Option<Dimensions>,
    pending: Option<Dimensions>,
    frame_requested: bool,
}

impl ResizeCoordinator {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            committed: None,
            pending: None,
            frame_requested: false,
        }
    }

    /// Size notification from the host surface's own size observer.
    pub fn notify_surface_resize<S: FrameScheduler + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        scheduler: &mut S,
    ) {
        self.enqueue(Dimensions::from_measured(width, height), scheduler);
    }

    /// Window-level resize fallback for hosts without per-surface observation.
    /// `measured` is the surface size read at the time of the window event.
    pub fn notify_window_resize<S: FrameScheduler + ?Sized>(
        &mut self,
        measured: (f64, f64),
        scheduler: &mut S,
    ) {
        self.enqueue(Dimensions::from_measured(measured.0, measured.1), scheduler);
    }

    fn enqueue<S: FrameScheduler + ?Sized>(&mut self, dims: Dimensions, scheduler: &mut S) {
        self.pending = Some(dims);
        if !self.frame_requested {
            self.frame_requested = true;
            scheduler.request_frame();
        } else {
            trace!("coalesced resize to {}x{}", dims.width, dims.height);
        }
    }

    /// Run the scheduled recomputation. Returns new layout parameters only
    /// when the newest pending size differs from the committed one.
    pub fn on_frame(&mut self) -> Option<LayoutParams> {
        self.frame_requested = false;
        let dims = self.pending.take()?;
        if self.committed == Some(dims) {
            trace!("frame at unchanged size {}x{}, skipping", dims.width, dims.height);
            return None;
        }
        self.committed = Some(dims);
        Some(self.layout_for(dims))
    }

    /// Replace layout options; recomputes for the committed size if there is one.
    pub fn set_options(&mut self, options: LayoutOptions) -> Option<LayoutParams> {
        if self.options == options {
            return None;
        }
        self.options = options;
        self.committed.map(|dims| self.layout_for(dims))
    }

    /// Layout for the committed size, if any.
    pub fn current_layout(&self) -> Option<LayoutParams> {
        self.committed.map(|dims| self.layout_for(dims))
    }

    pub fn committed(&self) -> Option<Dimensions> {
        self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    fn layout_for(&self, dims: Dimensions) -> LayoutParams {
        compute_layout(dims.width as f64, dims.height as f64, &self.options)
    }
}
