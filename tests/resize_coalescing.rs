use dashchart::layout::{LayoutOptions, SizeTier};
use dashchart::resize::{Dimensions, FrameScheduler, FrameTicker, ResizeCoordinator};
use std::time::{Duration, Instant};

/// Records every request so tests can fire frames by hand.
#[derive(Default)]
struct CountingScheduler {
    requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[test]
fn a_drag_resize_renders_once_per_frame_with_the_last_size() {
    let mut sched = CountingScheduler::default();
    let mut rc = ResizeCoordinator::new(LayoutOptions::default());

    // Ten notifications inside one frame.
    for w in 300..310 {
        rc.notify_surface_resize(f64::from(w), 200.0, &mut sched);
    }
    assert_eq!(sched.requests, 1);
    let layout = rc.on_frame().expect("first frame renders");
    assert_eq!(layout.width, 309.0);

    // Next burst schedules exactly one more frame.
    rc.notify_surface_resize(700.0, 400.0, &mut sched);
    rc.notify_window_resize((720.0, 420.0), &mut sched);
    assert_eq!(sched.requests, 2);
    let layout = rc.on_frame().expect("second frame renders");
    assert_eq!(layout.tier, SizeTier::ExtraLarge);
    assert_eq!(rc.committed(), Some(Dimensions::new(720, 420)));
}

#[test]
fn returning_to_the_committed_size_skips_the_render() {
    let mut sched = CountingScheduler::default();
    let mut rc = ResizeCoordinator::new(LayoutOptions::default());
    rc.notify_surface_resize(500.0, 300.0, &mut sched);
    rc.on_frame();
    rc.notify_surface_resize(520.0, 300.0, &mut sched);
    rc.notify_surface_resize(500.0, 300.0, &mut sched);
    assert!(rc.on_frame().is_none());
    assert_eq!(rc.committed(), Some(Dimensions::new(500, 300)));
}

#[test]
fn ticker_drives_the_coordinator() {
    let start = Instant::now();
    let mut ticker = FrameTicker::new(Duration::from_millis(16));
    let mut rc = ResizeCoordinator::new(LayoutOptions::default());

    rc.notify_surface_resize(400.0, 300.0, &mut ticker);
    assert!(ticker.is_scheduled());

    // Poll well past the deadline; the request was made at "now" inside the call.
    let later = start + Duration::from_secs(1);
    assert!(ticker.poll(later));
    assert!(rc.on_frame().is_some());
    assert!(!ticker.poll(later));
}
