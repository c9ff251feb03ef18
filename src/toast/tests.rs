use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use egui::{Context, Pos2, RawInput, Rect};

use super::{Clock, ManualClock, Toast, ToastConfig, ToastKind, Toasts};

const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(800.0, 600.0));

fn raw_input() -> RawInput {
    RawInput {
        screen_rect: Some(SCREEN),
        ..Default::default()
    }
}

/// Run one headless frame and return the toast rects it drew
fn frame<C: Clock>(ctx: &Context, toasts: &mut Toasts<C>) -> Vec<Rect> {
    let mut rects = Vec::new();
    let _ = ctx.run(raw_input(), |ctx| {
        rects = toasts.show(ctx);
    });
    rects
}

fn queue() -> (Toasts<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Toasts::with_clock(clock.clone()), clock)
}

#[test]
fn render_keeps_all_live_toasts() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    toasts.success("Hello World! This is a success!");
    toasts.warning("Hello World! This is a warning!");
    toasts.error("Hello World! This is an error!");
    toasts.info("Hello World! This is an info!");

    clock.set_millis(500);
    let rects = frame(&ctx, &mut toasts);
    assert_eq!(rects.len(), 4);
    assert_eq!(toasts.len(), 4);
}

#[test]
fn render_stacks_oldest_nearest_corner() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    toasts.add(Toast::builder(ToastKind::Info).content("first"));
    toasts.add(
        Toast::builder(ToastKind::Success)
            .title("A wonderful quote!")
            .content("Ours is a friendship forged once in this life, and again in the next."),
    );
    toasts.add(Toast::builder(ToastKind::None).content("third"));

    clock.set_millis(500);
    // First frame sizes the new areas, the second places them.
    frame(&ctx, &mut toasts);
    let rects = frame(&ctx, &mut toasts);
    assert_eq!(rects.len(), 3);

    let config = ToastConfig::default();
    let tolerance = 1.0;

    assert!((rects[0].right() - (SCREEN.right() - config.padding_x)).abs() <= tolerance);
    assert!((rects[0].bottom() - (SCREEN.bottom() - config.padding_y)).abs() <= tolerance);

    for pair in rects.windows(2) {
        let (older, newer) = (pair[0], pair[1]);
        assert!(newer.bottom() < older.top(), "toasts overlap: {older:?} {newer:?}");
        let gap = older.top() - newer.bottom();
        assert!((gap - config.message_padding_y).abs() <= tolerance, "gap {gap}");
    }

    let heights: f32 = rects.iter().map(Rect::height).sum();
    let expected = heights + (rects.len() - 1) as f32 * config.message_padding_y;
    let extent = rects[0].bottom() - rects[rects.len() - 1].top();
    assert!((extent - expected).abs() <= tolerance * rects.len() as f32);
}

#[test]
fn render_prunes_expired_toasts_without_skipping() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    for i in 0..3 {
        toasts.add(
            Toast::builder(ToastKind::Info)
                .content(format!("short {i}"))
                .dismiss_time(Duration::ZERO),
        );
    }
    toasts.add(Toast::builder(ToastKind::Info).content("long"));

    clock.set_millis(301);
    let rects = frame(&ctx, &mut toasts);
    assert_eq!(rects.len(), 1);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.get(0).unwrap().content(), "long");

    clock.set_millis(3301);
    let rects = frame(&ctx, &mut toasts);
    assert!(rects.is_empty());
    assert!(toasts.is_empty());
}

#[test]
fn render_requests_repaint_while_toasts_live() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    toasts.info("fading");

    clock.set_millis(10);
    let output = ctx.run(raw_input(), |ctx| {
        toasts.show(ctx);
    });
    let repaint = output
        .viewport_output
        .values()
        .any(|viewport| viewport.repaint_delay == Duration::ZERO);
    assert!(repaint);
}

#[test]
fn dismissed_toast_frees_its_slot() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    let first = toasts.info("first");
    toasts.info("second");

    clock.set_millis(500);
    frame(&ctx, &mut toasts);
    let before = frame(&ctx, &mut toasts);

    assert!(toasts.dismiss(first));
    frame(&ctx, &mut toasts);
    let after = frame(&ctx, &mut toasts);

    assert_eq!(after.len(), 1);
    assert!((after[0].bottom() - before[0].bottom()).abs() <= 1.0);
}

/// Clock that moves forward one millisecond every time it is read
#[derive(Clone, Default)]
struct SteppingClock {
    next_millis: Rc<Cell<u64>>,
    reads: Rc<Cell<usize>>,
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let millis = self.next_millis.get();
        self.next_millis.set(millis + 1);
        self.reads.set(self.reads.get() + 1);
        Duration::from_millis(millis)
    }
}

#[test]
fn render_uses_one_time_for_prune_and_draw() {
    let ctx = Context::default();
    let clock = SteppingClock::default();
    let mut toasts = Toasts::with_clock(clock.clone());
    toasts.insert(
        Toast::builder(ToastKind::Info)
            .content("last frame of fade out")
            .dismiss_time(Duration::ZERO)
            .build(Duration::ZERO),
    );

    // 300 ms is the final instant of the fade out, 301 ms is expired.
    clock.next_millis.set(300);
    clock.reads.set(0);
    let mut rects = Vec::new();
    let _ = ctx.run(raw_input(), |ctx| {
        rects = toasts.show(ctx);
    });
    assert_eq!(clock.reads.get(), 1, "show read the clock more than once per pass");
    assert_eq!(rects.len(), 1);
    let toast = toasts.get(0).unwrap();
    assert_eq!(toast.fade_percent_at(Duration::from_millis(300)), 0.0);

    let rects = frame(&ctx, &mut toasts);
    assert!(rects.is_empty());
    assert!(toasts.is_empty());
}

#[test]
fn render_survives_never_expiring_toast() {
    let ctx = Context::default();
    let (mut toasts, clock) = queue();
    toasts.add(
        Toast::builder(ToastKind::Warning)
            .content("sticky")
            .dismiss_time(Duration::MAX),
    );

    clock.set(Duration::from_secs(60 * 60 * 24 * 365));
    let rects = frame(&ctx, &mut toasts);
    assert_eq!(rects.len(), 1);
    assert_eq!(toasts.len(), 1);
}
