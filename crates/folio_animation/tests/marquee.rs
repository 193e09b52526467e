//! Seamless-loop behaviour of the marquee strip.

use folio_animation::{AnimationScheduler, MarqueeAnimator, MarqueeConfig};
use pretty_assertions::assert_eq;

const SKILLS: [&str; 4] = ["Python", "PyTorch", "React", "Docker"];

fn marquee(copies: usize) -> MarqueeAnimator {
    MarqueeAnimator::new(MarqueeConfig {
        copies,
        duration_ms: 10_000,
    })
    .unwrap()
}

#[test]
fn strip_holds_full_copies_in_order() {
    for copies in [2, 3] {
        let strip = marquee(copies).strip(&SKILLS);
        assert_eq!(strip.len(), SKILLS.len() * copies);
        for chunk in strip.chunks(SKILLS.len()) {
            assert_eq!(chunk, &SKILLS[..]);
        }
    }
}

#[test]
fn offset_moves_linearly_within_a_loop() {
    let m = marquee(2);
    assert_eq!(m.offset_percent(0.0), 0.0);
    assert!((m.offset_percent(2_500.0) - -12.5).abs() < 1e-4);
    assert!((m.offset_percent(5_000.0) - -25.0).abs() < 1e-4);
    assert!((m.offset_px(5_000.0, 800.0) - -400.0).abs() < 1e-2);
}

#[test]
fn no_visible_jump_between_iterations() {
    let copy_width = 1200.0_f32;
    for copies in [2, 3] {
        let m = marquee(copies);
        for loop_index in 1..4 {
            let boundary = 10_000.0 * loop_index as f64;
            let before = m.offset_px(boundary - 1.0, copy_width);
            let after = m.offset_px(boundary, copy_width);

            // Just before the wrap the strip sits one copy to the left...
            assert!((before - -copy_width).abs() < 0.2, "before={before}");
            // ...and restarting at zero shows the very same pixels
            let seam = (after - before) - copy_width;
            assert!(seam.abs() < 0.2, "copies={copies} seam={seam}");
        }
    }
}

#[test]
fn offset_stays_within_one_copy() {
    let m = marquee(3);
    let copy_width = 640.0;
    let mut t = 0.0;
    while t < 50_000.0 {
        let offset = m.offset_px(t, copy_width);
        assert!(offset <= 0.0 && offset > -copy_width - 1e-3, "t={t} offset={offset}");
        t += 333.0;
    }
}

#[test]
fn scheduler_drives_the_loop() {
    let m = marquee(2);
    let mut scheduler = AnimationScheduler::new();
    let id = scheduler.add(m.animation());

    for _ in 0..150 {
        scheduler.tick(100.0);
    }
    // 15s into a 10s loop: halfway through the second pass
    let offset = scheduler.value(id).unwrap();
    assert!((offset - -25.0).abs() < 1e-3, "offset={offset}");
    assert!(scheduler.has_active_animations());
}
