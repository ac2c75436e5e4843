// Host-side tests for easing curves, volume ramps and the frame-driven timeline.

use player_core::easing::{ease_out_cubic, fade_in_volume, fade_out_volume};
use player_core::schedule::Timeline;
use player_core::{FadeConfig, FadeDirection, VolumeRamp, FADE_IN_CEILING, FADE_STEPS};
use std::time::Duration;

#[test]
fn easing_curves_hit_their_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(fade_in_volume(0.8, 0.0), 0.0);
    assert!((fade_in_volume(0.8, 1.0) - 0.8).abs() < 1e-6);
    assert_eq!(fade_out_volume(0.8, 0.0), 0.8);
    assert_eq!(fade_out_volume(0.8, 1.0), 0.0);
}

#[test]
fn easing_clamps_progress_outside_unit_range() {
    assert_eq!(fade_in_volume(0.8, 2.0), fade_in_volume(0.8, 1.0));
    assert_eq!(fade_out_volume(0.5, -1.0), 0.5);
    assert_eq!(fade_out_volume(0.5, 3.0), 0.0);
}

#[test]
fn fade_in_decelerates_and_fade_out_accelerates() {
    // ease-out cubic covers most of the range in the first half
    assert!(fade_in_volume(1.0, 0.5) > 0.8);
    // quadratic fade-out keeps most of the volume in the first half
    assert!(fade_out_volume(1.0, 0.5) >= 0.75);
}

#[test]
fn default_config_matches_constants() {
    let cfg = FadeConfig::default();
    assert_eq!(cfg.steps, FADE_STEPS);
    assert_eq!(cfg.ceiling, FADE_IN_CEILING);
    assert_eq!(cfg.crossfade, Duration::from_millis(1500));
    assert_eq!(cfg.first_play, Duration::from_millis(1000));
    assert_eq!(cfg.resume, Duration::from_millis(1000));
}

#[test]
fn ramp_takes_exactly_its_step_count_within_duration() {
    let mut ramp = VolumeRamp::fade_in(Duration::from_millis(1500), 60, 0.8);
    let mut writes = 0;
    for _ in 0..60 {
        if ramp.advance(Duration::from_millis(25)).is_some() {
            writes += 1;
        }
    }
    assert_eq!(writes, 60);
    assert!(ramp.is_finished());
    assert_eq!(ramp.steps_taken(), 60);
    assert_eq!(ramp.advance(Duration::from_millis(25)), None);
}

#[test]
fn ramp_fires_several_steps_in_one_long_frame() {
    let mut ramp = VolumeRamp::fade_out(1.0, Duration::from_millis(600), 60);
    // 10 ms per step; a 35 ms frame fires three steps and reports the last
    let v = ramp.advance(Duration::from_millis(35)).unwrap();
    assert_eq!(ramp.steps_taken(), 3);
    assert_eq!(v, ramp.volume_at(3));
    // the 5 ms remainder carries over
    assert!(ramp.advance(Duration::from_millis(5)).is_some());
    assert_eq!(ramp.steps_taken(), 4);
}

#[test]
fn ramp_with_zero_duration_completes_on_first_advance() {
    let mut ramp = VolumeRamp::fade_in(Duration::ZERO, 60, 0.8);
    let v = ramp.advance(Duration::ZERO).unwrap();
    assert!((v - 0.8).abs() < 1e-6);
    assert!(ramp.is_finished());
}

#[test]
fn cancelled_ramp_stops_advancing() {
    let mut ramp = VolumeRamp::fade_out(0.8, Duration::from_millis(1500), 60);
    let handle = ramp.handle();
    ramp.advance(Duration::from_millis(100));
    handle.cancel();
    assert!(ramp.is_cancelled());
    assert!(ramp.is_finished());
    assert_eq!(ramp.advance(Duration::from_millis(100)), None);
    assert_eq!(ramp.direction(), FadeDirection::Out { from: 0.8 });
}

#[test]
fn timeline_releases_items_when_due_in_order() {
    let mut tl = Timeline::new();
    tl.schedule(Duration::from_millis(750), "late");
    tl.schedule(Duration::from_millis(100), "early");
    tl.schedule(Duration::from_millis(100), "early-second");

    assert!(tl.advance(Duration::from_millis(99)).is_empty());
    assert_eq!(tl.advance(Duration::from_millis(1)), vec!["early", "early-second"]);
    assert_eq!(tl.len(), 1);
    assert!(tl.advance(Duration::from_millis(649)).is_empty());
    assert_eq!(tl.advance(Duration::from_millis(1)), vec!["late"]);
    assert!(tl.is_empty());
}

#[test]
fn timeline_delays_are_relative_to_schedule_time() {
    let mut tl = Timeline::new();
    tl.advance(Duration::from_secs(5));
    tl.schedule(Duration::from_millis(10), 1u8);
    assert!(tl.advance(Duration::from_millis(9)).is_empty());
    assert_eq!(tl.advance(Duration::from_millis(1)), vec![1]);
}
