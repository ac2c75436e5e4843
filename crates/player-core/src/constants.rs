use std::time::Duration;

// Shared playback and scene tuning constants used by the web frontend.

// Volume ramps
pub const FADE_STEPS: u32 = 60; // discrete volume updates per ramp
pub const FADE_IN_CEILING: f32 = 0.8; // volume a fade-in settles at
pub const CROSSFADE_MS: u64 = 1500; // track switch while playing
pub const FIRST_PLAY_FADE_MS: u64 = 1000; // start from silence / resume

// Background overlay
pub const OVERLAY_COMMIT_DELAY_MS: i32 = 10; // lets the opacity transition register

// Scene layout: viewport width breakpoints (CSS px)
pub const NARROW_VIEWPORT_MAX: f32 = 500.0;
pub const MEDIUM_VIEWPORT_MAX: f32 = 900.0;

pub const NARROW_MODEL_SCALE: f32 = 0.13;
pub const MEDIUM_MODEL_SCALE: f32 = 0.18;
pub const WIDE_MODEL_SCALE: f32 = 0.25;

pub const MODEL_OFFSET_X: f32 = 0.6;
pub const NARROW_MODEL_LIFT: f32 = 0.5; // small screens push the model up

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.5, 12.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 1.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.12;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = 12.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI * 0.75;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // per wheel notch

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.9;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [2.0, 8.0, 4.0];

#[inline]
pub fn crossfade_duration() -> Duration {
    Duration::from_millis(CROSSFADE_MS)
}

#[inline]
pub fn first_play_fade_duration() -> Duration {
    Duration::from_millis(FIRST_PLAY_FADE_MS)
}
