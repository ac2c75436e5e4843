// DOM element ids the page provides

pub const TRACK_NAME_ID: &str = "track-name";
pub const PLAY_PAUSE_BUTTON_ID: &str = "play-pause-btn";
pub const PLAY_PAUSE_ICON_ID: &str = "play-pause-icon";
pub const PREV_BUTTON_ID: &str = "prev-btn";
pub const NEXT_BUTTON_ID: &str = "next-btn";
pub const SCENE_CANVAS_ID: &str = "scene-canvas"; // created if the page lacks one

// Controller clock period. Runs on a timer rather than animation frames so
// fades still complete while the tab is hidden.
pub const CONTROLLER_TICK_MS: i32 = 16;
