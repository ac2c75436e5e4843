//! The fixed soundtrack catalog and its per-track background gradients.

/// Three-stop vertical page gradient (top, mid, bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub top: &'static str,
    pub mid: &'static str,
    pub bottom: &'static str,
}

impl Gradient {
    pub const fn new(top: &'static str, mid: &'static str, bottom: &'static str) -> Self {
        Self { top, mid, bottom }
    }

    /// CSS `background` value with stops at 0%, 60% and 100%.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient(to bottom, {} 0%, {} 60%, {} 100%)",
            self.top, self.mid, self.bottom
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub index: usize,
    pub name: &'static str,
    pub file: &'static str,
    pub gradient: Gradient,
}

impl Track {
    /// Path of the audio resource relative to the page.
    pub fn audio_path(&self) -> String {
        format!("{}/{}", AUDIO_DIR, self.file)
    }
}

pub const AUDIO_DIR: &str = "./assets/audio";
pub const PLAY_ICON: &str = "./assets/play.svg";
pub const PAUSE_ICON: &str = "./assets/pause.svg";
pub const MODEL_PATH: &str = "./assets/dragon.glb";

pub const TRACKS: &[Track] = &[
    Track {
        index: 0,
        name: "Light of the Seven",
        file: "lightOfSeven.mp3",
        gradient: Gradient::new("#000000", "#4A306B", "#8B7CA3"),
    },
    Track {
        index: 1,
        name: "Main Title",
        file: "mainTitle.mp3",
        gradient: Gradient::new("#000000", "#1E3A5F", "#6B8CAF"),
    },
    Track {
        index: 2,
        name: "Mother of Dragons",
        file: "motherOfDragons.mp3",
        gradient: Gradient::new("#000000", "#1F4A32", "#7A9B8A"),
    },
    Track {
        index: 3,
        name: "The Rains of Castamere",
        file: "rainsOfCastamere.mp3",
        gradient: Gradient::new("#000000", "#5A252A", "#A67B7F"),
    },
    Track {
        index: 4,
        name: "The King's Arrival",
        file: "theKingsArrival.mp3",
        gradient: Gradient::new("#000000", "#6a5623ff", "#C4B089"),
    },
    Track {
        index: 5,
        name: "The Winds of Winter",
        file: "windsOfWinter.mp3",
        gradient: Gradient::new("#000000", "#4A6B7C", "#B8CDD6"),
    },
    Track {
        index: 6,
        name: "Winter Has Come",
        file: "winterHasCome.mp3",
        gradient: Gradient::new("#000000", "#2F4F5F", "#9BB0BF"),
    },
];

#[inline]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

#[inline]
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

/// Icon source and alt text for the play/pause button.
#[inline]
pub fn play_pause_icon(playing: bool) -> (&'static str, &'static str) {
    if playing {
        (PAUSE_ICON, "Pause")
    } else {
        (PLAY_ICON, "Play")
    }
}
