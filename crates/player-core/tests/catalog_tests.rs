// Host-side tests for the track catalog and its gradients.

use player_core::{next_index, play_pause_icon, previous_index, Gradient, MODEL_PATH, TRACKS};

#[test]
fn catalog_has_seven_tracks_indexed_by_position() {
    assert_eq!(TRACKS.len(), 7);
    for (i, t) in TRACKS.iter().enumerate() {
        assert_eq!(t.index, i);
        assert!(t.file.ends_with(".mp3"));
        assert_eq!(t.gradient.top, "#000000");
    }
    assert_eq!(TRACKS[0].name, "Light of the Seven");
    assert_eq!(TRACKS[6].name, "Winter Has Come");
}

#[test]
fn gradient_css_uses_three_stops() {
    let g = Gradient::new("#000000", "#4A306B", "#8B7CA3");
    assert_eq!(
        g.css(),
        "linear-gradient(to bottom, #000000 0%, #4A306B 60%, #8B7CA3 100%)"
    );
}

#[test]
fn audio_paths_live_under_assets() {
    assert_eq!(
        TRACKS[3].audio_path(),
        "./assets/audio/rainsOfCastamere.mp3"
    );
    assert_eq!(MODEL_PATH, "./assets/dragon.glb");
}

#[test]
fn index_helpers_wrap_and_tolerate_empty() {
    assert_eq!(next_index(6, 7), 0);
    assert_eq!(previous_index(0, 7), 6);
    assert_eq!(next_index(2, 7), 3);
    assert_eq!(previous_index(2, 7), 1);
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(previous_index(0, 0), 0);
}

#[test]
fn icon_swaps_with_playing_state() {
    assert_eq!(play_pause_icon(true), ("./assets/pause.svg", "Pause"));
    assert_eq!(play_pause_icon(false), ("./assets/play.svg", "Play"));
}
