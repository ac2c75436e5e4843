//! Playback controller: owns the single playback session, runs crossfades
//! between tracks and keeps the page background and track view in sync.
//!
//! The controller is frame-driven. Operations like [`PlaybackController::load_track`]
//! change state synchronously and queue volume ramps and deferred background
//! transitions; [`PlaybackController::tick`] advances them by the frame delta.

use crate::catalog::{next_index, previous_index, Gradient, Track, TRACKS};
use crate::error::{PlayerError, Result};
use crate::fade::{FadeConfig, FadeHandle, VolumeRamp};
use crate::schedule::Timeline;
use smallvec::SmallVec;
use std::time::Duration;

/// A looping, volume-controllable sound source.
pub trait AudioOutput {
    fn set_looping(&mut self, looping: bool);
    fn volume(&self) -> f32;
    /// Implementations clamp to [0, 1].
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

/// Creates an [`AudioOutput`] for a track's audio resource.
pub trait AudioSource {
    type Output: AudioOutput;
    fn open(&mut self, track: &Track) -> Result<Self::Output>;
}

/// Page-level gradient background.
pub trait Backdrop {
    fn set_gradient(&mut self, gradient: &Gradient);
    /// Fade an overlay with `gradient` in over `duration`, then commit it.
    fn crossfade_to(&mut self, gradient: &Gradient, duration: Duration);
}

/// Track name label and play/pause button.
pub trait TrackView {
    fn show_track(&mut self, track: &Track);
    fn show_playing(&mut self, playing: bool);
}

/// UI commands, one per button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    TogglePlay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Empty,
    Fading,
    Playing,
    Paused,
}

/// Cancel handles for the ramps an operation started.
#[derive(Clone, Debug, Default)]
pub struct Transition {
    pub fade_out: Option<FadeHandle>,
    pub fade_in: Option<FadeHandle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChannelId(u64);

struct Channel<A> {
    id: ChannelId,
    output: A,
}

struct ActiveRamp {
    channel: ChannelId,
    ramp: VolumeRamp,
    retire_when_done: bool,
}

#[derive(Clone, Copy, Debug)]
enum Deferred {
    BackgroundCrossfade { index: usize, duration: Duration },
}

/// Current track index, the live output (if any) and the playing flag.
pub struct PlaybackSession<A> {
    index: usize,
    current: Option<Channel<A>>,
    playing: bool,
}

impl<A> PlaybackSession<A> {
    fn new(index: usize) -> Self {
        Self {
            index,
            current: None,
            playing: false,
        }
    }
}

pub struct PlaybackController<S: AudioSource, B: Backdrop, V: TrackView> {
    catalog: &'static [Track],
    config: FadeConfig,
    source: S,
    backdrop: B,
    view: V,
    session: PlaybackSession<S::Output>,
    // outputs fading out after a switch; at most two during normal use
    retiring: SmallVec<[Channel<S::Output>; 2]>,
    ramps: Vec<ActiveRamp>,
    timeline: Timeline<Deferred>,
    next_channel: u64,
}

impl<S: AudioSource, B: Backdrop, V: TrackView> PlaybackController<S, B, V> {
    pub fn new(source: S, backdrop: B, view: V) -> Self {
        Self::with_catalog(TRACKS, FadeConfig::default(), source, backdrop, view)
    }

    /// Build a controller and present the first track (gradient, name and a
    /// "play" button) without loading any audio.
    ///
    /// `catalog` must not be empty.
    pub fn with_catalog(
        catalog: &'static [Track],
        config: FadeConfig,
        source: S,
        backdrop: B,
        view: V,
    ) -> Self {
        let mut controller = Self {
            catalog,
            config,
            source,
            backdrop,
            view,
            session: PlaybackSession::new(0),
            retiring: SmallVec::new(),
            ramps: Vec::new(),
            timeline: Timeline::new(),
            next_channel: 0,
        };
        if let Some(first) = catalog.first() {
            controller.backdrop.set_gradient(&first.gradient);
            controller.view.show_track(first);
        }
        controller.view.show_playing(false);
        controller
    }

    pub fn catalog(&self) -> &'static [Track] {
        self.catalog
    }

    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.session.index
    }

    pub fn current_track(&self) -> &Track {
        &self.catalog[self.session.index]
    }

    pub fn is_playing(&self) -> bool {
        self.session.playing
    }

    pub fn has_output(&self) -> bool {
        self.session.current.is_some()
    }

    pub fn current_volume(&self) -> Option<f32> {
        self.session.current.as_ref().map(|c| c.output.volume())
    }

    pub fn retiring_count(&self) -> usize {
        self.retiring.len()
    }

    pub fn active_fades(&self) -> usize {
        self.ramps.len()
    }

    pub fn pending_background_transitions(&self) -> usize {
        self.timeline.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn backdrop(&self) -> &B {
        &self.backdrop
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.session.current, self.session.playing) {
            (None, true) if !self.retiring.is_empty() => PlaybackState::Fading,
            (None, _) => PlaybackState::Empty,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) if !self.ramps.is_empty() || !self.retiring.is_empty() => {
                PlaybackState::Fading
            }
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Transition> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::TogglePlay => self.toggle_play_pause(),
        }
    }

    pub fn next(&mut self) -> Result<Transition> {
        let index = next_index(self.session.index, self.catalog.len());
        self.load_track(index, self.session.playing)
    }

    pub fn previous(&mut self) -> Result<Transition> {
        let index = previous_index(self.session.index, self.catalog.len());
        self.load_track(index, self.session.playing)
    }

    /// Switch to `index`. While playing this crossfades the old output into
    /// the new one and schedules the background transition at the midpoint;
    /// otherwise the switch and the gradient change are immediate.
    pub fn load_track(&mut self, index: usize, auto_play: bool) -> Result<Transition> {
        let track = *self
            .catalog
            .get(index)
            .ok_or(PlayerError::TrackOutOfRange {
                index,
                len: self.catalog.len(),
            })?;

        self.session.index = index;
        self.view.show_track(&track);

        let mut transition = Transition::default();
        let crossfade = self.session.playing && self.session.current.is_some();
        if crossfade {
            let duration = self.config.crossfade;
            log::info!("[player] crossfade to #{} '{}'", index, track.name);
            if let Some(old) = self.session.current.take() {
                // the outgoing fade-in stops where the fade-out starts
                self.ramps.retain(|r| r.channel != old.id);
                let ramp =
                    VolumeRamp::fade_out(old.output.volume(), duration, self.config.steps);
                transition.fade_out = Some(ramp.handle());
                self.ramps.push(ActiveRamp {
                    channel: old.id,
                    ramp,
                    retire_when_done: true,
                });
                self.retiring.push(old);
            }
            self.timeline.schedule(
                duration / 2,
                Deferred::BackgroundCrossfade {
                    index,
                    duration: duration / 2,
                },
            );
            transition.fade_in = self.start_track(&track, auto_play, duration)?;
        } else {
            log::info!("[player] load #{} '{}'", index, track.name);
            if let Some(mut old) = self.session.current.take() {
                old.output.pause();
            }
            self.backdrop.set_gradient(&track.gradient);
            transition.fade_in = self.start_track(&track, auto_play, self.config.first_play)?;
        }
        Ok(transition)
    }

    /// Start from the current index if nothing is loaded, pause immediately
    /// when playing, or resume with a fade-in when paused.
    pub fn toggle_play_pause(&mut self) -> Result<Transition> {
        let Some(current) = self.session.current.as_mut() else {
            return self.load_track(self.session.index, true);
        };
        if self.session.playing {
            let id = current.id;
            current.output.pause();
            for mut old in self.retiring.drain(..) {
                old.output.pause();
            }
            self.ramps.retain(|r| r.channel == id);
            self.set_playing(false);
            return Ok(Transition::default());
        }
        let id = current.id;
        if let Err(e) = current.output.play() {
            log::warn!("[player] resume rejected: {}", e);
        }
        current.output.set_volume(0.0);
        let handle = self.begin_fade_in(id, self.config.resume);
        self.set_playing(true);
        Ok(Transition {
            fade_out: None,
            fade_in: Some(handle),
        })
    }

    /// Advance ramps and deferred background transitions by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let Self {
            session,
            retiring,
            ramps,
            ..
        } = self;
        let mut retire: SmallVec<[ChannelId; 2]> = SmallVec::new();
        ramps.retain_mut(|active| {
            let Some(output) = find_output(&mut session.current, &mut *retiring, active.channel)
            else {
                // output was discarded while its ramp was still running
                return false;
            };
            if let Some(volume) = active.ramp.advance(dt) {
                output.set_volume(volume);
            }
            if active.ramp.is_finished() {
                log::debug!(
                    "[player] {:?} finished after {} steps",
                    active.ramp.direction(),
                    active.ramp.steps_taken()
                );
                if active.retire_when_done {
                    retire.push(active.channel);
                }
                return false;
            }
            true
        });
        for id in retire {
            if let Some(pos) = self.retiring.iter().position(|c| c.id == id) {
                let mut old = self.retiring.remove(pos);
                old.output.pause();
            }
        }

        for deferred in self.timeline.advance(dt) {
            match deferred {
                Deferred::BackgroundCrossfade { index, duration } => {
                    if let Some(track) = self.catalog.get(index) {
                        self.backdrop.crossfade_to(&track.gradient, duration);
                    }
                }
            }
        }
    }

    fn start_track(
        &mut self,
        track: &Track,
        auto_play: bool,
        fade: Duration,
    ) -> Result<Option<FadeHandle>> {
        let mut output = match self.source.open(track) {
            Ok(o) => o,
            Err(e) => {
                self.set_playing(false);
                return Err(e);
            }
        };
        output.set_looping(true);
        output.set_volume(0.0);
        let id = self.alloc_channel();
        let mut handle = None;
        if auto_play {
            if let Err(e) = output.play() {
                log::warn!("[player] play rejected for '{}': {}", track.name, e);
            }
            handle = Some(self.begin_fade_in(id, fade));
        }
        self.session.current = Some(Channel { id, output });
        self.set_playing(auto_play);
        Ok(handle)
    }

    fn begin_fade_in(&mut self, channel: ChannelId, duration: Duration) -> FadeHandle {
        // a resume mid fade-in replaces the earlier ramp
        self.ramps.retain(|r| r.channel != channel);
        let ramp = VolumeRamp::fade_in(duration, self.config.steps, self.config.ceiling);
        let handle = ramp.handle();
        self.ramps.push(ActiveRamp {
            channel,
            ramp,
            retire_when_done: false,
        });
        handle
    }

    fn set_playing(&mut self, playing: bool) {
        self.session.playing = playing;
        self.view.show_playing(playing);
    }

    fn alloc_channel(&mut self) -> ChannelId {
        self.next_channel += 1;
        ChannelId(self.next_channel)
    }
}

fn find_output<'a, A>(
    current: &'a mut Option<Channel<A>>,
    retiring: &'a mut SmallVec<[Channel<A>; 2]>,
    id: ChannelId,
) -> Option<&'a mut A> {
    if let Some(c) = current.as_mut().filter(|c| c.id == id) {
        return Some(&mut c.output);
    }
    retiring
        .iter_mut()
        .find(|c| c.id == id)
        .map(|c| &mut c.output)
}
