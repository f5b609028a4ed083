//! Sound effect routing
//!
//! The simulation raises `GameEvent`s; the audio manager turns the audible
//! ones into `SoundEffect`s at the right volume and hands them to whatever
//! backend the host provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    LaserFire,
    /// Asteroid shot
    Explosion,
}

impl SoundEffect {
    /// Volume the effect is mixed at before master/sfx scaling
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::LaserFire => 0.5,
            SoundEffect::Explosion => 0.5,
        }
    }

    /// The effect a game event should trigger, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BulletFired => Some(SoundEffect::LaserFire),
            GameEvent::AsteroidDestroyed { .. } => Some(SoundEffect::Explosion),
            GameEvent::PlayerDestroyed => None,
        }
    }
}

/// Host audio device
pub trait SoundBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend for hosts without audio
#[derive(Debug, Default)]
pub struct SilentBackend;

impl SoundBackend for SilentBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("(silent) {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: SoundBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play whatever a batch of game events calls for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
