//! Platform abstraction layer
//!
//! The host shell (window, input devices, frame clock) is queried through
//! [`Platform`] once per frame. Button queries are edge-triggered except
//! thrust, which is level-triggered.

use glam::Vec2;

use crate::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::sim::TickInput;

/// Per-frame queries answered by the host
pub trait Platform {
    /// Current screen size in world units
    fn screen_size(&self) -> Vec2;
    /// Pointer position in world units
    fn pointer_position(&self) -> Vec2;
    fn thrust_held(&self) -> bool;
    fn fire_pressed(&self) -> bool;
    fn pause_pressed(&self) -> bool;
    fn restart_pressed(&self) -> bool;
    fn slow_motion_toggle_pressed(&self) -> bool;
    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;

    /// The simulation's share of this frame's input
    fn tick_input(&self) -> TickInput {
        TickInput {
            pointer: self.pointer_position(),
            thrust: self.thrust_held(),
            fire: self.fire_pressed(),
        }
    }
}

/// Buttons pressed or held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub thrust: bool,
    pub fire: bool,
    pub pause: bool,
    pub restart: bool,
    pub slow_motion: bool,
}

/// A platform driven by code instead of devices
///
/// Used by the headless runner and by tests: set the frame's input, run the
/// frame, repeat.
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    screen: Vec2,
    frame_time: f32,
    input: FrameInput,
}

impl ScriptedPlatform {
    pub fn new(screen: Vec2, frame_time: f32) -> Self {
        Self {
            screen,
            frame_time,
            input: FrameInput::default(),
        }
    }

    /// Replace the input reported for the next frame
    pub fn set_input(&mut self, input: FrameInput) {
        self.input = input;
    }

    pub fn input(&self) -> FrameInput {
        self.input
    }

    pub fn set_screen_size(&mut self, screen: Vec2) {
        self.screen = screen;
    }

    pub fn set_frame_time(&mut self, frame_time: f32) {
        self.frame_time = frame_time;
    }
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self::new(
            Vec2::new(DEFAULT_SCREEN_WIDTH as f32, DEFAULT_SCREEN_HEIGHT as f32),
            1.0 / 60.0,
        )
    }
}

impl Platform for ScriptedPlatform {
    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn pointer_position(&self) -> Vec2 {
        self.input.pointer
    }

    fn thrust_held(&self) -> bool {
        self.input.thrust
    }

    fn fire_pressed(&self) -> bool {
        self.input.fire
    }

    fn pause_pressed(&self) -> bool {
        self.input.pause
    }

    fn restart_pressed(&self) -> bool {
        self.input.restart
    }

    fn slow_motion_toggle_pressed(&self) -> bool {
        self.input.slow_motion
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }
}
