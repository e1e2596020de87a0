//! Pointer and keyboard state, folded into one `InputSample` per frame

use game_core::{InputSample, LaunchTrigger};

/// Latest input state as reported by the page's event handlers.
/// The launch trigger is edge-like and consumed by the next sample;
/// everything else is level state read idempotently.
pub struct InputState {
    pointer_y: f32,
    up_held: bool,
    down_held: bool,
    launch_queued: bool,
}

impl InputState {
    pub fn new(pointer_y: f32) -> Self {
        Self {
            pointer_y,
            up_held: false,
            down_held: false,
            launch_queued: false,
        }
    }

    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = y;
    }

    pub fn pointer_pressed(&mut self, trigger: LaunchTrigger) {
        if trigger == LaunchTrigger::PointerPress {
            self.launch_queued = true;
        }
    }

    pub fn key_down(&mut self, key: &str, trigger: LaunchTrigger) {
        match key {
            "ArrowUp" => self.up_held = true,
            "ArrowDown" => self.down_held = true,
            "Enter" if trigger == LaunchTrigger::EnterKey => self.launch_queued = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowUp" => self.up_held = false,
            "ArrowDown" => self.down_held = false,
            _ => {}
        }
    }

    /// Snapshot the state for this frame, consuming any queued launch
    pub fn sample(&mut self) -> InputSample {
        let launch = self.launch_queued;
        self.launch_queued = false;
        InputSample {
            pointer_y: self.pointer_y,
            up_held: self.up_held,
            down_held: self.down_held,
            launch,
        }
    }
}
