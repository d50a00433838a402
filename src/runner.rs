//! The frame loop both demos run: poll the cancel key, clear, draw, present,
//! pump events, until a close request is observed.

use crate::geometry::CLEAR_COLOR;
use crate::gl_wrappers::{clear_color, set_viewport};
use crate::window::GlWindow;

/// Close-signal state for one run of the loop. `CloseRequested` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    CloseRequested,
}

/// Plain-data notifications surfaced by the event pump each iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    /// Window-manager close button (the cancel key is polled separately).
    CloseRequested,
    /// New window size in pixels.
    Resized(u32, u32),
}

/// Book-keeping for the loop: the close-signal state machine plus the
/// current full-window viewport.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    viewport: (u32, u32),
}

impl FrameLoop {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: LoopState::Running,
            viewport: (width, height),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Signals the terminal state. Idempotent; a held cancel key may signal
    /// this every frame.
    pub fn request_close(&mut self) {
        self.state = LoopState::CloseRequested;
    }

    /// Viewport the next clear/draw is scoped to: [0,0] x [width,height].
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Applies one pumped event. Returns true if the viewport changed.
    pub fn handle_event(&mut self, event: FrameEvent) -> bool {
        match event {
            FrameEvent::CloseRequested => {
                self.request_close();
                false
            }
            FrameEvent::Resized(width, height) => {
                self.viewport = (width, height);
                true
            }
        }
    }
}

/// Runs the clear/draw/present loop until a close request is observed.
///
/// `draw` runs once per iteration between the clear and the buffer swap;
/// the blank demo passes a no-op. Once an iteration has started it always
/// runs to completion; the state is only consulted at the top of the loop,
/// so no draw or present happens after the terminal state is seen.
pub fn run_frame_loop(window: &mut GlWindow, mut draw: impl FnMut()) {
    let (width, height) = window.size();
    let mut frame = FrameLoop::new(width, height);
    set_viewport(width, height);

    while frame.is_running() {
        if window.cancel_key_pressed() {
            frame.request_close();
        }

        clear_color(CLEAR_COLOR);
        draw();
        window.swap();

        for event in window.pump_events() {
            if frame.handle_event(event) {
                let (width, height) = frame.viewport();
                set_viewport(width, height);
            }
        }
    }
    log::debug!("close requested, leaving frame loop");
}
