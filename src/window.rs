use std::ffi::c_void;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::config::WindowConfig;
use crate::error::SetupError;
use crate::runner::FrameEvent;

/// The OS window plus everything needed to drive its GL context.
///
/// Field order matters for drop: context before window before the SDL
/// handles.
pub struct GlWindow {
    gl_ctx: GLContext,
    window: Window,
    event_pump: EventPump,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl GlWindow {
    /// Creates the window and a core-profile context of the requested
    /// version, then loads the GL function pointers through SDL.
    ///
    /// Any failure here is fatal to the demos; nothing GPU-side exists yet
    /// to clean up.
    pub fn new(config: &WindowConfig) -> Result<Self, SetupError> {
        let sdl = sdl2::init().map_err(SetupError::Sdl)?;
        let video = sdl.video().map_err(SetupError::Sdl)?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_major_version(config.gl_major);
        gl_attr.set_context_minor_version(config.gl_minor);

        let window = video
            .window(&config.title, config.width, config.height)
            .opengl()
            .position_centered()
            .resizable()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(SetupError::Sdl)?;
        gl::load_with(|s| video.gl_get_proc_address(s) as *const c_void);
        // gl::load_with itself never reports failure; probe entry points the
        // frame loop cannot run without.
        if !gl::ClearColor::is_loaded() || !gl::Viewport::is_loaded() {
            return Err(SetupError::LoaderFailed);
        }

        let event_pump = sdl.event_pump().map_err(SetupError::Sdl)?;

        log::debug!(
            "created {}x{} window with GL {}.{} core context",
            config.width,
            config.height,
            config.gl_major,
            config.gl_minor
        );

        Ok(Self {
            gl_ctx,
            window,
            event_pump,
            _video: video,
            _sdl: sdl,
        })
    }

    /// The live context, for resource setup that must assert currency.
    pub fn gl_context(&self) -> &GLContext {
        &self.gl_ctx
    }

    /// True while the cancel key (Escape) is held down.
    pub fn cancel_key_pressed(&self) -> bool {
        self.event_pump
            .keyboard_state()
            .is_scancode_pressed(Scancode::Escape)
    }

    /// Presents the rendered frame.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    /// Drains pending window/input events into plain frame-loop data.
    pub fn pump_events(&mut self) -> Vec<FrameEvent> {
        let main_id = self.window.id();
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(FrameEvent::CloseRequested),
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } if window_id == main_id => {
                    events.push(FrameEvent::Resized(
                        width.try_into().unwrap_or(0),
                        height.try_into().unwrap_or(0),
                    ));
                }
                _ => {}
            }
        }
        events
    }

    /// Current window size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }
}
