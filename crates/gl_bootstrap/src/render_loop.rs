//! Poll-then-draw frame loop
//!
//! Each iteration drains all pending input, then (if nothing asked to quit)
//! updates the animation, clears, issues one draw call and presents. Buffers
//! are swapped once per frame, after the event queue is empty.
//!
//! No vertex buffer is ever bound: the vertex shaders place their vertices
//! from constants and `gl_VertexID`, and the bound vertex array stays empty.

use crate::animation::Offset;
use crate::config::{DemoConfig, DemoVariant};
use crate::gpu::{DrawMode, GraphicsApi, ProgramHandle};
use crate::window::{InputEvent, KeyCode, WindowBackend};

/// Uniform the animated triangle reads its horizontal offset from
pub const OFFSET_UNIFORM: &str = "offset";

/// Summary of a finished loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames presented
    pub frames: u64,
}

/// Frame loop state
#[derive(Debug, Clone)]
pub struct RenderLoop {
    variant: DemoVariant,
    animation: Option<Offset>,
    running: bool,
    frames: u64,
}

impl RenderLoop {
    /// Create a loop for the configured demo
    pub fn new(config: &DemoConfig) -> Self {
        let animation = match config.variant {
            DemoVariant::Point => None,
            DemoVariant::AnimatedTriangle => Some(Offset::new(config.step)),
        };
        Self {
            variant: config.variant,
            animation,
            running: true,
            frames: 0,
        }
    }

    /// Whether the loop keeps going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current animation offset, if the variant animates
    pub fn offset(&self) -> Option<f32> {
        self.animation.as_ref().map(Offset::value)
    }

    /// React to a batch of input events
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyPressed(KeyCode::Escape) => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                _ => {}
            }
        }
    }

    /// Run one iteration; returns whether the loop should continue
    pub fn iterate(
        &mut self,
        window: &mut impl WindowBackend,
        api: &impl GraphicsApi,
        program: ProgramHandle,
    ) -> bool {
        let events = window.poll_events();
        self.handle_events(&events);

        if self.running {
            self.draw_frame(api, program);
            window.swap_buffers();
            self.frames += 1;
        }
        self.running
    }

    /// Loop until quit or Escape
    pub fn run(
        &mut self,
        window: &mut impl WindowBackend,
        api: &impl GraphicsApi,
        program: ProgramHandle,
    ) -> FrameStats {
        log::info!("Starting main loop...");
        while self.iterate(window, api, program) {}
        log::info!("Main loop finished after {} frames", self.frames);
        FrameStats {
            frames: self.frames,
        }
    }

    fn draw_frame(&mut self, api: &impl GraphicsApi, program: ProgramHandle) {
        if let Some(animation) = self.animation.as_mut() {
            let x = animation.advance();
            // Looked up every frame, not cached
            let location = api.uniform_location(program, OFFSET_UNIFORM);
            api.program_uniform_1f(program, location, x);
        }

        api.clear_color_buffer();
        match self.variant {
            DemoVariant::Point => api.draw_arrays(DrawMode::Points, 0, 1),
            DemoVariant::AnimatedTriangle => api.draw_arrays(DrawMode::Triangles, 0, 3),
        }
    }
}
