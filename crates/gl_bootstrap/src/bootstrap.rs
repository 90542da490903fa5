//! Render bootstrap: window, context, shader program and frame loop
//!
//! [`RenderBootstrap`] owns every resource the demo acquires. Dropping it
//! tears them down in a fixed order on every exit path:
//!
//! 1. vertex array, program and shader objects are deleted
//! 2. the OpenGL context is released
//! 3. the window is destroyed (GLFW terminates with its last handle)

use crate::config::{ContextConfig, DemoConfig, ShaderPolicy, WindowConfig};
use crate::error::{BootstrapError, BootstrapResult};
use crate::gpu::{build_program, BuiltProgram, GlApi, GraphicsApi, ProgramHandle, ShaderSources, VertexArrayHandle};
use crate::render_loop::{FrameStats, RenderLoop};
use crate::window::{GlfwWindow, WindowBackend};

/// Owner of the window, its context and the GPU objects built on it
pub struct RenderBootstrap<W: WindowBackend = GlfwWindow, G: GraphicsApi = GlApi> {
    gpu: G,
    program: Option<BuiltProgram>,
    vertex_array: Option<VertexArrayHandle>,
    // Declared last so it is dropped after the GPU objects are released
    window: W,
}

impl RenderBootstrap<GlfwWindow, GlApi> {
    /// Create the window and an OpenGL context of the requested version
    ///
    /// # Errors
    /// `VideoInitFailed`, `WindowCreationFailed`, `LoaderFailed` or
    /// `ContextCreationFailed`. Anything acquired before the failure is
    /// released before returning.
    pub fn init(window_config: &WindowConfig, context: &ContextConfig) -> BootstrapResult<Self> {
        log::info!("Initializing OpenGL {}.{} bootstrap...", context.major, context.minor);

        let mut window = GlfwWindow::new(
            &window_config.title,
            window_config.width,
            window_config.height,
            window_config.flags(),
            context,
        )?;
        let gpu = GlApi::load(&mut window, context)?;

        Ok(Self::from_parts(window, gpu))
    }
}

impl<W: WindowBackend, G: GraphicsApi> RenderBootstrap<W, G> {
    /// Assemble a bootstrap from an existing window and graphics API
    pub fn from_parts(window: W, gpu: G) -> Self {
        Self {
            gpu,
            program: None,
            vertex_array: None,
            window,
        }
    }

    /// Compile and link the shader program
    ///
    /// Replaces (and deletes) any previously built program. Under
    /// [`ShaderPolicy::Lenient`] this returns a handle even when compilation
    /// or linking failed.
    pub fn create_shader_program(
        &mut self,
        sources: &ShaderSources,
        policy: ShaderPolicy,
    ) -> BootstrapResult<ProgramHandle> {
        if let Some(previous) = self.program.take() {
            previous.release(&self.gpu);
        }

        let built = build_program(&self.gpu, sources, policy)?;
        self.program = Some(built);
        Ok(built.program)
    }

    /// Create and bind the (empty) vertex array and make the program current
    pub fn prepare_pipeline(&mut self) -> BootstrapResult<VertexArrayHandle> {
        let program = self.program_handle()?;

        let vao = match self.vertex_array {
            Some(vao) => vao,
            None => {
                let vao = self.gpu.gen_vertex_array();
                self.vertex_array = Some(vao);
                vao
            }
        };
        self.gpu.bind_vertex_array(vao);
        self.gpu.use_program(program);

        Ok(vao)
    }

    /// Run the frame loop until quit or Escape
    ///
    /// # Errors
    /// `Config` when the demo step is unusable, `MissingProgram` when no
    /// program was built.
    pub fn run(&mut self, demo: &DemoConfig) -> BootstrapResult<FrameStats> {
        demo.validate()?;
        let program = self.program_handle()?;
        let (width, height) = self.window.size();
        log::info!(
            "Running {:?} demo in \"{}\" ({width}x{height})",
            demo.variant,
            self.window.title()
        );

        let stats = RenderLoop::new(demo).run(&mut self.window, &self.gpu, program);
        Ok(stats)
    }

    /// The built program, if any
    pub fn program(&self) -> Option<ProgramHandle> {
        self.program.map(|built| built.program)
    }

    /// The window backend
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The graphics API
    pub fn gpu(&self) -> &G {
        &self.gpu
    }

    fn program_handle(&self) -> BootstrapResult<ProgramHandle> {
        self.program().ok_or(BootstrapError::MissingProgram)
    }
}

impl<W: WindowBackend, G: GraphicsApi> Drop for RenderBootstrap<W, G> {
    fn drop(&mut self) {
        if let Some(vao) = self.vertex_array.take() {
            self.gpu.delete_vertex_array(vao);
        }
        if let Some(program) = self.program.take() {
            program.release(&self.gpu);
        }
        self.window.release_context();
        log::info!("Bootstrap shutdown complete");
    }
}
