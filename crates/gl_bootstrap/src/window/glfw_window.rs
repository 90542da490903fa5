//! Window management using GLFW
//!
//! Creates the window together with its OpenGL context. GLFW ties the two
//! together, so a failed context request shows up as a missing window.

use crate::config::ContextConfig;
use crate::error::{BootstrapError, BootstrapResult};
use crate::window::backend::{InputEvent, KeyCode, WindowBackend, WindowFlags};
use glfw::{Action, Context, Key, WindowEvent};
use std::ffi::c_void;

/// GLFW window wrapper owning the OpenGL context
///
/// Field order matters: the window is destroyed before the last `Glfw`
/// handle drops and terminates the library.
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    glfw: glfw::Glfw,
    title: String,
    context_current: bool,
}

impl GlfwWindow {
    /// Initialize GLFW and create a window with a current OpenGL context
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
        context: &ContextConfig,
    ) -> BootstrapResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| BootstrapError::VideoInitFailed(format!("{e:?}")))?;

        if !flags.contains(WindowFlags::OPENGL) {
            log::warn!("Window flags did not request an OpenGL surface; requesting one anyway");
        }

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::Resizable(flags.contains(WindowFlags::RESIZABLE)));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                BootstrapError::WindowCreationFailed(format!(
                    "{width}x{height} window with an OpenGL {}.{} context",
                    context.major, context.minor
                ))
            })?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);

        if flags.contains(WindowFlags::VSYNC) {
            glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
        }

        log::info!("Created {width}x{height} window \"{title}\"");

        Ok(Self {
            window,
            events,
            glfw,
            title: title.to_string(),
            context_current: true,
        })
    }

    /// Look up an OpenGL entry point in the current context
    pub fn proc_address(&mut self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const c_void
    }
}

fn translate(event: WindowEvent) -> InputEvent {
    match event {
        WindowEvent::Close => InputEvent::Quit,
        WindowEvent::Key(Key::Escape, _, Action::Press, _) => InputEvent::KeyPressed(KeyCode::Escape),
        WindowEvent::Key(_, _, Action::Press, _) => InputEvent::KeyPressed(KeyCode::Other),
        _ => InputEvent::Other,
    }
}

impl WindowBackend for GlfwWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .map(|(_, event)| translate(event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn release_context(&mut self) {
        if self.context_current {
            glfw::make_context_current(None);
            self.context_current = false;
            log::debug!("OpenGL context released");
        }
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (u32::try_from(width).unwrap_or(0), u32::try_from(height).unwrap_or(0))
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        self.release_context();
        log::debug!("Destroying window \"{}\"", self.title);
    }
}
