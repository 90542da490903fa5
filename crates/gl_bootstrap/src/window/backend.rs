//! Backend-agnostic window trait
//!
//! This module defines the trait every window backend implements. It covers
//! exactly what the frame loop and teardown need: draining input, presenting
//! a frame and releasing the context ahead of window destruction.

use bitflags::bitflags;

bitflags! {
    /// Surface flags requested at window creation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Request an OpenGL-capable surface and context
        const OPENGL = 1 << 0;
        /// Allow the user to resize the window
        const RESIZABLE = 1 << 1;
        /// Synchronize buffer swaps with the display refresh
        const VSYNC = 1 << 2;
    }
}

/// Keys the frame loop distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Any other key
    Other,
}

/// Input events yielded by [`WindowBackend::poll_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window
    Quit,
    /// A key went down
    KeyPressed(KeyCode),
    /// Anything the loop does not react to
    Other,
}

/// Window backend contract
///
/// Window operations happen on the main thread, so no `Send` bound.
pub trait WindowBackend {
    /// Drain every pending event without blocking
    ///
    /// Returns an empty vector when the queue is empty.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Detach the graphics context from the calling thread
    ///
    /// Called during teardown before the window is destroyed. Must be safe to
    /// call more than once.
    fn release_context(&mut self);

    /// Current client area size in pixels
    fn size(&self) -> (u32, u32);

    /// Window title
    fn title(&self) -> &str;
}
