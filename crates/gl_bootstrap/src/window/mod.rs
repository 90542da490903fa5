//! Window management subsystem
//!
//! The render loop and teardown only ever see the [`WindowBackend`] trait.
//! [`GlfwWindow`] is the one real backend; tests substitute a scripted one.
//!
//! # Module Organization
//!
//! - **`backend`**: the trait, the input events it yields and the surface flags
//! - **`glfw_window`**: GLFW window + OpenGL context

pub mod backend;
pub mod glfw_window;

pub use backend::{InputEvent, KeyCode, WindowBackend, WindowFlags};
pub use glfw_window::GlfwWindow;
