//! # GL Bootstrap
//!
//! Minimal OpenGL 4.3 bootstrap: one window, one context, one shader program
//! and a poll-then-draw frame loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BootstrapConfig::default();
//!     let mut bootstrap = RenderBootstrap::init(&config.window, &config.context)?;
//!     let sources = ShaderSources::resolve(&config.shaders, config.demo.variant)?;
//!     bootstrap.create_shader_program(&sources, config.shaders.policy)?;
//!     bootstrap.prepare_pipeline()?;
//!     let stats = bootstrap.run(&config.demo)?;
//!     println!("Presented {} frames", stats.frames);
//!     Ok(())
//! }
//! ```
//!
//! Teardown happens when the [`RenderBootstrap`] is dropped, on every exit
//! path.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod animation;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod foundation;
pub mod gpu;
pub mod render_loop;
pub mod window;

#[cfg(test)]
pub(crate) mod mock;

pub use bootstrap::RenderBootstrap;
pub use error::{BootstrapError, BootstrapResult};

/// Common imports for bootstrap users
pub mod prelude {
    pub use crate::{
        animation::Offset,
        bootstrap::RenderBootstrap,
        config::{
            BootstrapConfig, Config, ConfigError, ContextConfig, DemoConfig, DemoVariant,
            ShaderConfig, ShaderPolicy, ShaderSourceConfig, WindowConfig,
        },
        error::{BootstrapError, BootstrapResult},
        gpu::{GraphicsApi, ProgramHandle, ShaderSources, ShaderStage},
        render_loop::{FrameStats, RenderLoop},
        window::{InputEvent, KeyCode, WindowBackend, WindowFlags},
    };
}
