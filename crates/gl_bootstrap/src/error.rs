//! Bootstrap error taxonomy
//!
//! Only the platform errors (video, window, context, loader) are fatal in the
//! default lenient shader policy. Shader errors surface here only when the
//! caller asks for [`ShaderPolicy::Strict`](crate::config::ShaderPolicy::Strict).

use crate::config::ConfigError;
use crate::gpu::ShaderStage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing up or running the render bootstrap
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The platform video subsystem could not start
    #[error("Failed to init video subsystem: {0}")]
    VideoInitFailed(String),

    /// The platform returned no window handle
    #[error("Could not create window: {0}")]
    WindowCreationFailed(String),

    /// The context exists but does not provide the requested version
    #[error("OpenGL {}.{} context requested, got {}.{}", .requested.0, .requested.1, .actual.0, .actual.1)]
    ContextCreationFailed {
        /// Requested (major, minor)
        requested: (u32, u32),
        /// Version reported by the driver
        actual: (u32, u32),
    },

    /// A required GL entry point could not be loaded
    #[error("OpenGL function loader failed: {0} is not loaded")]
    LoaderFailed(&'static str),

    /// A shader source file could not be read
    #[error("Failed to read shader source {path:?}: {source}")]
    ShaderSourceRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A shader stage failed to compile
    #[error("{stage} compilation failed: {log}")]
    ShaderCompileFailed {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler diagnostic (bounded)
        log: String,
    },

    /// The program failed to link
    #[error("Linking failed: {log}")]
    ProgramLinkFailed {
        /// Linker diagnostic (bounded)
        log: String,
    },

    /// An operation needed a program that has not been built yet
    #[error("No shader program has been created")]
    MissingProgram,

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;
