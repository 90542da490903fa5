//! Configuration system
//!
//! Everything the demo binaries can vary lives in [`BootstrapConfig`]. Files
//! are TOML or RON, picked by extension; every field has a default so an
//! empty file is a valid configuration.

pub use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::window::WindowFlags;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed but is out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// OpenGL context configuration
    pub context: ContextConfig,

    /// Shader source and failure policy
    pub shaders: ShaderConfig,

    /// Which demo to draw
    pub demo: DemoConfig,
}

impl Config for BootstrapConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.demo.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Whether window is resizable
    pub resizable: bool,

    /// VSync setting
    pub vsync: bool,
}

impl WindowConfig {
    /// Surface flags requested from the platform; always includes `OPENGL`
    pub fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::OPENGL;
        flags.set(WindowFlags::RESIZABLE, self.resizable);
        flags.set(WindowFlags::VSYNC, self.vsync);
        flags
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "sdl2opengl".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            vsync: true,
        }
    }
}

/// OpenGL context version request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Context major version
    pub major: u32,

    /// Context minor version
    pub minor: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { major: 4, minor: 3 }
    }
}

/// What happens when a shader fails to load, compile or link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderPolicy {
    /// Log the diagnostic and keep going with whatever program results
    #[default]
    Lenient,
    /// Return the first failure as an error
    Strict,
}

/// Where shader source text comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShaderSourceConfig {
    /// Built-in source literals matching the demo variant
    Inline,
    /// Two plain-text files at relative paths
    Files {
        /// Vertex shader path
        vertex: PathBuf,
        /// Fragment shader path
        fragment: PathBuf,
    },
}

impl Default for ShaderSourceConfig {
    fn default() -> Self {
        Self::Files {
            vertex: PathBuf::from("resources/shaders/vertShader.glsl"),
            fragment: PathBuf::from("resources/shaders/fragShader.glsl"),
        }
    }
}

/// Shader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Failure policy
    pub policy: ShaderPolicy,

    /// Source location
    pub source: ShaderSourceConfig,
}

/// Demo variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoVariant {
    /// One point, no animation
    Point,
    /// Three vertices drawn as a triangle, moved by the `offset` uniform
    #[default]
    AnimatedTriangle,
}

/// Demo configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Variant to draw
    pub variant: DemoVariant,

    /// Offset change per frame in the animated variant
    pub step: f32,
}

impl DemoConfig {
    /// `step` must be finite and positive, otherwise the offset never turns
    /// back toward the visible range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step.is_finite() && self.step > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "demo.step must be finite and greater than zero, got {}",
                self.step
            )))
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variant: DemoVariant::default(),
            step: 0.01,
        }
    }
}
