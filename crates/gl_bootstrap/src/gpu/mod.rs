//! Graphics API layer
//!
//! - **`api`**: the [`GraphicsApi`] trait and typed GL handles
//! - **`gl_api`**: the real implementation over the `gl` crate
//! - **`shader`**: shader source loading and program construction

pub mod api;
pub mod gl_api;
pub mod shader;

pub use api::{
    DrawMode, GraphicsApi, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation,
    VertexArrayHandle, INFO_LOG_CAPACITY,
};
pub use gl_api::GlApi;
pub use shader::{build_program, check_gl_errors, read_shader_source, BuiltProgram, ShaderSources};
