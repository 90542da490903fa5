//! Graphics API trait
//!
//! The handful of OpenGL entry points the bootstrap issues, behind a trait so
//! the frame loop and shader build can run against a recording mock.

use std::fmt;

/// Upper bound on shader and program info logs, in bytes
pub const INFO_LOG_CAPACITY: usize = 512;

/// Value of `glGetError` when no error is queued
pub const NO_ERROR: u32 = 0;

/// Shader object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Program object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Vertex array object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(pub u32);

/// Uniform location; `-1` when the name is not an active uniform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "Vertex"),
            Self::Fragment => write!(f, "Fragment"),
        }
    }
}

/// Primitive topology for a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// `GL_POINTS`
    Points,
    /// `GL_TRIANGLES`
    Triangles,
}

/// OpenGL entry points used by the bootstrap
///
/// Implementations assume a current context on the calling thread.
pub trait GraphicsApi {
    /// Version of the current context as (major, minor)
    fn context_version(&self) -> (u32, u32);

    /// `glCreateShader`
    fn create_shader(&self, stage: ShaderStage) -> ShaderHandle;

    /// `glShaderSource` with a single string
    fn shader_source(&self, shader: ShaderHandle, source: &str);

    /// `glCompileShader`
    fn compile_shader(&self, shader: ShaderHandle);

    /// `GL_COMPILE_STATUS`
    fn compile_status(&self, shader: ShaderHandle) -> bool;

    /// Shader info log, at most `capacity` bytes; `None` when empty
    fn shader_info_log(&self, shader: ShaderHandle, capacity: usize) -> Option<String>;

    /// `glDeleteShader`
    fn delete_shader(&self, shader: ShaderHandle);

    /// `glCreateProgram`
    fn create_program(&self) -> ProgramHandle;

    /// `glAttachShader`
    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle);

    /// `glLinkProgram`
    fn link_program(&self, program: ProgramHandle);

    /// `GL_LINK_STATUS`
    fn link_status(&self, program: ProgramHandle) -> bool;

    /// Program info log, at most `capacity` bytes; `None` when empty
    fn program_info_log(&self, program: ProgramHandle, capacity: usize) -> Option<String>;

    /// `glUseProgram`
    fn use_program(&self, program: ProgramHandle);

    /// `glDeleteProgram`
    fn delete_program(&self, program: ProgramHandle);

    /// `glGetError`; [`NO_ERROR`] when the queue is empty
    fn get_error(&self) -> u32;

    /// `glGenVertexArrays` for a single array
    fn gen_vertex_array(&self) -> VertexArrayHandle;

    /// `glBindVertexArray`
    fn bind_vertex_array(&self, vao: VertexArrayHandle);

    /// `glDeleteVertexArrays` for a single array
    fn delete_vertex_array(&self, vao: VertexArrayHandle);

    /// `glGetUniformLocation`
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation;

    /// `glProgramUniform1f`
    fn program_uniform_1f(&self, program: ProgramHandle, location: UniformLocation, value: f32);

    /// `glClear(GL_COLOR_BUFFER_BIT)`
    fn clear_color_buffer(&self);

    /// `glDrawArrays`
    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32);
}

/// Cut `log` to at most `capacity` bytes on a character boundary
pub fn truncate_log(mut log: String, capacity: usize) -> String {
    if log.len() > capacity {
        let mut end = capacity;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}
