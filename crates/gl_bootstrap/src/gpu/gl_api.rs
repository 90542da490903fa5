//! OpenGL implementation of [`GraphicsApi`] over the `gl` crate
//!
//! Function pointers are process-global once loaded. A [`GlApi`] value only
//! exists after [`GlApi::load`] verified the entry points and the context
//! version, which is what makes the unsafe calls below sound.

#![allow(unsafe_code)]

use crate::config::ContextConfig;
use crate::error::{BootstrapError, BootstrapResult};
use crate::gpu::api::{
    truncate_log, DrawMode, GraphicsApi, ProgramHandle, ShaderHandle, ShaderStage,
    UniformLocation, VertexArrayHandle,
};
use crate::window::GlfwWindow;
use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use std::ffi::CString;

/// Entry points the bootstrap cannot run without
const REQUIRED_ENTRY_POINTS: [(&str, fn() -> bool); 8] = [
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glLinkProgram", gl::LinkProgram::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glProgramUniform1f", gl::ProgramUniform1f::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
    ("glGetIntegerv", gl::GetIntegerv::is_loaded),
];

/// OpenGL function table bound to the window's context
#[derive(Debug)]
pub struct GlApi {
    _loaded: (),
}

impl GlApi {
    /// Load function pointers through the window and validate the context
    pub fn load(window: &mut GlfwWindow, requested: &ContextConfig) -> BootstrapResult<Self> {
        gl::load_with(|symbol| window.proc_address(symbol));
        check_entry_points(&REQUIRED_ENTRY_POINTS)?;

        let api = Self { _loaded: () };
        let actual = api.context_version();
        check_context_version(requested, actual)?;

        log::info!("OpenGL {}.{} context ready", actual.0, actual.1);
        Ok(api)
    }

    fn integer(name: GLenum) -> GLint {
        let mut value: GLint = 0;
        unsafe { gl::GetIntegerv(name, &mut value) };
        value
    }
}

/// Fail with the first entry point that is not loaded
fn check_entry_points(entry_points: &[(&'static str, fn() -> bool)]) -> BootstrapResult<()> {
    match entry_points.iter().find(|(_, is_loaded)| !is_loaded()) {
        Some(&(name, _)) => Err(BootstrapError::LoaderFailed(name)),
        None => Ok(()),
    }
}

/// The driver may hand out a newer context than requested, never an older one
fn check_context_version(requested: &ContextConfig, actual: (u32, u32)) -> BootstrapResult<()> {
    let requested = (requested.major, requested.minor);
    if actual < requested {
        return Err(BootstrapError::ContextCreationFailed { requested, actual });
    }
    Ok(())
}

fn read_log(
    object: GLuint,
    capacity: usize,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> Option<String> {
    let mut len: GLint = 0;
    unsafe { get_iv(object, gl::INFO_LOG_LENGTH, &mut len) };
    let len = usize::try_from(len).ok().filter(|&len| len > 0)?;

    let mut buffer = vec![0u8; len.min(capacity)];
    let mut written: GLsizei = 0;
    unsafe {
        get_log(
            object,
            GLsizei::try_from(buffer.len()).unwrap_or(GLsizei::MAX),
            &mut written,
            buffer.as_mut_ptr().cast::<GLchar>(),
        );
    }
    buffer.truncate(usize::try_from(written).unwrap_or(0));

    let log = String::from_utf8_lossy(&buffer).into_owned();
    Some(truncate_log(log, capacity))
}

impl GraphicsApi for GlApi {
    fn context_version(&self) -> (u32, u32) {
        let major = u32::try_from(Self::integer(gl::MAJOR_VERSION)).unwrap_or(0);
        let minor = u32::try_from(Self::integer(gl::MINOR_VERSION)).unwrap_or(0);
        (major, minor)
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderHandle {
        let kind = match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        };
        ShaderHandle(unsafe { gl::CreateShader(kind) })
    }

    fn shader_source(&self, shader: ShaderHandle, source: &str) {
        // Explicit length, so the source needs no NUL terminator
        let text = source.as_ptr().cast::<GLchar>();
        let len = GLint::try_from(source.len()).unwrap_or(GLint::MAX);
        unsafe { gl::ShaderSource(shader.0, 1, &text, &len) };
    }

    fn compile_shader(&self, shader: ShaderHandle) {
        unsafe { gl::CompileShader(shader.0) };
    }

    fn compile_status(&self, shader: ShaderHandle) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn shader_info_log(&self, shader: ShaderHandle, capacity: usize) -> Option<String> {
        read_log(shader.0, capacity, gl::GetShaderiv, gl::GetShaderInfoLog)
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        unsafe { gl::DeleteShader(shader.0) };
    }

    fn create_program(&self) -> ProgramHandle {
        ProgramHandle(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe { gl::AttachShader(program.0, shader.0) };
    }

    fn link_program(&self, program: ProgramHandle) {
        unsafe { gl::LinkProgram(program.0) };
    }

    fn link_status(&self, program: ProgramHandle) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn program_info_log(&self, program: ProgramHandle, capacity: usize) -> Option<String> {
        read_log(program.0, capacity, gl::GetProgramiv, gl::GetProgramInfoLog)
    }

    fn use_program(&self, program: ProgramHandle) {
        unsafe { gl::UseProgram(program.0) };
    }

    fn delete_program(&self, program: ProgramHandle) {
        unsafe { gl::DeleteProgram(program.0) };
    }

    fn get_error(&self) -> u32 {
        unsafe { gl::GetError() }
    }

    fn gen_vertex_array(&self) -> VertexArrayHandle {
        let mut vao: GLuint = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        VertexArrayHandle(vao)
    }

    fn bind_vertex_array(&self, vao: VertexArrayHandle) {
        unsafe { gl::BindVertexArray(vao.0) };
    }

    fn delete_vertex_array(&self, vao: VertexArrayHandle) {
        unsafe { gl::DeleteVertexArrays(1, &vao.0) };
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation {
        let Ok(name) = CString::new(name) else {
            return UniformLocation(-1);
        };
        UniformLocation(unsafe { gl::GetUniformLocation(program.0, name.as_ptr()) })
    }

    fn program_uniform_1f(&self, program: ProgramHandle, location: UniformLocation, value: f32) {
        unsafe { gl::ProgramUniform1f(program.0, location.0, value) };
    }

    fn clear_color_buffer(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        let mode = match mode {
            DrawMode::Points => gl::POINTS,
            DrawMode::Triangles => gl::TRIANGLES,
        };
        unsafe { gl::DrawArrays(mode, first, count) };
    }
}
