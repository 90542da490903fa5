//! Recording window and graphics backends for tests

use crate::gpu::api::{
    truncate_log, DrawMode, GraphicsApi, ProgramHandle, ShaderHandle, ShaderStage,
    UniformLocation, VertexArrayHandle, NO_ERROR,
};
use crate::window::{InputEvent, WindowBackend};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Shared, ordered record of teardown steps across both mocks
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<&'static str>>>);

impl Journal {
    fn push(&self, entry: &'static str) {
        self.0.borrow_mut().push(entry);
    }

    pub(crate) fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GpuCall {
    CreateShader(ShaderHandle, ShaderStage),
    ShaderSource(ShaderHandle),
    CompileShader(ShaderHandle),
    ShaderInfoLog(ShaderHandle),
    DeleteShader(ShaderHandle),
    CreateProgram(ProgramHandle),
    AttachShader(ProgramHandle, ShaderHandle),
    LinkProgram(ProgramHandle),
    ProgramInfoLog(ProgramHandle),
    UseProgram(ProgramHandle),
    DeleteProgram(ProgramHandle),
    GenVertexArray(VertexArrayHandle),
    BindVertexArray(VertexArrayHandle),
    DeleteVertexArray(VertexArrayHandle),
    UniformLocation(String),
    ProgramUniform1f(f32),
    Clear,
    DrawArrays(DrawMode, i32, i32),
}

/// [`GraphicsApi`] that records every call and can inject failures
#[derive(Debug)]
pub(crate) struct RecordingGpu {
    calls: RefCell<Vec<GpuCall>>,
    next_handle: Cell<u32>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    errors: RefCell<VecDeque<u32>>,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
    journal: Option<Journal>,
}

impl RecordingGpu {
    pub(crate) fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            stages: RefCell::new(HashMap::new()),
            errors: RefCell::new(VecDeque::new()),
            fail_compile: None,
            fail_link: false,
            journal: None,
        }
    }

    pub(crate) fn failing_compile(mut self, stage: ShaderStage) -> Self {
        self.fail_compile = Some(stage);
        self
    }

    pub(crate) fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub(crate) fn with_errors(self, codes: &[u32]) -> Self {
        self.errors.borrow_mut().extend(codes);
        self
    }

    pub(crate) fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub(crate) fn calls(&self) -> Vec<GpuCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn draws(&self) -> Vec<GpuCall> {
        self.filter(|call| matches!(call, GpuCall::DrawArrays(..)))
    }

    pub(crate) fn logs_read(&self) -> Vec<GpuCall> {
        self.filter(|call| matches!(call, GpuCall::ShaderInfoLog(_) | GpuCall::ProgramInfoLog(_)))
    }

    pub(crate) fn uniform_lookups(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GpuCall::UniformLocation(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn uniform_uploads(&self) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GpuCall::ProgramUniform1f(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn deleted_shaders(&self) -> Vec<GpuCall> {
        self.filter(|call| matches!(call, GpuCall::DeleteShader(_)))
    }

    pub(crate) fn deleted_programs(&self) -> Vec<ProgramHandle> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GpuCall::DeleteProgram(program) => Some(*program),
                _ => None,
            })
            .collect()
    }

    fn filter(&self, predicate: impl Fn(&GpuCall) -> bool) -> Vec<GpuCall> {
        self.calls.borrow().iter().filter(|call| predicate(call)).cloned().collect()
    }

    fn record(&self, call: GpuCall) {
        self.calls.borrow_mut().push(call);
    }

    fn journal(&self, entry: &'static str) {
        if let Some(journal) = &self.journal {
            journal.push(entry);
        }
    }

    fn allocate(&self) -> u32 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        handle
    }
}

impl GraphicsApi for RecordingGpu {
    fn context_version(&self) -> (u32, u32) {
        (4, 3)
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderHandle {
        let shader = ShaderHandle(self.allocate());
        self.stages.borrow_mut().insert(shader.0, stage);
        self.record(GpuCall::CreateShader(shader, stage));
        shader
    }

    fn shader_source(&self, shader: ShaderHandle, _source: &str) {
        self.record(GpuCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: ShaderHandle) {
        self.record(GpuCall::CompileShader(shader));
    }

    fn compile_status(&self, shader: ShaderHandle) -> bool {
        let stage = self.stages.borrow().get(&shader.0).copied();
        stage.is_none() || stage != self.fail_compile
    }

    fn shader_info_log(&self, shader: ShaderHandle, capacity: usize) -> Option<String> {
        self.record(GpuCall::ShaderInfoLog(shader));
        // Longer than any sane capacity, so truncation is always exercised
        let log = "0(1) : error C0000: syntax error, unexpected end of file ".repeat(20);
        Some(truncate_log(log, capacity))
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        self.record(GpuCall::DeleteShader(shader));
        self.journal("delete_shader");
    }

    fn create_program(&self) -> ProgramHandle {
        let program = ProgramHandle(self.allocate());
        self.record(GpuCall::CreateProgram(program));
        program
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(GpuCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: ProgramHandle) {
        self.record(GpuCall::LinkProgram(program));
    }

    fn link_status(&self, _program: ProgramHandle) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, program: ProgramHandle, capacity: usize) -> Option<String> {
        self.record(GpuCall::ProgramInfoLog(program));
        Some(truncate_log(
            "error: vertex shader output not read by fragment shader".to_string(),
            capacity,
        ))
    }

    fn use_program(&self, program: ProgramHandle) {
        self.record(GpuCall::UseProgram(program));
    }

    fn delete_program(&self, program: ProgramHandle) {
        self.record(GpuCall::DeleteProgram(program));
        self.journal("delete_program");
    }

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(NO_ERROR)
    }

    fn gen_vertex_array(&self) -> VertexArrayHandle {
        let vao = VertexArrayHandle(self.allocate());
        self.record(GpuCall::GenVertexArray(vao));
        vao
    }

    fn bind_vertex_array(&self, vao: VertexArrayHandle) {
        self.record(GpuCall::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: VertexArrayHandle) {
        self.record(GpuCall::DeleteVertexArray(vao));
        self.journal("delete_vertex_array");
    }

    fn uniform_location(&self, _program: ProgramHandle, name: &str) -> UniformLocation {
        self.record(GpuCall::UniformLocation(name.to_string()));
        UniformLocation(0)
    }

    fn program_uniform_1f(&self, _program: ProgramHandle, _location: UniformLocation, value: f32) {
        self.record(GpuCall::ProgramUniform1f(value));
    }

    fn clear_color_buffer(&self) {
        self.record(GpuCall::Clear);
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.record(GpuCall::DrawArrays(mode, first, count));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowCall {
    PollEvents,
    SwapBuffers,
    ReleaseContext,
}

/// [`WindowBackend`] replaying one batch of events per poll
///
/// Once the script runs out every poll yields `Quit`, so a loop under test
/// always terminates.
#[derive(Debug)]
pub(crate) struct ScriptedWindow {
    script: VecDeque<Vec<InputEvent>>,
    calls: Vec<WindowCall>,
    journal: Option<Journal>,
}

impl ScriptedWindow {
    pub(crate) fn new(script: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: script.into(),
            calls: Vec::new(),
            journal: None,
        }
    }

    pub(crate) fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub(crate) fn calls(&self) -> Vec<WindowCall> {
        self.calls.clone()
    }

    pub(crate) fn swap_count(&self) -> usize {
        self.calls.iter().filter(|call| **call == WindowCall::SwapBuffers).count()
    }
}

impl WindowBackend for ScriptedWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.calls.push(WindowCall::PollEvents);
        self.script.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }

    fn swap_buffers(&mut self) {
        self.calls.push(WindowCall::SwapBuffers);
    }

    fn release_context(&mut self) {
        self.calls.push(WindowCall::ReleaseContext);
        if let Some(journal) = &self.journal {
            journal.push("release_context");
        }
    }

    fn size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn title(&self) -> &str {
        "scripted"
    }
}

impl Drop for ScriptedWindow {
    fn drop(&mut self) {
        if let Some(journal) = &self.journal {
            journal.push("destroy_window");
        }
    }
}
