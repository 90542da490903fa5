//! Shader source loading and program construction
//!
//! Compile and link failures follow [`ShaderPolicy`]: lenient builds log the
//! driver diagnostic and still hand back a program handle, strict builds stop
//! at the first failure.

use crate::config::{DemoVariant, ShaderConfig, ShaderPolicy, ShaderSourceConfig};
use crate::error::{BootstrapError, BootstrapResult};
use crate::gpu::api::{GraphicsApi, ProgramHandle, ShaderHandle, ShaderStage, INFO_LOG_CAPACITY, NO_ERROR};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Upper bound on errors drained per check; without a current context some
/// drivers report an error on every call.
const MAX_ERRORS_PER_CHECK: usize = 32;

const POINT_VERTEX_SHADER: &str = "#version 430
void main(void)
{
    gl_Position = vec4(0.0, 0.0, 0.0, 1.0);
}
";

const POINT_FRAGMENT_SHADER: &str = "#version 430
out vec4 color;
void main(void)
{
    color = vec4(0.0, 0.0, 1.0, 1.0);
}
";

const TRIANGLE_VERTEX_SHADER: &str = "#version 430
uniform float offset;
void main(void)
{
    if (gl_VertexID == 0) gl_Position = vec4( 0.25 + offset, -0.25, 0.0, 1.0);
    else if (gl_VertexID == 1) gl_Position = vec4(-0.25 + offset, -0.25, 0.0, 1.0);
    else gl_Position = vec4( 0.25 + offset,  0.25, 0.0, 1.0);
}
";

const TRIANGLE_FRAGMENT_SHADER: &str = POINT_FRAGMENT_SHADER;

/// Vertex and fragment source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source
    pub vertex: String,
    /// Fragment stage source
    pub fragment: String,
}

impl ShaderSources {
    /// Built-in sources for a demo variant
    pub fn inline(variant: DemoVariant) -> Self {
        let (vertex, fragment) = match variant {
            DemoVariant::Point => (POINT_VERTEX_SHADER, POINT_FRAGMENT_SHADER),
            DemoVariant::AnimatedTriangle => (TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER),
        };
        Self {
            vertex: vertex.to_string(),
            fragment: fragment.to_string(),
        }
    }

    /// Read both stages from disk
    ///
    /// Under the lenient policy an unreadable file is logged and replaced by
    /// an empty source, which the driver then rejects at compile time.
    pub fn from_files(
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
        policy: ShaderPolicy,
    ) -> BootstrapResult<Self> {
        Ok(Self {
            vertex: load_or_empty(vertex.as_ref(), policy)?,
            fragment: load_or_empty(fragment.as_ref(), policy)?,
        })
    }

    /// Resolve sources as configured
    pub fn resolve(config: &ShaderConfig, variant: DemoVariant) -> BootstrapResult<Self> {
        match &config.source {
            ShaderSourceConfig::Inline => Ok(Self::inline(variant)),
            ShaderSourceConfig::Files { vertex, fragment } => {
                Self::from_files(vertex, fragment, config.policy)
            }
        }
    }

    fn get(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn load_or_empty(path: &Path, policy: ShaderPolicy) -> BootstrapResult<String> {
    match read_shader_source(path) {
        Ok(source) => Ok(source),
        Err(source) if policy == ShaderPolicy::Lenient => {
            log::error!("Failed to read shader source {path:?}: {source}");
            Ok(String::new())
        }
        Err(source) => Err(BootstrapError::ShaderSourceRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a shader file line by line, ending every line with `\n`
///
/// The file must be UTF-8. Invalid bytes fail the whole read with
/// [`std::io::ErrorKind::InvalidData`], so under the lenient policy such a
/// file is compiled as empty source rather than passed through byte for byte.
pub fn read_shader_source(path: impl AsRef<Path>) -> std::io::Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    Ok(content)
}

/// Drain and log every queued GL error; returns whether any was found
pub fn check_gl_errors(api: &impl GraphicsApi) -> bool {
    let mut found = false;
    for _ in 0..MAX_ERRORS_PER_CHECK {
        let code = api.get_error();
        if code == NO_ERROR {
            break;
        }
        log::error!("glError: {code}");
        found = true;
    }
    found
}

/// Linked program together with the shader objects it was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltProgram {
    /// Program object
    pub program: ProgramHandle,
    /// Vertex shader object
    pub vertex: ShaderHandle,
    /// Fragment shader object
    pub fragment: ShaderHandle,
}

impl BuiltProgram {
    /// Delete the program and both shader objects
    pub fn release(self, api: &impl GraphicsApi) {
        api.delete_program(self.program);
        api.delete_shader(self.vertex);
        api.delete_shader(self.fragment);
    }
}

fn compile_stage(
    api: &impl GraphicsApi,
    shader: ShaderHandle,
    stage: ShaderStage,
    sources: &ShaderSources,
    policy: ShaderPolicy,
) -> BootstrapResult<()> {
    api.shader_source(shader, sources.get(stage));
    api.compile_shader(shader);
    check_gl_errors(api);

    if api.compile_status(shader) {
        return Ok(());
    }

    log::error!("{stage} compilation failed");
    let log = api.shader_info_log(shader, INFO_LOG_CAPACITY).unwrap_or_default();
    if !log.is_empty() {
        log::error!("Shader Info Log: {log}");
    }

    match policy {
        ShaderPolicy::Lenient => Ok(()),
        ShaderPolicy::Strict => Err(BootstrapError::ShaderCompileFailed { stage, log }),
    }
}

/// Compile both stages and link them into a program
///
/// Both shader objects are created up front so a strict failure can delete
/// everything it allocated.
pub fn build_program(
    api: &impl GraphicsApi,
    sources: &ShaderSources,
    policy: ShaderPolicy,
) -> BootstrapResult<BuiltProgram> {
    let vertex = api.create_shader(ShaderStage::Vertex);
    let fragment = api.create_shader(ShaderStage::Fragment);

    let compiled = compile_stage(api, vertex, ShaderStage::Vertex, sources, policy)
        .and_then(|()| compile_stage(api, fragment, ShaderStage::Fragment, sources, policy));
    if let Err(e) = compiled {
        api.delete_shader(vertex);
        api.delete_shader(fragment);
        return Err(e);
    }

    let program = api.create_program();
    api.attach_shader(program, vertex);
    api.attach_shader(program, fragment);
    api.link_program(program);
    check_gl_errors(api);

    let built = BuiltProgram {
        program,
        vertex,
        fragment,
    };

    if !api.link_status(program) {
        log::error!("Linking failed");
        let log = api.program_info_log(program, INFO_LOG_CAPACITY).unwrap_or_default();
        if !log.is_empty() {
            log::error!("Program Info Log: {log}");
        }
        if policy == ShaderPolicy::Strict {
            built.release(api);
            return Err(BootstrapError::ProgramLinkFailed { log });
        }
    }

    log::debug!("Built shader program {}", program.0);
    Ok(built)
}
