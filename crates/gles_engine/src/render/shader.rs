//! Shader compilation and program linking
//!
//! Failures here are reported, never fatal: the diagnostic is printed and the
//! (possibly unusable) handle is still handed back so the demo keeps running.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::render::gl::GlDevice;

/// Longest info log printed for a failed compile or link, in characters
pub const INFO_LOG_LIMIT: usize = 511;

/// Vertex stage used by the shader demo
pub const VERTEX_SHADER_SOURCE: &str = r"#version 320 es
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Fragment stage used by the shader demo
pub const FRAGMENT_SHADER_SOURCE: &str = r"#version 320 es
precision mediump float;
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Shader build failures that leave no usable handle behind
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Diagnostics could not be written
    #[error("Failed to write shader diagnostics: {0}")]
    Io(#[from] io::Error),

    /// The driver refused to create a shader or program object
    #[error("Failed to allocate GL object: {0}")]
    Allocation(String),
}

/// Result alias for shader build steps
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("VERTEX"),
            Self::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

/// Outcome of a compile or link step
///
/// Both variants carry the handle; `Reported` also carries the driver log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildReport<H> {
    /// The step succeeded
    Clean(H),
    /// The step failed; the handle is returned anyway
    Reported {
        /// Handle produced by the driver
        handle: H,
        /// Driver diagnostic, truncated to [`INFO_LOG_LIMIT`] characters
        log: String,
    },
}

impl<H: Copy> BuildReport<H> {
    /// Handle produced by the step, whether or not it succeeded
    pub const fn handle(&self) -> H {
        match self {
            Self::Clean(handle) | Self::Reported { handle, .. } => *handle,
        }
    }

    /// Driver diagnostic when the step failed
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Clean(_) => None,
            Self::Reported { log, .. } => Some(log),
        }
    }

    /// Whether the step succeeded
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Clean(_))
    }
}

/// Clip a driver info log to [`INFO_LOG_LIMIT`] characters
pub fn truncate_info_log(log: &str) -> &str {
    match log.char_indices().nth(INFO_LOG_LIMIT) {
        Some((end, _)) => &log[..end],
        None => log,
    }
}

fn print_failure(out: &mut impl Write, header: &str, log: &str) -> io::Result<()> {
    writeln!(out, "{header}")?;
    writeln!(out, "{}", log.trim_end())
}

/// Compile one shader stage from source
///
/// A failed compile is still `Ok`, as [`BuildReport::Reported`]. `Err` means
/// no shader object is left alive.
pub fn compile_shader<G: GlDevice>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
    out: &mut impl Write,
) -> ShaderResult<BuildReport<G::Shader>> {
    let shader = match gl.create_shader(stage) {
        Ok(shader) => shader,
        Err(message) => {
            print_failure(out, &format!("ERROR::SHADER::{stage}::CREATION_FAILED"), &message)?;
            return Err(ShaderError::Allocation(message));
        }
    };

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        log::debug!("{stage} shader {shader:?} compiled");
        return Ok(BuildReport::Clean(shader));
    }

    let log = truncate_info_log(&gl.shader_info_log(shader)).to_string();
    if let Err(e) = print_failure(out, &format!("ERROR::SHADER::{stage}::COMPILATION_FAILED"), &log) {
        gl.delete_shader(shader);
        return Err(e.into());
    }
    log::warn!("{stage} shader {shader:?} failed to compile, continuing");
    Ok(BuildReport::Reported { handle: shader, log })
}

/// Link two compiled stages into a program
///
/// Both shader objects are deleted after linking regardless of the outcome.
/// A failed link is still `Ok`; `Err` means no program object is left alive.
pub fn link_program<G: GlDevice>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
    out: &mut impl Write,
) -> ShaderResult<BuildReport<G::Program>> {
    let program = match gl.create_program() {
        Ok(program) => program,
        Err(message) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            print_failure(out, "ERROR::SHADER::PROGRAM::CREATION_FAILED", &message)?;
            return Err(ShaderError::Allocation(message));
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    let linked = gl.program_link_status(program);

    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if linked {
        log::debug!("program {program:?} linked");
        return Ok(BuildReport::Clean(program));
    }

    let log = truncate_info_log(&gl.program_info_log(program)).to_string();
    if let Err(e) = print_failure(out, "ERROR::SHADER::PROGRAM::LINKING_FAILED", &log) {
        gl.delete_program(program);
        return Err(e.into());
    }
    log::warn!("program {program:?} failed to link, continuing");
    Ok(BuildReport::Reported { handle: program, log })
}

/// Compile both stages and link them
///
/// Compile and link failures still produce a program. On `Err` every object
/// created along the way has been deleted.
pub fn build_program<G: GlDevice>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
    out: &mut impl Write,
) -> ShaderResult<BuildReport<G::Program>> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source, out)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source, out) {
        Ok(fragment) => fragment,
        Err(e) => {
            gl.delete_shader(vertex.handle());
            return Err(e);
        }
    };

    link_program(gl, vertex.handle(), fragment.handle(), out)
}
