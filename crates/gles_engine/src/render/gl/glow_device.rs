//! `glow`-backed GL device
#![allow(unsafe_code)]

use std::ffi::c_void;

use glow::HasContext;

use super::GlDevice;
use crate::error::{BootstrapError, BootstrapResult};
use crate::render::shader::ShaderStage;

/// Entry point whose absence means no GL function table could be loaded
const LOADER_SENTINEL: &str = "glClear";
/// Entry point required to walk the extension list
const INDEXED_STRING_PROC: &str = "glGetStringi";

/// Loaded OpenGL ES function table
///
/// Only valid while the context it was loaded from is current on this thread.
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Load every GL entry point through `loader`
    ///
    /// Fails when the loader cannot resolve a core function or `glGetStringi`.
    pub fn load<F>(mut loader: F) -> BootstrapResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        if loader(LOADER_SENTINEL).is_null() {
            return Err(BootstrapError::Loader);
        }
        if loader(INDEXED_STRING_PROC).is_null() {
            return Err(BootstrapError::MissingProc(INDEXED_STRING_PROC.to_string()));
        }

        // SAFETY: the loader resolves against the context made current by the
        // window that outlives this device.
        let gl = unsafe { glow::Context::from_loader_function(loader) };
        log::debug!("GL function table loaded: {:?}", gl.version());
        Ok(Self { gl })
    }
}

const fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// SAFETY (all methods): calls go through the function table loaded in
// `GlowDevice::load` while its context is current; handles passed back in
// were produced by the same context.
impl GlDevice for GlowDevice {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        unsafe { self.gl.clear_color(r, g, b, a) }
    }

    fn clear_color_buffer(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn num_extensions(&self) -> i32 {
        unsafe { self.gl.get_parameter_i32(glow::NUM_EXTENSIONS) }
    }

    fn extension(&self, index: u32) -> String {
        unsafe { self.gl.get_parameter_indexed_string(glow::EXTENSIONS, index) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { self.gl.create_shader(stage_enum(stage)) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) }
    }
}
