//! GL function table abstraction
//!
//! [`GlDevice`] is the narrow slice of OpenGL ES the demos call. The real
//! implementation ([`GlowDevice`]) forwards to a `glow` context loaded from
//! the window; tests substitute recording mocks.

mod glow_device;

pub use glow_device::GlowDevice;

use std::fmt::Debug;

use crate::render::shader::ShaderStage;

/// OpenGL ES operations used by the capability query, shader build and render loop
///
/// All methods assume the owning context is current on the calling thread.
pub trait GlDevice {
    /// Shader object handle
    type Shader: Copy + Debug;
    /// Program object handle
    type Program: Copy + Debug;

    /// `glViewport`
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// `glClearColor`
    fn clear_color(&self, rgba: [f32; 4]);
    /// `glClear(GL_COLOR_BUFFER_BIT)`
    fn clear_color_buffer(&self);

    /// `glGetIntegerv(GL_NUM_EXTENSIONS)`
    fn num_extensions(&self) -> i32;
    /// `glGetStringi(GL_EXTENSIONS, index)`
    fn extension(&self, index: u32) -> String;

    /// `glCreateShader`
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// `glShaderSource` with a single source string
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// `glCompileShader`
    fn compile_shader(&self, shader: Self::Shader);
    /// `GL_COMPILE_STATUS`
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// `glGetShaderInfoLog`
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// `glDeleteShader`
    fn delete_shader(&self, shader: Self::Shader);

    /// `glCreateProgram`
    fn create_program(&self) -> Result<Self::Program, String>;
    /// `glAttachShader`
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// `glLinkProgram`
    fn link_program(&self, program: Self::Program);
    /// `GL_LINK_STATUS`
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// `glGetProgramInfoLog`
    fn program_info_log(&self, program: Self::Program) -> String;
    /// `glDeleteProgram`
    fn delete_program(&self, program: Self::Program);
}
