//! Rendering subsystem
//!
//! - **`window`**: window/context ownership and the [`window::WindowBackend`] seam
//! - **`gl`**: loaded GL function table behind the [`gl::GlDevice`] seam
//! - **`capabilities`**: extension enumeration and the extension probe
//! - **`shader`**: shader compile/link with reported diagnostics
//! - **`render_loop`**: the clear-screen loop and resize handling

pub mod capabilities;
pub mod gl;
pub mod render_loop;
pub mod shader;
pub mod window;

pub use render_loop::RenderLoop;
pub use window::{GlfwWindow, WindowBackend};
