//! Backend-agnostic window trait
//!
//! The render loop and the capability probe only see this trait, never GLFW
//! types, so they can be driven by mock backends in tests.

/// Window events the render loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The drawable framebuffer changed size (pixels)
    FramebufferResized {
        /// New framebuffer width
        width: i32,
        /// New framebuffer height
        height: i32,
    },
}

/// Interface a window with a current GL context must provide
///
/// # Thread Safety
/// Not `Send`: the context is bound to the thread that created the window and
/// is never made current anywhere else.
pub trait WindowBackend {
    /// Check if the window should close
    ///
    /// True once the user clicked the close button or the application set
    /// the flag through [`WindowBackend::set_should_close`].
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Sample whether Escape is currently held down
    fn escape_pressed(&self) -> bool;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending OS events and return the ones the loop cares about
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Ask the windowing library whether it reports `name` as supported
    ///
    /// This is the platform/windowing namespace, distinct from the driver's
    /// `GL_EXTENSIONS` list.
    fn extension_supported(&self, name: &str) -> bool;
}
