//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     RenderLoop / demo code      │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Trait (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!      ┌────────▼────────┐
//!      │ GlfwWindow      │ ← GLFW + GL ES context (glfw_window.rs)
//!      └─────────────────┘
//! ```
//!
//! Tests implement [`WindowBackend`] with scripted mocks so the loop can be
//! exercised without a display.

pub mod backend;
pub mod glfw_window;

pub use backend::{WindowBackend, WindowEvent};
pub use glfw_window::GlfwWindow;
