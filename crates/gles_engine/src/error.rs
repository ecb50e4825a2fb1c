//! Fatal bootstrap errors
//!
//! Every variant aborts the demo: the binary prints the message as a single
//! line and exits with status -1. Non-fatal shader diagnostics are carried by
//! [`crate::render::shader::BuildReport`] instead.

use thiserror::Error;

use crate::config::ConfigError;

/// Failures that stop the demo before the render loop starts
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The windowing library could not be initialized
    #[error("Failed to initialize GLFW")]
    Init,

    /// The window (and its GL ES context) could not be created
    #[error("Failed to create GLFW window")]
    WindowCreation,

    /// No usable GL entry points could be resolved
    #[error("Failed to initialize OpenGL function loader")]
    Loader,

    /// A named GL entry point could not be resolved
    #[error("Cannot get {0} proc")]
    MissingProc(String),

    /// The embedded configuration is invalid
    #[error("Invalid demo configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for bootstrap steps
pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_step() {
        assert_eq!(BootstrapError::Init.to_string(), "Failed to initialize GLFW");
        assert_eq!(BootstrapError::WindowCreation.to_string(), "Failed to create GLFW window");
        assert_eq!(
            BootstrapError::MissingProc("glGetStringi".to_string()).to_string(),
            "Cannot get glGetStringi proc"
        );
    }

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            BootstrapError::Init,
            BootstrapError::WindowCreation,
            BootstrapError::Loader,
            BootstrapError::MissingProc("glClear".to_string()),
            BootstrapError::Config(ConfigError::Invalid("width must be non-zero".to_string())),
        ];
        for error in errors {
            assert!(!error.to_string().contains('\n'));
        }
    }
}
