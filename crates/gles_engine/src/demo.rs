//! Demo orchestration
//!
//! Bootstrap, load, query, optionally build shaders, then loop. Every
//! resource acquired along the way is owned by a value on this stack frame,
//! so early returns release whatever was already created.

use std::io::{self, Write};

use crate::config::DemoConfig;
use crate::error::BootstrapResult;
use crate::render::capabilities::{report_extension_probe, report_extensions};
use crate::render::gl::{GlDevice, GlowDevice};
use crate::render::render_loop::RenderLoop;
use crate::render::shader::{
    build_program, BuildReport, ShaderError, ShaderResult, FRAGMENT_SHADER_SOURCE,
    VERTEX_SHADER_SOURCE,
};
use crate::render::window::{GlfwWindow, WindowBackend};

/// Which of the two demo programs to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoVariant {
    /// Extension listing and clear-screen loop
    Extensions,
    /// Same as [`DemoVariant::Extensions`] plus a shader program build
    Shader,
}

/// Run the startup steps that print to `out`
///
/// The returned program, if any, is never bound: it exists only to exercise
/// the compile and link path. A driver that cannot allocate the shader
/// objects yields `None`; an `Err` leaves no GL object behind.
pub fn prepare<W, G>(
    window: &W,
    gl: &G,
    config: &DemoConfig,
    variant: DemoVariant,
    out: &mut impl Write,
) -> ShaderResult<Option<BuildReport<G::Program>>>
where
    W: WindowBackend,
    G: GlDevice,
{
    report_extensions(gl, out)?;
    report_extension_probe(window, &config.probe_extension, out)?;

    match variant {
        DemoVariant::Extensions => Ok(None),
        DemoVariant::Shader => {
            match build_program(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE, out) {
                Ok(report) => {
                    log::info!(
                        "Shader program {:?} built ({})",
                        report.handle(),
                        if report.is_clean() { "clean" } else { "with diagnostics" }
                    );
                    Ok(Some(report))
                }
                Err(ShaderError::Allocation(message)) => {
                    log::warn!("No shader program built: {message}");
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        }
    }
}

/// Run one demo to completion
///
/// Returns once the window was closed. Errors are fatal bootstrap failures.
/// `config` is used as given; [`DemoConfig::from_embedded`] has validated it.
pub fn run_demo(config: &DemoConfig, variant: DemoVariant) -> BootstrapResult<()> {
    let mut window = GlfwWindow::new(&config.window)?;
    let gl = GlowDevice::load(|name| window.proc_address(name))?;

    let program = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        prepare(&window, &gl, config, variant, &mut out).unwrap_or_else(|err| {
            log::warn!("Failed to write startup report: {err}");
            None
        })
    };

    let width = i32::try_from(config.window.width).unwrap_or(i32::MAX);
    let height = i32::try_from(config.window.height).unwrap_or(i32::MAX);
    let mut render_loop = RenderLoop::new(window, gl, config.clear_color, width, height);
    render_loop.run();

    if let Some(program) = program {
        render_loop.gl().delete_program(program.handle());
    }

    log::info!("Shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::gl::mock::{GlCall, MockGl};
    use crate::render::window::mock::ScriptedWindow;

    #[test]
    fn test_extensions_variant_builds_no_program() {
        let gl = MockGl::with_extensions(&["GL_KHR_debug"]);
        let window = ScriptedWindow::default();
        let mut out = Vec::new();

        let program = prepare(&window, &gl, &DemoConfig::default(), DemoVariant::Extensions, &mut out)
            .unwrap();

        assert!(program.is_none());
        assert!(gl.calls().is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GL_KHR_debug\nGL_EXT_clip_cull_distance is NOT supported\n"
        );
    }

    #[test]
    fn test_shader_variant_links_program() {
        let gl = MockGl::default();
        let window = ScriptedWindow::default();
        let mut out = Vec::new();

        let program = prepare(&window, &gl, &DemoConfig::default(), DemoVariant::Shader, &mut out)
            .unwrap()
            .unwrap();

        assert!(program.is_clean());
        assert!(gl.calls().contains(&GlCall::LinkProgram(program.handle())));
    }

    #[test]
    fn test_broken_shader_still_reaches_render_loop() {
        let gl = MockGl {
            reject_source_containing: Some("FragColor".to_string()),
            ..MockGl::default()
        };
        let window = ScriptedWindow {
            escape_at_frame: Some(0),
            ..ScriptedWindow::default()
        };
        let mut out = Vec::new();

        let program = prepare(&window, &gl, &DemoConfig::default(), DemoVariant::Shader, &mut out)
            .unwrap()
            .unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("ERROR::SHADER::FRAGMENT::COMPILATION_FAILED"));

        let mut render_loop = RenderLoop::new(window, gl, [0.2, 0.3, 0.3, 1.0], 800, 600);
        assert_eq!(render_loop.run(), 1);
        render_loop.gl().delete_program(program.handle());
        assert_eq!(
            render_loop.gl().calls().last(),
            Some(&GlCall::DeleteProgram(program.handle()))
        );
    }

    /// Accepts the extension report, then fails once diagnostics are written
    struct FailsOnDiagnostics(Vec<u8>);

    impl Write for FailsOnDiagnostics {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.starts_with(b"ERROR::") {
                return Err(io::ErrorKind::BrokenPipe.into());
            }
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unwritable_link_diagnostics_leave_no_program() {
        let gl = MockGl {
            fail_link: true,
            ..MockGl::default()
        };
        let window = ScriptedWindow::default();
        let mut out = FailsOnDiagnostics(Vec::new());

        let result = prepare(&window, &gl, &DemoConfig::default(), DemoVariant::Shader, &mut out);

        assert!(matches!(result, Err(ShaderError::Io(_))));
        assert_eq!(gl.calls().last(), Some(&GlCall::DeleteProgram(3)));
    }

    #[test]
    fn test_shader_allocation_failure_skips_program() {
        let gl = MockGl {
            fail_create_shader: true,
            ..MockGl::default()
        };
        let window = ScriptedWindow::default();
        let mut out = Vec::new();

        let program = prepare(&window, &gl, &DemoConfig::default(), DemoVariant::Shader, &mut out)
            .unwrap();

        assert!(program.is_none());
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("ERROR::SHADER::VERTEX::CREATION_FAILED"));
    }
}
