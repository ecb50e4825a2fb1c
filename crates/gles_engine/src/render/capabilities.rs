//! Extension enumeration and probing
//!
//! Two separate namespaces are consulted: the GL driver's indexed
//! `GL_EXTENSIONS` list, and the windowing library's own extension predicate.
//! Neither result gates anything later on.

use std::io::{self, Write};

use crate::render::gl::GlDevice;
use crate::render::window::WindowBackend;

/// Printed instead of a list when the driver reports no extensions
pub const NO_EXTENSIONS_MESSAGE: &str = "No extensions found.";

/// Driver extension names in index order
///
/// A zero or negative count yields an empty list.
pub fn query_extensions<G: GlDevice>(gl: &G) -> Vec<String> {
    let count = u32::try_from(gl.num_extensions()).unwrap_or(0);
    (0..count).map(|index| gl.extension(index)).collect()
}

/// Print every driver extension on its own line
///
/// Returns the number of extensions found.
pub fn report_extensions<G: GlDevice>(gl: &G, out: &mut impl Write) -> io::Result<usize> {
    let extensions = query_extensions(gl);
    if extensions.is_empty() {
        writeln!(out, "{NO_EXTENSIONS_MESSAGE}")?;
    } else {
        for name in &extensions {
            writeln!(out, "{name}")?;
        }
    }
    log::info!("GL driver reports {} extensions", extensions.len());
    Ok(extensions.len())
}

/// Check `name` with the windowing library and print the verdict
pub fn report_extension_probe<W: WindowBackend>(
    window: &W,
    name: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let supported = window.extension_supported(name);
    if supported {
        writeln!(out, "{name} is supported")?;
    } else {
        writeln!(out, "{name} is NOT supported")?;
    }
    Ok(supported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::gl::mock::MockGl;
    use crate::render::window::mock::ScriptedWindow;

    fn printed(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_zero_extensions_prints_only_message() {
        let gl = MockGl::default();
        let mut out = Vec::new();

        let count = report_extensions(&gl, &mut out).unwrap();

        assert_eq!(count, 0);
        assert_eq!(printed(out), "No extensions found.\n");
    }

    #[test]
    fn test_negative_count_treated_as_none() {
        let gl = MockGl {
            reported_extension_count: Some(-1),
            ..MockGl::default()
        };
        assert!(query_extensions(&gl).is_empty());
    }

    #[test]
    fn test_one_line_per_extension_in_index_order() {
        let gl = MockGl::with_extensions(&[
            "GL_OES_texture_float",
            "GL_EXT_color_buffer_float",
            "GL_KHR_debug",
        ]);
        let mut out = Vec::new();

        let count = report_extensions(&gl, &mut out).unwrap();

        assert_eq!(count, 3);
        let text = printed(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["GL_OES_texture_float", "GL_EXT_color_buffer_float", "GL_KHR_debug"]
        );
        assert!(!text.contains(NO_EXTENSIONS_MESSAGE));
    }

    #[test]
    fn test_probe_uses_window_predicate() {
        let mut window = ScriptedWindow::default();
        window.platform_extensions.push("GL_EXT_clip_cull_distance".to_string());
        let mut out = Vec::new();

        assert!(report_extension_probe(&window, "GL_EXT_clip_cull_distance", &mut out).unwrap());
        assert!(!report_extension_probe(&window, "GL_OES_geometry_shader", &mut out).unwrap());

        assert_eq!(
            printed(out),
            "GL_EXT_clip_cull_distance is supported\nGL_OES_geometry_shader is NOT supported\n"
        );
    }

    #[test]
    fn test_probe_ignores_driver_list() {
        let gl = MockGl::with_extensions(&["GL_EXT_clip_cull_distance"]);
        let window = ScriptedWindow::default();
        let mut out = Vec::new();

        assert_eq!(query_extensions(&gl).len(), 1);
        assert!(!report_extension_probe(&window, "GL_EXT_clip_cull_distance", &mut out).unwrap());
    }
}
