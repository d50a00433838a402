/// Window and context parameters for [`GlWindow::new`](crate::GlWindow::new).
///
/// Everything the demos previously would have hard-coded at the call sites
/// lives here instead, so setup takes plain values rather than reaching for
/// globals.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested core-profile context version.
    pub gl_major: u8,
    pub gl_minor: u8,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            gl_major: 3,
            gl_minor: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_the_tutorial_window() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "LearnOpenGL");
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn default_context_is_3_3_core() {
        let config = WindowConfig::default();
        assert_eq!((config.gl_major, config.gl_minor), (3, 3));
    }
}
