use thiserror::Error;

/// Failures during window, context, or loader setup. All of these are fatal:
/// the binaries log the message and exit with status 1.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("failed to load OpenGL function pointers")]
    LoaderFailed,
}

/// Shader build failures, carrying the driver's info log.
#[derive(Debug, Error)]
pub enum GlError {
    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("error linking program. OpenGL reply: '{log}'")]
    ProgramLink { log: String },
}

/// Anything that can abort a demo during setup.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Gl(#[from] GlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_error_names_the_stage() {
        let err = GlError::ShaderCompile {
            stage: "vertex",
            log: "0:1(1): error: syntax error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("vertex shader compilation error"));
        assert!(msg.contains("syntax error"));
    }

    #[test]
    fn link_error_carries_the_driver_reply() {
        let err = GlError::ProgramLink {
            log: "missing entry point".to_string(),
        };
        assert!(err.to_string().contains("'missing entry point'"));
    }
}
