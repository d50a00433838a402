use std::ffi::CStr;
use std::ptr::null;

use crate::error::GlError;

use super::info_log::{info_log_to_string, INFO_LOG_CAP};

/// The two stage kinds this crate links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

/// An unbuilt shader stage and the source it will be compiled from.
pub struct Shader {
    inner: gl::types::GLuint,
    source: &'static CStr,
    stage: ShaderStage,
    was_compiled: bool,
}

impl Shader {
    pub fn new(stage: ShaderStage, source: &'static CStr) -> Self {
        let inner = unsafe { gl::CreateShader(stage.gl_enum()) };
        Self {
            inner,
            source,
            stage,
            was_compiled: false,
        }
    }

    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(source: &'static CStr) -> Self {
        Self::new(ShaderStage::Vertex, source)
    }

    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(source: &'static CStr) -> Self {
        Self::new(ShaderStage::Fragment, source)
    }

    /// Compiles this stage.
    ///
    /// On failure the stage object is still deleted (by this value's drop),
    /// and the error carries the driver's bounded info log.
    pub fn compile(mut self) -> Result<CompiledShader, GlError> {
        let compiled = unsafe {
            gl::ShaderSource(self.inner, 1, &self.source.as_ptr(), null());
            gl::CompileShader(self.inner);

            let mut success = 0;
            gl::GetShaderiv(self.inner, gl::COMPILE_STATUS, &mut success);

            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAP as usize];
                let mut length = 0;
                gl::GetShaderInfoLog(
                    self.inner,
                    INFO_LOG_CAP,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                return Err(GlError::ShaderCompile {
                    stage: self.stage.name(),
                    log: info_log_to_string(infolog, length),
                });
            }
            self.was_compiled = true;
            self.inner
        };
        // SAFETY: `compiled` came out of a successful gl::CompileShader.
        unsafe { Ok(CompiledShader::from_uint_unchecked(compiled)) }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            if !self.was_compiled {
                gl::DeleteShader(self.inner);
            }
        }
    }
}

/// A compiled stage object, ready to be linked into a
/// [`Program`](super::program::Program).
pub struct CompiledShader {
    id: gl::types::GLuint,
}

impl CompiledShader {
    /// # Safety
    /// The uint passed into this function MUST be a uint returned by a
    /// successful `gl::CompileShader`.
    pub unsafe fn from_uint_unchecked(shader: gl::types::GLuint) -> Self {
        Self { id: shader }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}
