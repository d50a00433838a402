use crate::error::GlError;

use super::info_log::{info_log_to_string, INFO_LOG_CAP};
use super::shader::CompiledShader;

/// A linked shader program, the only shader resource that outlives setup.
pub struct Program {
    id: gl::types::GLuint,
}

impl Program {
    /// Links the two stages into a program.
    ///
    /// Consumes both stage objects so they are deleted as soon as linking
    /// has been attempted, on success and failure alike.
    pub fn link(vert: CompiledShader, frag: CompiledShader) -> Result<Self, GlError> {
        let id = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert.id());
            gl::AttachShader(program, frag.id());
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAP as usize];
                let mut length = 0;
                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_CAP,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                gl::DeleteProgram(program);
                return Err(GlError::ProgramLink {
                    log: info_log_to_string(infolog, length),
                });
            }
            program
        };
        // Stage objects are no longer needed once the program exists.
        drop(vert);
        drop(frag);
        Ok(Self { id })
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
