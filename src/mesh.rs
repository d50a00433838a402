use std::ffi::CStr;
use std::ptr::null;

use gl::types as gltype;
use sdl2::video::GLContext;

use crate::error::GlError;
use crate::geometry::{QUAD_INDICES, QUAD_VERTICES};
use crate::gl_wrappers::program::Program;
use crate::gl_wrappers::shader::Shader;

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

const VERT_SHADER_SOURCE: &CStr = include_cstr!("glsl/rect_vert.glsl");
const FRAG_SHADER_SOURCE: &CStr = include_cstr!("glsl/rect_frag.glsl");

/// The rectangle demo's GPU resources: the linked program and the quad's
/// vertex array.
///
/// Everything here is created once before the frame loop and deleted on
/// drop after it; nothing is touched per frame except to bind for the draw.
pub struct RectangleScene {
    program: Program,
    vao: gltype::GLuint,
    vbo: gltype::GLuint,
    ebo: gltype::GLuint,
}

impl RectangleScene {
    /// Compiles and links the shader program, then uploads the write-once
    /// quad geometry and describes its single position attribute.
    ///
    /// A compile or link failure aborts setup; the stage objects are deleted
    /// either way.
    pub fn new(gl_ctx: &GLContext) -> Result<Self, GlError> {
        assert!(
            gl_ctx.is_current(),
            "gl_ctx must be current in order to create a RectangleScene"
        );

        let vert = Shader::vertex(VERT_SHADER_SOURCE).compile()?;
        let frag = Shader::fragment(FRAG_SHADER_SOURCE).compile()?;
        let program = Program::link(vert, frag)?;

        let (vao, vbo, ebo) = unsafe {
            let mut vao = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            let mut vbo = 0;
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(&QUAD_VERTICES) as gltype::GLsizeiptr,
                QUAD_VERTICES.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            let mut ebo = 0;
            gl::GenBuffers(1, &mut ebo);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                std::mem::size_of_val(&QUAD_INDICES) as gltype::GLsizeiptr,
                QUAD_INDICES.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            // attribute 0: position, 3 floats, tightly packed
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                (3 * std::mem::size_of::<f32>()) as gltype::GLsizei,
                null(),
            );
            gl::EnableVertexAttribArray(0);

            // the EBO binding stays captured by the VAO
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
            (vao, vbo, ebo)
        };

        log::debug!("shader program linked, quad uploaded");

        Ok(Self {
            program,
            vao,
            vbo,
            ebo,
        })
    }

    /// Draws the quad: one indexed call, 6 indices, two triangles.
    pub fn draw(&self) {
        unsafe {
            gl::UseProgram(self.program.id());
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                QUAD_INDICES.len() as gltype::GLsizei,
                gl::UNSIGNED_INT,
                null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for RectangleScene {
    fn drop(&mut self) {
        // program deletes itself; order is free of cross-dependencies
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}
