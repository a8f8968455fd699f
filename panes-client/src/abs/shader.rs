//! OpenGL Shaders
//!
//! [`Shader`] and [`ShaderProgram`] own compiled GL objects. [`Uniform`] is implemented for
//! the value types the UI shader takes.

use std::sync::Arc;

use glam::{Mat4, Vec4};
use glow::HasContext;

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let info = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(format!("shader compilation failed: {}", info));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a uniform location of the bound program.
pub trait Uniform {
    fn apply(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn apply(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self as i32) }
    }
}

impl Uniform for i32 {
    fn apply(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for Vec4 {
    fn apply(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32_slice(Some(location), self.as_ref()) }
    }
}

impl Uniform for Mat4 {
    fn apply(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref()) }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let info = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(format!("shader program linking failed: {}", info));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles a vertex and a fragment shader and links them.
    pub fn from_sources(gl: &Arc<glow::Context>, vert: &str, frag: &str) -> Result<Self, String> {
        let vert = Shader::new(gl, glow::VERTEX_SHADER, vert)?;
        let frag = Shader::new(gl, glow::FRAGMENT_SHADER, frag)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform of the program, which must be in use. Unknown names are skipped.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        match unsafe { self.gl.get_uniform_location(self.id, name) } {
            Some(location) => value.apply(&self.gl, &location),
            None => log::trace!("Uniform '{}' not found", name),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
