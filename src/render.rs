//! Triangle renderer on top of glow.
//!
//! Owns the vertex/index buffers and the shader program for the one piece
//! of scene content the skeleton has. Shader sources live on disk next to
//! the binary and are compiled at startup; a broken shader is reported and
//! the renderer simply draws nothing until the next run.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glow::HasContext;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::Settings;

/// On-disk shader locations, relative to the working directory.
const VERT_PATH: &str = "shaders/triangle.vert";
const FRAG_PATH: &str = "shaders/triangle.frag";

/// Compiled-in fallbacks for when the files are missing.
const VERT_SRC: &str = include_str!("../shaders/triangle.vert");
const FRAG_SRC: &str = include_str!("../shaders/triangle.frag");

/// Interleaved position (xyz) + color (rgb) for one triangle.
#[rustfmt::skip]
const VERTICES: [f32; 18] = [
     0.0,  0.5, 0.0,    1.00, 0.36, 0.13,
    -0.5, -0.5, 0.0,    0.13, 1.00, 0.80,
     0.5, -0.5, 0.0,    0.55, 0.36, 1.00,
];

const INDICES: [u32; 3] = [0, 1, 2];

const FLOATS_PER_VERTEX: i32 = 6;
const STRIDE: i32 = FLOATS_PER_VERTEX * std::mem::size_of::<f32>() as i32;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program failed to link:\n{log}")]
    Link { log: String },

    #[error("GL object allocation failed: {0}")]
    Alloc(String),
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    /// None when shader compile or link failed; the app keeps running and
    /// the triangle just is not drawn.
    program: Option<glow::Program>,
    /// Scene background, edited live from the properties panel.
    pub clear_color: [f32; 4],
}

impl Renderer {
    /// Set up buffers and shaders. Buffer allocation failure is fatal;
    /// shader trouble is logged and tolerated.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, RenderError> {
        let (vao, vbo, ebo) = unsafe {
            let vao = gl.create_vertex_array().map_err(RenderError::Alloc)?;
            let vbo = gl.create_buffer().map_err(RenderError::Alloc)?;
            let ebo = gl.create_buffer().map_err(RenderError::Alloc)?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&VERTICES),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&INDICES),
                glow::STATIC_DRAW,
            );

            // location 0: position, location 1: color
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, STRIDE, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, STRIDE, 3 * 4);
            gl.enable_vertex_attrib_array(1);

            gl.bind_vertex_array(None);

            (vao, vbo, ebo)
        };

        let program = match compile_program(&gl) {
            Ok(program) => {
                debug!("shader program linked");
                Some(program)
            }
            Err(e) => {
                error!("{e}");
                None
            }
        };

        Ok(Self {
            gl,
            vao,
            vbo,
            ebo,
            program,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        })
    }

    /// Clear the frame and draw the triangle (if we have a working program).
    /// Polygon mode is restored to fill afterwards so the GUI overlay is
    /// never wireframed.
    pub fn draw(&self, settings: &Settings) {
        let gl = &self.gl;
        unsafe {
            let [r, g, b, a] = self.clear_color;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            if let Some(program) = self.program {
                if settings.wireframe {
                    gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
                }

                gl.use_program(Some(program));
                gl.bind_vertex_array(Some(self.vao));
                gl.draw_elements(
                    glow::TRIANGLES,
                    INDICES.len() as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
                gl.bind_vertex_array(None);

                if settings.wireframe {
                    gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
                }
            }
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    /// Delete every GL object we created.
    pub fn destroy(&mut self) {
        let gl = &self.gl;
        unsafe {
            if let Some(program) = self.program.take() {
                gl.delete_program(program);
            }
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
            gl.delete_vertex_array(self.vao);
        }
    }
}

/// Read a shader from disk, falling back to the compiled-in source when the
/// file is missing or unreadable.
fn shader_source(path: &str, fallback: &'static str) -> String {
    match fs::read_to_string(Path::new(path)) {
        Ok(src) => src,
        Err(e) => {
            warn!(path, error = %e, "shader file unavailable, using built-in source");
            fallback.to_owned()
        }
    }
}

fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, RenderError> {
    unsafe {
        let shader = gl.create_shader(kind).map_err(RenderError::Alloc)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            Err(RenderError::Compile { stage, log })
        }
    }
}

fn compile_program(gl: &glow::Context) -> Result<glow::Program, RenderError> {
    let vert = compile_shader(
        gl,
        glow::VERTEX_SHADER,
        "vertex",
        &shader_source(VERT_PATH, VERT_SRC),
    )?;

    let frag = match compile_shader(
        gl,
        glow::FRAGMENT_SHADER,
        "fragment",
        &shader_source(FRAG_PATH, FRAG_SRC),
    ) {
        Ok(frag) => frag,
        Err(e) => {
            unsafe { gl.delete_shader(vert) };
            return Err(e);
        }
    };

    unsafe {
        let program = gl.create_program().map_err(RenderError::Alloc)?;
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);

        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if gl.get_program_link_status(program) {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            Err(RenderError::Link { log })
        }
    }
}
