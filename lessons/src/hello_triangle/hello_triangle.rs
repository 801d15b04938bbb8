use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, DrawParameters, Frame, Program, Surface, VertexBuffer, uniform};
use log::info;
use winit::window::Window;

use common::application::Application;
use common::colors::{self, ColorExt};
use common::config::Config;
use common::geometry::{self, PositionVertex};
use common::shader;

const VERTEX_SHADER: &str = r#"
#version 330 core
layout (location = 0) in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 330 core
out vec4 frag_color;

uniform vec4 color;

void main() {
    frag_color = color;
}
"#;

pub struct HelloTriangle {
    vertex_buffer: VertexBuffer<PositionVertex>,
    program: Program,
    draw_parameters: DrawParameters<'static>,
}

impl Application for HelloTriangle {
    const TITLE: &'static str = "Hello Triangle";

    fn new(_window: &Window, display: &Display<WindowSurface>, config: &Config) -> Result<Self> {
        let program = shader::program_from_source(display, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let vertex_buffer = VertexBuffer::new(display, &geometry::TRIANGLE)?;

        info!("Uploaded {} triangle vertices", geometry::TRIANGLE.len());

        Ok(Self {
            vertex_buffer,
            program,
            draw_parameters: config.draw_parameters(),
        })
    }

    fn render(&mut self, frame: &mut Frame) -> Result<()> {
        frame.draw(
            &self.vertex_buffer,
            &NoIndices(PrimitiveType::TrianglesList),
            &self.program,
            &uniform! { color: colors::ORANGE.to_rgba_array() },
            &self.draw_parameters,
        )?;

        Ok(())
    }
}
