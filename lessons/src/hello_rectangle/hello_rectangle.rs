use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::PrimitiveType;
use glium::{
    Display, DrawParameters, Frame, IndexBuffer, Program, Surface, VertexBuffer, uniform,
};
use winit::window::Window;

use common::application::Application;
use common::colors::{self, ColorExt};
use common::config::Config;
use common::geometry::{self, PositionVertex};
use common::shader;

pub struct HelloRectangle {
    vertex_buffer: VertexBuffer<PositionVertex>,
    index_buffer: IndexBuffer<u32>,
    program: Program,
    draw_parameters: DrawParameters<'static>,
}

impl Application for HelloRectangle {
    const TITLE: &'static str = "Hello Rectangle";

    fn new(_window: &Window, display: &Display<WindowSurface>, config: &Config) -> Result<Self> {
        let (vertex_path, fragment_path) = config.shader_paths("hello_rectangle");
        let program = shader::program_from_files(display, &vertex_path, &fragment_path)?;

        let vertex_buffer = VertexBuffer::new(display, &geometry::RECTANGLE)?;
        let index_buffer = IndexBuffer::new(
            display,
            PrimitiveType::TrianglesList,
            &geometry::RECTANGLE_INDICES,
        )?;

        Ok(Self {
            vertex_buffer,
            index_buffer,
            program,
            draw_parameters: config.draw_parameters(),
        })
    }

    fn render(&mut self, frame: &mut Frame) -> Result<()> {
        frame.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            &self.program,
            &uniform! { color: colors::ORANGE.to_rgba_array() },
            &self.draw_parameters,
        )?;

        Ok(())
    }
}
