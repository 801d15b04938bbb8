use std::time::Duration;

use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, DrawParameters, Frame, Program, Surface, VertexBuffer, uniform};
use winit::window::Window;

use common::application::Application;
use common::config::Config;
use common::geometry::{self, ColoredVertex};
use common::input::Input;
use common::shader;

/// A vertex-colored triangle swinging left and right.
pub struct Shaders {
    vertex_buffer: VertexBuffer<ColoredVertex>,
    program: Program,
    draw_parameters: DrawParameters<'static>,
    x_offset: f32,
}

impl Application for Shaders {
    const TITLE: &'static str = "Shaders";

    fn new(_window: &Window, display: &Display<WindowSurface>, config: &Config) -> Result<Self> {
        let (vertex_path, fragment_path) = config.shader_paths("shaders");
        let program = shader::program_from_files(display, &vertex_path, &fragment_path)?;
        let vertex_buffer = VertexBuffer::new(display, &geometry::COLORED_TRIANGLE)?;

        Ok(Self {
            vertex_buffer,
            program,
            draw_parameters: config.draw_parameters(),
            x_offset: 0.0,
        })
    }

    fn update(&mut self, _input: &Input, elapsed: Duration) {
        self.x_offset = geometry::horizontal_offset(elapsed.as_secs_f32());
    }

    fn render(&mut self, frame: &mut Frame) -> Result<()> {
        frame.draw(
            &self.vertex_buffer,
            &NoIndices(PrimitiveType::TrianglesList),
            &self.program,
            &uniform! { x_offset: self.x_offset },
            &self.draw_parameters,
        )?;

        Ok(())
    }
}
