use std::time::Duration;

use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::PrimitiveType;
use glium::{
    Display, DrawParameters, Frame, IndexBuffer, Program, Surface, VertexBuffer, uniform,
};
use log::debug;
use winit::keyboard::KeyCode;
use winit::window::Window;

use common::application::Application;
use common::config::Config;
use common::geometry::{self, TexturedVertex};
use common::input::Input;
use common::shader;
use common::texture::{Texture2D, TextureOptions};

const INITIAL_MIX_FACTOR: f32 = 0.2;
/// Change of the mix factor per second while an arrow key is held.
const MIX_SPEED: f32 = 1.0;

pub struct Textures {
    vertex_buffer: VertexBuffer<TexturedVertex>,
    index_buffer: IndexBuffer<u32>,
    program: Program,
    container: Texture2D,
    face: Texture2D,
    draw_parameters: DrawParameters<'static>,
    mix_factor: f32,
    last_update: Duration,
}

impl Application for Textures {
    const TITLE: &'static str = "Textures";

    fn new(_window: &Window, display: &Display<WindowSurface>, config: &Config) -> Result<Self> {
        let (vertex_path, fragment_path) = config.shader_paths("textures");
        let program = shader::program_from_files(display, &vertex_path, &fragment_path)?;

        let vertex_buffer = VertexBuffer::new(display, &geometry::TEXTURED_RECTANGLE)?;
        let index_buffer = IndexBuffer::new(
            display,
            PrimitiveType::TrianglesList,
            &geometry::RECTANGLE_INDICES,
        )?;

        let container = Texture2D::load(
            &config.asset("textures/container.png"),
            TextureOptions::default(),
            display,
        )?;
        let face = Texture2D::load(
            &config.asset("textures/awesomeface.png"),
            TextureOptions {
                flip_vertically: true,
            },
            display,
        )?;

        Ok(Self {
            vertex_buffer,
            index_buffer,
            program,
            container,
            face,
            draw_parameters: config.draw_parameters(),
            mix_factor: INITIAL_MIX_FACTOR,
            last_update: Duration::ZERO,
        })
    }

    fn update(&mut self, input: &Input, elapsed: Duration) {
        let deltatime = elapsed.saturating_sub(self.last_update).as_secs_f32();
        self.last_update = elapsed;

        let direction = match (input.key_down(KeyCode::ArrowUp), input.key_down(KeyCode::ArrowDown)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => return,
        };

        self.mix_factor = adjust_mix_factor(self.mix_factor, direction, deltatime);
        debug!("Mix factor {:.2}", self.mix_factor);
    }

    fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let uniforms = uniform! {
            texture1: self.container.sampled(),
            texture2: self.face.sampled(),
            mix_factor: self.mix_factor,
        };

        frame.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            &self.program,
            &uniforms,
            &self.draw_parameters,
        )?;

        Ok(())
    }
}

fn adjust_mix_factor(mix_factor: f32, direction: f32, deltatime: f32) -> f32 {
    (mix_factor + direction * MIX_SPEED * deltatime).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn up_increases_mix_factor() {
        assert_relative_eq!(adjust_mix_factor(0.2, 1.0, 0.5), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn down_decreases_mix_factor() {
        assert_relative_eq!(adjust_mix_factor(0.2, -1.0, 0.1), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn mix_factor_is_clamped() {
        assert_relative_eq!(adjust_mix_factor(0.9, 1.0, 5.0), 1.0);
        assert_relative_eq!(adjust_mix_factor(0.1, -1.0, 5.0), 0.0);
    }

    #[test]
    fn no_time_no_change() {
        assert_relative_eq!(adjust_mix_factor(INITIAL_MIX_FACTOR, 1.0, 0.0), INITIAL_MIX_FACTOR);
    }
}
