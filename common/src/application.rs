use std::time::Duration;

use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Frame};
use winit::window::Window;

use crate::config::Config;
use crate::input::Input;

/// A single lesson. Owns every GPU object it creates, so dropping it releases them.
pub trait Application: Sized {
    /// Window title used when none is given on the command line.
    const TITLE: &'static str;

    fn new(window: &Window, display: &Display<WindowSurface>, config: &Config) -> Result<Self>;

    /// Called once per frame before rendering. `elapsed` is the time since the lesson started.
    #[allow(unused_variables)]
    fn update(&mut self, input: &Input, elapsed: Duration) {}

    /// Draws into a frame that has already been cleared.
    fn render(&mut self, frame: &mut Frame) -> Result<()>;
}
