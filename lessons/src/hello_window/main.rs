use clap::Parser;
use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Frame};
use winit::window::Window;

use common::application::Application;
use common::config::Config;
use common::{debug, run};

/// Opens a window and clears it every frame.
struct HelloWindow;

impl Application for HelloWindow {
    const TITLE: &'static str = "Hello Window";

    fn new(_window: &Window, _display: &Display<WindowSurface>, _config: &Config) -> Result<Self> {
        Ok(Self)
    }

    fn render(&mut self, _frame: &mut Frame) -> Result<()> {
        Ok(())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    debug::set_up_logging(config.log_level)?;

    run::run::<HelloWindow>(config)
}
