use std::path::{Path, PathBuf};

use clap::Parser;
use glium::{DrawParameters, PolygonMode};
use log::LevelFilter;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// Command line options shared by every lesson.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Config {
    /// Directory containing the `shaders` and `textures` folders
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Overrides the lesson's window title
    #[arg(long)]
    pub title: Option<String>,

    /// Draw polygon outlines instead of filled polygons
    #[arg(long)]
    pub wireframe: bool,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn window_attributes(&self, default_title: &str) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.as_deref().unwrap_or(default_title))
            .with_inner_size(LogicalSize::new(self.width, self.height))
    }

    pub fn asset(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.assets.join(relative)
    }

    /// Paths of the vertex and fragment shader for `name`,
    /// laid out as `shaders/<name>/<name>.vert` and `.frag`.
    pub fn shader_paths(&self, name: &str) -> (PathBuf, PathBuf) {
        let directory = self.asset("shaders").join(name);

        (
            directory.join(format!("{name}.vert")),
            directory.join(format!("{name}.frag")),
        )
    }

    pub fn draw_parameters(&self) -> DrawParameters<'static> {
        DrawParameters {
            polygon_mode: if self.wireframe {
                PolygonMode::Line
            } else {
                PolygonMode::Fill
            },
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            width: 800,
            height: 600,
            title: None,
            wireframe: false,
            log_level: LevelFilter::Info,
        }
    }
}
