use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glium::glutin::surface::WindowSurface;
use glium::program::{ProgramCreationError, ShaderType};
use glium::{Display, Program};
use log::{error, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Other,
}

impl From<ShaderType> for ShaderStage {
    fn from(shader_type: ShaderType) -> Self {
        match shader_type {
            ShaderType::Vertex => Self::Vertex,
            ShaderType::Fragment => Self::Fragment,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "VERTEX"),
            Self::Fragment => write!(f, "FRAGMENT"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug)]
pub enum ShaderError {
    Read { path: PathBuf, source: io::Error },
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
    Unsupported(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "The shader {:?} could not be read: {}", path, source)
            }
            Self::Compile { stage, log } => {
                write!(f, "SHADER_COMPILATION_ERROR of type: {}\n{}", stage, log)
            }
            Self::Link { log } => write!(f, "PROGRAM_LINKING_ERROR\n{}", log),
            Self::Unsupported(reason) => write!(f, "The shader program is not supported: {}", reason),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ProgramCreationError> for ShaderError {
    fn from(error: ProgramCreationError) -> Self {
        match error {
            ProgramCreationError::CompilationError(log, shader_type) => Self::Compile {
                stage: shader_type.into(),
                log,
            },
            ProgramCreationError::LinkingError(log) => Self::Link { log },
            other => Self::Unsupported(other.to_string()),
        }
    }
}

pub fn program_from_source(
    display: &Display<WindowSurface>,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<Program, ShaderError> {
    Program::from_source(display, vertex_source, fragment_source, None)
        .map_err(ShaderError::from)
        .inspect_err(|error| error!("{}", error))
}

pub fn program_from_files(
    display: &Display<WindowSurface>,
    vertex_source_path: &Path,
    fragment_source_path: &Path,
) -> Result<Program, ShaderError> {
    info!(
        "Building shader program from {:?} and {:?}",
        vertex_source_path, fragment_source_path
    );

    let vertex_source = read_source(vertex_source_path)?;
    let fragment_source = read_source(fragment_source_path)?;

    program_from_source(display, &vertex_source, &fragment_source)
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}
