pub mod application;
pub mod colors;
pub mod config;
pub mod context;
pub mod debug;
pub mod geometry;
pub mod input;
pub mod run;
pub mod shader;
pub mod texture;
