//! Fixed vertex data drawn by the lessons.

use glium::implement_vertex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

implement_vertex!(PositionVertex, position);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

implement_vertex!(ColoredVertex, position, color);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coord: [f32; 2],
}

implement_vertex!(TexturedVertex, position, color, tex_coord);

const fn position(x: f32, y: f32, z: f32) -> PositionVertex {
    PositionVertex {
        position: [x, y, z],
    }
}

pub const TRIANGLE: [PositionVertex; 3] = [
    position(-0.5, -0.5, 0.0),
    position(0.5, -0.5, 0.0),
    position(0.0, 0.5, 0.0),
];

pub const RECTANGLE: [PositionVertex; 4] = [
    position(0.5, 0.5, 0.0),   // top right
    position(0.5, -0.5, 0.0),  // bottom right
    position(-0.5, -0.5, 0.0), // bottom left
    position(-0.5, 0.5, 0.0),  // top left
];

/// Two triangles sharing the bottom right to top left diagonal.
/// Also indexes [`TEXTURED_RECTANGLE`], which uses the same corner order.
pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub const COLORED_TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex {
        position: [0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    ColoredVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    ColoredVertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

pub const TEXTURED_RECTANGLE: [TexturedVertex; 4] = [
    TexturedVertex {
        position: [0.5, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
        tex_coord: [1.0, 1.0],
    },
    TexturedVertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
        tex_coord: [1.0, 0.0],
    },
    TexturedVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
        tex_coord: [0.0, 0.0],
    },
    TexturedVertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 1.0, 0.0],
        tex_coord: [0.0, 1.0],
    },
];

/// Horizontal offset in clip space, swinging between -0.5 and 0.5.
pub fn horizontal_offset(seconds: f32) -> f32 {
    seconds.sin() / 2.0
}
