//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in playfield coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// A single filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Craft silhouette: apex at the top, base at the bottom
pub fn ship_up(center: Vec2, width: f32, height: f32, color: [f32; 4]) -> [Vertex; 3] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    triangle(
        Vec2::new(center.x, center.y - hh),
        Vec2::new(center.x - hw, center.y + hh),
        Vec2::new(center.x + hw, center.y + hh),
        color,
    )
}

/// Enemy silhouette: apex pointing down toward the player
pub fn ship_down(center: Vec2, width: f32, height: f32, color: [f32; 4]) -> [Vertex; 3] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    triangle(
        Vec2::new(center.x, center.y + hh),
        Vec2::new(center.x - hw, center.y - hh),
        Vec2::new(center.x + hw, center.y - hh),
        color,
    )
}

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.x, top_left.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
