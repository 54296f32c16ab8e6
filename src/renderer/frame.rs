//! Frame assembly
//!
//! Turns a read-only view of the game state into one triangle list. The
//! starfield is re-rolled every frame, so it flickers; nothing about it is
//! kept between frames.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::STAR_MAX_RADIUS;
use crate::sim::{GameState, RandomSource};

/// Segments used for each star dot
const STAR_SEGMENTS: u32 = 6;

/// Build the vertices for the current state, back to front
pub fn build_frame(state: &GameState, stars: &mut impl RandomSource) -> Vec<Vertex> {
    let star_count = state.tuning.star_count;
    let mut vertices = Vec::with_capacity(
        star_count * STAR_SEGMENTS as usize * 3
            + 3
            + state.player.projectiles.len() * 6
            + state.enemies.len() * 3,
    );

    let field = state.playfield;
    for _ in 0..star_count {
        let center = Vec2::new(stars.next_unit() * field.width, stars.next_unit() * field.height);
        let radius = stars.next_unit() * STAR_MAX_RADIUS;
        vertices.extend(shapes::circle(center, radius, colors::STAR, STAR_SEGMENTS));
    }

    let player = &state.player;
    vertices.extend(shapes::ship_up(
        player.pos,
        player.width,
        player.height,
        colors::PLAYER,
    ));

    for projectile in &player.projectiles {
        let top_left = Vec2::new(
            projectile.pos.x - projectile.width / 2.0,
            projectile.pos.y - projectile.height,
        );
        vertices.extend(shapes::rect(
            top_left,
            Vec2::new(projectile.width, projectile.height),
            colors::PROJECTILE,
        ));
    }

    for enemy in &state.enemies {
        vertices.extend(shapes::ship_down(
            enemy.pos,
            enemy.width,
            enemy.height,
            colors::ENEMY,
        ));
    }

    vertices
}
