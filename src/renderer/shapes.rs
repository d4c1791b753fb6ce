//! Shape generation for 2D primitives
//!
//! Turns a `RenderSnapshot` into colored triangles in clip space. Text (the
//! score) and sprites are left to the host.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, Rect, RenderSnapshot};

/// Map a screen-space point (y down) to clip space (y up, [-1, 1])
fn to_clip(point: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(point.x / screen.x * 2.0 - 1.0, 1.0 - point.y / screen.y * 2.0)
}

fn tint(color: [f32; 4], by: [f32; 4]) -> [f32; 4] {
    [color[0] * by[0], color[1] * by[1], color[2] * by[2], color[3] * by[3]]
}

/// Two triangles covering a screen-space rectangle
pub fn rect_quad(rect: &Rect, screen: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let tl = to_clip(rect.min, screen);
    let br = to_clip(rect.max, screen);
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Vertices for a whole frame: background, pipes, then the player on top
pub fn frame_vertices(snapshot: &RenderSnapshot) -> Vec<Vertex> {
    let screen = snapshot.background.max;
    let dim = if snapshot.phase == GamePhase::GameOver {
        colors::GAME_OVER_DIM
    } else {
        [1.0; 4]
    };

    let mut vertices = Vec::with_capacity((2 + snapshot.pipes.len() * 2) * 6);
    vertices.extend(rect_quad(&snapshot.background, screen, tint(colors::SKY, dim)));

    for pipe in &snapshot.pipes {
        let (top, bottom) = snapshot.pipe_rects(pipe);
        for rect in [top, bottom] {
            // Zero-height pipe when the gap touches the screen edge
            if rect.height() > 0.0 {
                vertices.extend(rect_quad(&rect, screen, tint(colors::PIPE, dim)));
            }
        }
    }

    vertices.extend(rect_quad(&snapshot.player, screen, tint(colors::PLAYER, dim)));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, snapshot};

    #[test]
    fn test_full_screen_quad_covers_clip_space() {
        let screen = Vec2::new(480.0, 800.0);
        let quad = rect_quad(&Rect::new(0.0, 0.0, 480.0, 800.0), screen, colors::SKY);
        assert_eq!(quad[0].position, [-1.0, 1.0]);
        assert_eq!(quad[5].position, [1.0, -1.0]);
    }

    #[test]
    fn test_frame_vertex_count() {
        let mut state = GameState::with_defaults(4, 480.0, 800.0).unwrap();
        let snap = snapshot(&mut state);
        // Background and player only
        assert_eq!(frame_vertices(&snap).len(), 12);

        state.distance_traveled = 0.0;
        let snap = snapshot(&mut state);
        let drawn_pipes: usize = snap
            .pipes
            .iter()
            .map(|p| {
                let (top, bottom) = snap.pipe_rects(p);
                [top, bottom].iter().filter(|r| r.height() > 0.0).count()
            })
            .sum();
        assert_eq!(frame_vertices(&snap).len(), 12 + drawn_pipes * 6);
    }

    #[test]
    fn test_game_over_dims_colors() {
        let mut state = GameState::with_defaults(4, 480.0, 800.0).unwrap();
        state.phase = GamePhase::GameOver;
        let snap = snapshot(&mut state);
        let vertices = frame_vertices(&snap);
        let player = vertices.last().unwrap();
        assert_eq!(player.color, tint(colors::PLAYER, colors::GAME_OVER_DIM));
    }
}
