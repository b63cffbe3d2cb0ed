//! Render-loop containment: failure isolation, clear-per-frame, and the
//! destroyed terminal state.

mod support;

use easel_scene::{SceneArena, ShapeId, ShapeKind, ShapeNode};
use easel_surface::{FrameState, Surface, SurfaceConfig};
use kurbo::Rect;
use peniko::Color;
use support::{Command, MemoryBackend};

fn scene_with_one_filled_rect() -> SceneArena {
    let mut scene = SceneArena::new();
    let mut node = ShapeNode::new(
        ShapeId::intern("card"),
        ShapeKind::Rect,
        Rect::new(10.0, 10.0, 110.0, 60.0),
    );
    node.fill = Some(Color::from_rgb8(30, 120, 220));
    scene.add_child(scene.root(), node);
    scene
}

fn surface() -> Surface<SceneArena, MemoryBackend> {
    Surface::new(
        scene_with_one_filled_rect(),
        MemoryBackend::with_bbox(Rect::new(0.0, 0.0, 400.0, 300.0)),
        SurfaceConfig::new(400.0, 300.0).with_pixel_ratio(2.0),
    )
}

#[test]
fn frame_clears_then_paints() {
    let mut surface = surface();
    surface.render_frame();

    let commands = &surface.backend().ctx.commands;
    assert_eq!(commands.len(), 2);
    // Clear covers the whole device-pixel buffer, and comes first.
    assert_eq!(commands[0], Command::Clear(Rect::new(0.0, 0.0, 800.0, 600.0)));
    assert_eq!(commands[1], Command::FillRect(Rect::new(10.0, 10.0, 110.0, 60.0)));
    assert_eq!(surface.frame_state(), FrameState::Idle);
}

#[test]
fn draw_failure_on_frame_n_does_not_stop_frame_n_plus_one() {
    let mut surface = surface();

    surface.backend_mut().ctx.fail_fills = Some("gpu context reset".to_string());
    surface.render_frame();

    // The failed frame still cleared exactly once, painted nothing, and
    // returned the loop to idle.
    assert_eq!(surface.backend().ctx.clears(), 1);
    assert_eq!(surface.backend().ctx.paints(), 0);
    assert_eq!(surface.frame_state(), FrameState::Idle);

    surface.backend_mut().ctx.fail_fills = None;
    surface.render_frame();

    assert_eq!(surface.backend().ctx.clears(), 2);
    assert_eq!(surface.backend().ctx.paints(), 1);
    assert_eq!(surface.frame_state(), FrameState::Idle);
}

#[test]
fn every_frame_clears_exactly_once() {
    let mut surface = surface();
    for _ in 0..5 {
        surface.render_frame();
    }
    assert_eq!(surface.backend().ctx.clears(), 5);
}

#[test]
fn destroyed_surface_never_clears_or_draws_again() {
    let mut surface = surface();
    surface.render_frame();
    assert_eq!(surface.backend().ctx.clears(), 1);

    surface.destroy();
    assert!(surface.is_destroyed());
    assert!(surface.backend().detached);

    for _ in 0..3 {
        surface.render_frame();
    }
    assert_eq!(surface.backend().ctx.clears(), 1);
    assert_eq!(surface.backend().ctx.paints(), 1);

    // Idempotent teardown.
    surface.destroy();
    assert!(surface.is_destroyed());
}
