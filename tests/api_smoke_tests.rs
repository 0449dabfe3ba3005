use transfer_rs::api::{EditorConfig, InteractionController};
use transfer_rs::core::{DataPoint, GradientStop, Rgb};
use transfer_rs::interaction::{InteractionMode, PointerButton};
use transfer_rs::render::NullRenderer;

#[test]
fn editor_smoke_flow() {
    let renderer = NullRenderer::default();
    let mut controller = InteractionController::from_seed(
        renderer,
        vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(128.0, 0.5),
            DataPoint::new(255.0, 1.0),
        ],
        vec![
            GradientStop::new(0.0, Rgb::BLACK),
            GradientStop::new(1.0, Rgb::new(255.0, 255.0, 255.0)),
        ],
        EditorConfig::curve().with_guide_lines(true),
    )
    .expect("controller init");

    controller.redraw().expect("initial render");
    assert_eq!(controller.renderer().last_point_count, 3);

    // 800x600 surface over x in [0, 255] and y in [0, 1].
    let (px, py) = controller
        .normalization()
        .data_to_pixel(DataPoint::new(128.0, 0.5), controller.renderer().draw_area);
    controller.pointer_down(px, py, PointerButton::Primary);
    assert_eq!(controller.interaction_mode(), InteractionMode::Dragging);
    assert!(controller.renderer().last_guide_line_count > 0);

    controller.pointer_move(px + 40.0, py - 60.0);
    controller.pointer_up();
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);

    controller.pointer_down(200.0, 500.0, PointerButton::Primary);
    assert_eq!(controller.sequence().len(), 4);
    assert_eq!(controller.renderer().last_point_count, 4);
    assert_eq!(controller.renderer().last_ramp_stop_count, 4);

    // The click landed left of the dragged point, which is now third.
    let point = controller.sequence().point(2).expect("point");
    assert!(point.x > 128.0);
    assert!(point.y > 0.5);
    assert!(controller.renderer().commit_count >= 5);
}

#[test]
fn telemetry_init_is_safe_to_call_repeatedly() {
    let _ = transfer_rs::telemetry::init_default_tracing();
    assert!(!transfer_rs::telemetry::init_tracing_with_filter("transfer_rs=trace"));
}
