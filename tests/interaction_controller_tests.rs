use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use transfer_rs::ChartError;
use transfer_rs::api::{EditorConfig, InteractionController, bind_interaction};
use transfer_rs::core::{DataPoint, DrawArea, GradientStop, Normalization, PointSequence, Rgb};
use transfer_rs::extensions::FnListener;
use transfer_rs::interaction::{InteractionEvent, InteractionEventKind, InteractionMode, PointerButton};
use transfer_rs::render::NullRenderer;

fn renderer() -> NullRenderer {
    NullRenderer::new(DrawArea::sized(100.0, 100.0))
}

fn palette() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.0, Rgb::new(255.0, 0.0, 0.0)),
        GradientStop::new(1.0, Rgb::new(0.0, 0.0, 255.0)),
    ]
}

fn diagonal_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(0.5, 0.5),
        DataPoint::new(1.0, 1.0),
    ]
}

fn curve_controller(config: EditorConfig) -> InteractionController<NullRenderer> {
    InteractionController::from_seed(renderer(), diagonal_points(), palette(), config)
        .expect("controller init")
}

fn recording(
    controller: &mut InteractionController<NullRenderer>,
) -> Rc<RefCell<Vec<InteractionEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    controller
        .register_listener(Box::new(FnListener::new("recorder", move |event: &InteractionEvent| {
            sink.borrow_mut().push(event.clone());
        })))
        .expect("register listener");
    events
}

#[test]
fn press_drag_release_moves_point_and_emits_sequence() {
    let mut controller = curve_controller(EditorConfig::curve());
    let events = recording(&mut controller);

    let down = controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    assert_eq!(down, Some(InteractionEventKind::PointerDown { index: 1 }));
    assert_eq!(controller.interaction_mode(), InteractionMode::Dragging);

    let moved = controller.pointer_move(60.0, 30.0);
    assert_eq!(moved, Some(InteractionEventKind::PointerMove { index: 1 }));
    let point = controller.sequence().point(1).expect("point");
    assert_abs_diff_eq!(point.x, 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(point.y, 0.7, epsilon = 1e-12);

    let up = controller.pointer_up().expect("drag ends");
    match up {
        InteractionEventKind::PointerUp { index, x, y } => {
            assert_eq!(index, 1);
            assert_abs_diff_eq!(x, 0.6, epsilon = 1e-12);
            assert_abs_diff_eq!(y, 0.7, epsilon = 1e-12);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);

    let events = events.borrow();
    let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], InteractionEventKind::PointerDown { index: 1 }));
    assert!(matches!(kinds[1], InteractionEventKind::PointerMove { index: 1 }));
    assert!(matches!(kinds[2], InteractionEventKind::PointerUp { index: 1, .. }));
    assert_abs_diff_eq!(events[1].labels[1], 0.6, epsilon = 1e-12);
    assert_eq!(events[1].labels.len(), events[1].values.len());
    assert!(!events[1].gradient.is_empty());
    assert_eq!(controller.renderer().commit_count, 3);
}

#[test]
fn drag_is_held_one_pixel_inside_neighbours() {
    let mut controller = curve_controller(EditorConfig::curve());

    controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    controller.pointer_move(150.0, 50.0);
    assert_abs_diff_eq!(controller.sequence().labels()[1], 0.99, epsilon = 1e-12);

    controller.pointer_move(-20.0, 50.0);
    assert_abs_diff_eq!(controller.sequence().labels()[1], 0.01, epsilon = 1e-12);
    assert!(controller.sequence().labels().windows(2).all(|p| p[0] < p[1]));
}

#[test]
fn dragging_an_anchor_only_changes_y() {
    let mut controller = curve_controller(EditorConfig::curve());

    let down = controller.pointer_down(0.0, 100.0, PointerButton::Primary);
    assert_eq!(down, Some(InteractionEventKind::PointerDown { index: 0 }));
    controller.pointer_move(30.0, 40.0);

    let anchor = controller.sequence().point(0).expect("anchor");
    assert_eq!(anchor.x, 0.0);
    assert_abs_diff_eq!(anchor.y, 0.6, epsilon = 1e-12);
}

#[test]
fn drag_clamps_y_into_domain() {
    let mut controller = curve_controller(EditorConfig::curve());

    controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    controller.pointer_move(50.0, -40.0);
    assert_eq!(controller.sequence().values()[1], 1.0);

    let mut free = curve_controller(EditorConfig::curve().with_clamp_y_to_domain(false));
    free.pointer_down(50.0, 50.0, PointerButton::Primary);
    free.pointer_move(50.0, -40.0);
    assert_abs_diff_eq!(free.sequence().values()[1], 1.4, epsilon = 1e-12);
}

#[test]
fn primary_click_on_empty_space_adds_point() {
    let mut controller = curve_controller(EditorConfig::curve());
    let events = recording(&mut controller);

    let added = controller
        .pointer_down(25.0, 75.0, PointerButton::Primary)
        .expect("point added");
    match added {
        InteractionEventKind::AddPoint { index, x, y } => {
            assert_eq!(index, 1);
            assert_abs_diff_eq!(x, 0.25, epsilon = 1e-12);
            assert_abs_diff_eq!(y, 0.25, epsilon = 1e-12);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(controller.sequence().len(), 4);
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(events.borrow()[0].labels.len(), 4);
}

#[test]
fn added_point_y_is_clamped() {
    let mut controller = curve_controller(EditorConfig::curve());

    let added = controller.pointer_down(25.0, -50.0, PointerButton::Primary);
    assert!(matches!(
        added,
        Some(InteractionEventKind::AddPoint { index: 1, y, .. }) if y == 1.0
    ));
}

#[test]
fn click_outside_domain_is_ignored() {
    let mut controller = curve_controller(EditorConfig::curve());

    assert_eq!(controller.pointer_down(150.0, 50.0, PointerButton::Primary), None);
    assert_eq!(controller.sequence().len(), 3);
    assert_eq!(controller.renderer().commit_count, 0);
}

#[test]
fn secondary_click_removes_non_anchor_point() {
    let mut controller = curve_controller(EditorConfig::curve());
    let events = recording(&mut controller);

    assert_eq!(
        controller.pointer_down(50.0, 50.0, PointerButton::Secondary),
        Some(InteractionEventKind::RemovePoint { index: 1 })
    );
    assert_eq!(controller.sequence().labels(), &[0.0, 1.0]);

    assert_eq!(controller.pointer_down(0.0, 100.0, PointerButton::Secondary), None);
    assert_eq!(controller.pointer_down(30.0, 30.0, PointerButton::Secondary), None);
    assert_eq!(controller.sequence().len(), 2);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn epsilon_override_widens_hit_radius() {
    let mut default_radius = curve_controller(EditorConfig::curve());
    assert!(matches!(
        default_radius.pointer_down(40.0, 60.0, PointerButton::Primary),
        Some(InteractionEventKind::AddPoint { .. })
    ));

    let mut wide = curve_controller(EditorConfig::curve().with_epsilon(0.05));
    assert_eq!(
        wide.pointer_down(40.0, 60.0, PointerButton::Primary),
        Some(InteractionEventKind::PointerDown { index: 1 })
    );
}

#[test]
fn pointer_leave_ends_drag_like_release() {
    let mut controller = curve_controller(EditorConfig::curve());

    controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    assert!(controller.cursor().is_some());

    let left = controller.pointer_leave();
    assert!(matches!(left, Some(InteractionEventKind::PointerUp { index: 1, .. })));
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(controller.cursor(), None);

    assert_eq!(controller.pointer_move(70.0, 20.0), None);
    assert_eq!(controller.pointer_leave(), None);
    assert_eq!(controller.sequence().labels()[1], 0.5);
}

#[test]
fn hover_updates_cursor_without_events() {
    let mut controller = curve_controller(EditorConfig::curve());
    let events = recording(&mut controller);

    let position = controller.pointer_hover(20.0, 80.0).expect("position");
    assert_abs_diff_eq!(position.x, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(position.y, 0.2, epsilon = 1e-12);
    assert_eq!(controller.cursor(), Some(position));
    assert_eq!(controller.pointer_move(30.0, 30.0), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn guide_lines_follow_active_point() {
    let mut controller = curve_controller(EditorConfig::curve().with_guide_lines(true));

    controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    // Point at pixel y 50: dashes of 2px every 4px from y 55 to the bottom.
    assert_eq!(controller.renderer().last_guide_line_count, 12);

    controller.pointer_up();
    assert_eq!(controller.renderer().last_guide_line_count, 0);

    let mut plain = curve_controller(EditorConfig::curve());
    plain.pointer_down(50.0, 50.0, PointerButton::Primary);
    assert_eq!(plain.renderer().last_guide_line_count, 0);
}

#[test]
fn detach_drops_listeners_and_ignores_input() {
    let mut controller = curve_controller(EditorConfig::curve());
    let events = recording(&mut controller);

    controller.pointer_down(50.0, 50.0, PointerButton::Primary);
    controller.detach();

    assert!(!controller.is_attached());
    assert_eq!(controller.listener_count(), 0);
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(controller.pointer_down(25.0, 75.0, PointerButton::Primary), None);
    assert_eq!(controller.pointer_move(60.0, 60.0), None);
    assert_eq!(controller.pointer_up(), None);
    assert_eq!(controller.sequence().len(), 3);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn invalid_draw_area_is_rejected_at_bind_time() {
    let renderer = NullRenderer::new(DrawArea::sized(0.0, 100.0));
    let err = InteractionController::from_seed(
        renderer,
        diagonal_points(),
        palette(),
        EditorConfig::curve(),
    )
    .err()
    .expect("must fail");
    assert!(matches!(err, ChartError::InvalidDrawArea { .. }));
}

#[test]
fn input_on_collapsed_surface_is_ignored() {
    let mut controller = curve_controller(EditorConfig::curve());
    controller.renderer_mut().draw_area = DrawArea::sized(100.0, 0.0);

    assert_eq!(controller.pointer_down(50.0, 50.0, PointerButton::Primary), None);
    assert!(controller.redraw().is_err());
}

#[test]
fn curve_seed_gets_anchors_at_domain_edges() {
    let config = EditorConfig::curve().with_bounds(transfer_rs::core::Bounds::new(
        DataPoint::new(0.0, 0.0),
        DataPoint::new(10.0, 1.0),
    ));
    let controller = InteractionController::from_seed(
        renderer(),
        vec![DataPoint::new(4.0, 0.5), DataPoint::new(6.0, 3.0)],
        palette(),
        config,
    )
    .expect("controller init");

    assert_eq!(controller.sequence().labels(), &[0.0, 4.0, 6.0, 10.0]);
    assert_eq!(controller.sequence().values(), &[0.0, 0.5, 1.0, 1.0]);
}

#[test]
fn bind_interaction_registers_callback_and_works_in_data_space() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let sequence = PointSequence::from_points(diagonal_points(), true);
    let mut controller = bind_interaction(
        renderer(),
        sequence,
        Normalization::unit(),
        EditorConfig::curve().with_opacity_weighted(false),
        FnListener::new("host", move |event: &InteractionEvent| {
            sink.borrow_mut().push(event.kind);
        }),
    )
    .expect("bind");

    assert!(controller.has_listener("host"));
    controller.pointer_down_at(DataPoint::new(0.5, 0.5), PointerButton::Primary);
    controller.pointer_move_to(DataPoint::new(0.55, 0.2));
    controller.pointer_up();

    assert_eq!(events.borrow().len(), 3);
    assert_eq!(controller.sequence().point(1), Some(DataPoint::new(0.55, 0.2)));
}

#[test]
fn gradient_stop_chart_keeps_palette_in_step_with_handles() {
    let palette = vec![
        GradientStop::new(0.0, Rgb::new(255.0, 0.0, 0.0)),
        GradientStop::new(0.5, Rgb::new(0.0, 255.0, 0.0)),
        GradientStop::new(1.0, Rgb::new(0.0, 0.0, 255.0)),
    ];
    let mut stops = InteractionController::from_seed(
        renderer(),
        Vec::new(),
        palette,
        EditorConfig::gradient_stops(),
    )
    .expect("stop chart");
    assert_eq!(stops.sequence().labels(), &[0.0, 0.5, 1.0]);

    // Handle height is fixed, so the pointer's y does not matter.
    assert_eq!(
        stops.pointer_down(50.0, 3.0, PointerButton::Primary),
        Some(InteractionEventKind::PointerDown { index: 1 })
    );
    stops.pointer_move(70.0, 90.0);
    stops.pointer_up();
    assert_abs_diff_eq!(stops.model().palette()[1].offset, 0.7, epsilon = 1e-12);
    assert_eq!(stops.sequence().values()[1], transfer_rs::api::STOP_HANDLE_HEIGHT);

    let added = stops.pointer_down(25.0, 10.0, PointerButton::Primary);
    assert!(matches!(added, Some(InteractionEventKind::AddPoint { index: 1, .. })));
    assert_eq!(stops.model().palette().len(), 4);
    assert_eq!(
        stops.model().palette()[1].color,
        transfer_rs::api::DEFAULT_STOP_COLOR
    );

    stops.pointer_down(25.0, 60.0, PointerButton::Secondary);
    assert_eq!(stops.model().palette().len(), 3);
    assert_eq!(stops.sequence().len(), 3);
}

#[test]
fn stop_chart_accepts_stops_outside_the_outer_handles() {
    let mut stops = InteractionController::from_seed(
        renderer(),
        Vec::new(),
        vec![
            GradientStop::new(0.2, Rgb::BLACK),
            GradientStop::new(0.8, Rgb::new(255.0, 255.0, 255.0)),
        ],
        EditorConfig::gradient_stops(),
    )
    .expect("stop chart");

    let before = stops.pointer_down_at(DataPoint::new(0.1, 0.001), PointerButton::Primary);
    assert!(matches!(before, Some(InteractionEventKind::AddPoint { index: 0, .. })));
    let after = stops.pointer_down_at(DataPoint::new(0.95, 0.001), PointerButton::Primary);
    assert!(matches!(after, Some(InteractionEventKind::AddPoint { index: 3, .. })));

    assert_eq!(stops.sequence().labels(), &[0.1, 0.2, 0.8, 0.95]);
    let palette = stops.model().palette();
    assert_eq!(palette.len(), 4);
    assert_abs_diff_eq!(palette[0].offset, 0.1, epsilon = 1e-12);
    assert_eq!(palette[1].color, Rgb::BLACK);
    assert_abs_diff_eq!(palette[3].offset, 0.95, epsilon = 1e-12);
}
