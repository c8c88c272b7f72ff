use approx::assert_relative_eq;
use chart_crosshair::api::{CrosshairConfig, CrosshairMode, CrosshairPlugin, HeadlessChartHost};
use chart_crosshair::core::{AxisPosition, LinearPlotGeometry, PixelPoint, Sample, Series};
use chart_crosshair::interaction::{PointerEvent, PointerEventKind};
use chart_crosshair::render::Color;

const OFFSET_LEFT: f64 = 10.0;
const OFFSET_TOP: f64 = 20.0;

fn build_host() -> HeadlessChartHost {
    let geometry = LinearPlotGeometry::new(400.0, 200.0)
        .expect("geometry")
        .with_offset(OFFSET_LEFT, OFFSET_TOP)
        .with_x_axis("x", 0.0, 10.0)
        .expect("x axis")
        .with_y_axis("y", 0.0, 100.0)
        .expect("y axis");
    HeadlessChartHost::new(geometry).with_series(Series::new(
        vec![
            Sample::new(1.0, 10.0),
            Sample::new(3.0, 30.0),
            Sample::new(5.0, 50.0),
        ],
        Color::rgb(0.0, 0.0, 1.0),
    ))
}

fn attached(config: CrosshairConfig, host: &mut HeadlessChartHost) -> CrosshairPlugin {
    let mut plugin = CrosshairPlugin::new(config).expect("plugin init");
    plugin.attach(host);
    plugin
}

fn move_to(plugin: &mut CrosshairPlugin, host: &mut HeadlessChartHost, x: f64, y: f64) {
    plugin.handle_pointer_event(host, PointerEvent::Move { x, y });
}

#[test]
fn pointer_move_tracks_position_minus_plot_offset() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    move_to(&mut plugin, &mut host, 110.0, 70.0);

    let state = plugin.crosshair_state();
    assert_eq!(state.position, Some(PixelPoint::new(100.0, 50.0)));
    assert_eq!(state.snapped_index, None);
    assert_eq!(host.redraw_requests(), 1);
}

#[test]
fn pointer_move_clamps_exactly_at_plot_bounds() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    move_to(&mut plugin, &mut host, 410.0, 220.0);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(400.0, 200.0))
    );

    move_to(&mut plugin, &mut host, 900.0, -50.0);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(400.0, 0.0))
    );

    move_to(&mut plugin, &mut host, OFFSET_LEFT, OFFSET_TOP);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(0.0, 0.0))
    );
}

#[test]
fn repeated_move_to_same_point_still_requests_redraw() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::VERTICAL), &mut host);

    move_to(&mut plugin, &mut host, 50.0, 50.0);
    move_to(&mut plugin, &mut host, 50.0, 50.0);

    assert_eq!(host.redraw_requests(), 2);
}

#[test]
fn pointer_leave_redraws_only_when_crosshair_was_visible() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert_eq!(host.redraw_requests(), 0);

    move_to(&mut plugin, &mut host, 110.0, 70.0);
    host.take_redraw_requests();

    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 1);

    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert_eq!(host.redraw_requests(), 1);
}

#[test]
fn nan_pointer_redraws_only_when_crosshair_was_visible() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    move_to(&mut plugin, &mut host, f64::NAN, 1.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 0);

    move_to(&mut plugin, &mut host, 110.0, 70.0);
    host.take_redraw_requests();

    move_to(&mut plugin, &mut host, 110.0, f64::NAN);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 1);

    move_to(&mut plugin, &mut host, f64::NAN, f64::NAN);
    assert_eq!(host.redraw_requests(), 1);
}

#[test]
fn infinite_pointer_is_pinned_to_plot_edge() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    move_to(&mut plugin, &mut host, f64::INFINITY, f64::NEG_INFINITY);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(400.0, 0.0))
    );
    assert_eq!(host.redraw_requests(), 1);
}

#[test]
fn locked_crosshair_ignores_pointer_until_unlocked() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);

    plugin.lock_crosshair(&mut host, Some(&AxisPosition::xy(5.0, 50.0)));
    let locked_position = plugin.crosshair_state().position;
    host.take_redraw_requests();

    move_to(&mut plugin, &mut host, 30.0, 30.0);
    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert_eq!(plugin.crosshair_state().position, locked_position);
    assert_eq!(host.redraw_requests(), 0);

    plugin.unlock_crosshair();
    move_to(&mut plugin, &mut host, 30.0, 30.0);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(20.0, 10.0))
    );
    assert_eq!(host.redraw_requests(), 1);
}

#[test]
fn region_selection_hides_crosshair_on_every_move() {
    let mut host = build_host();
    let mut plugin = attached(CrosshairConfig::new(CrosshairMode::BOTH), &mut host);
    move_to(&mut plugin, &mut host, 110.0, 70.0);
    host.take_redraw_requests();

    host.set_region_selection_active(true);
    move_to(&mut plugin, &mut host, 200.0, 100.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 1);

    move_to(&mut plugin, &mut host, 250.0, 120.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 1);

    host.set_region_selection_active(false);
    move_to(&mut plugin, &mut host, 250.0, 120.0);
    assert_eq!(
        plugin.crosshair_state().position,
        Some(PixelPoint::new(240.0, 100.0))
    );
}

#[test]
fn snapping_moves_crosshair_to_nearest_sample() {
    let mut host = build_host();
    let mut plugin = attached(
        CrosshairConfig::new(CrosshairMode::BOTH).with_snap_to_series(0),
        &mut host,
    );

    // x = 2.4 in data space: 0.6 from the sample at 3, 1.4 from the one at 1.
    move_to(&mut plugin, &mut host, OFFSET_LEFT + 96.0, 150.0);

    let state = plugin.crosshair_state();
    let position = state.position.expect("snapped position");
    assert_eq!(state.snapped_index, Some(1));
    assert_relative_eq!(position.x, 120.0, epsilon = 1e-9);
    assert_relative_eq!(position.y, 140.0, epsilon = 1e-9);
}

#[test]
fn snapping_breaks_exact_ties_towards_later_sample() {
    let mut host = build_host();
    let mut plugin = attached(
        CrosshairConfig::new(CrosshairMode::VERTICAL).with_snap_to_series(0),
        &mut host,
    );

    // x = 2.0: exactly halfway between the samples at 1 and 3.
    move_to(&mut plugin, &mut host, OFFSET_LEFT + 80.0, 100.0);

    assert_eq!(plugin.crosshair_state().snapped_index, Some(1));
}

#[test]
fn snapping_at_plot_edges_selects_series_ends() {
    let mut host = build_host();
    let mut plugin = attached(
        CrosshairConfig::new(CrosshairMode::VERTICAL).with_snap_to_series(0),
        &mut host,
    );

    move_to(&mut plugin, &mut host, -200.0, 100.0);
    assert_eq!(plugin.crosshair_state().snapped_index, Some(0));

    move_to(&mut plugin, &mut host, 2_000.0, 100.0);
    assert_eq!(plugin.crosshair_state().snapped_index, Some(2));
}

#[test]
fn snapping_to_empty_or_missing_series_hides_crosshair() {
    let mut host = build_host();
    let mut plugin = attached(
        CrosshairConfig::new(CrosshairMode::BOTH).with_snap_to_series(1),
        &mut host,
    );

    move_to(&mut plugin, &mut host, 110.0, 70.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 1);

    host.set_series(vec![Series::new(Vec::new(), Color::rgb(0.0, 0.0, 0.0))]);
    let mut plugin = attached(
        CrosshairConfig::new(CrosshairMode::BOTH).with_snap_to_series(0),
        &mut host,
    );
    move_to(&mut plugin, &mut host, 110.0, 70.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(plugin.crosshair_state().snapped_index, None);
}

#[test]
fn attach_and_detach_manage_pointer_subscriptions() {
    let mut host = build_host();
    let mut plugin =
        CrosshairPlugin::new(CrosshairConfig::new(CrosshairMode::BOTH)).expect("plugin init");

    plugin.attach(&mut host);
    plugin.attach(&mut host);
    assert!(plugin.is_attached());
    assert_eq!(host.subscription_count(), 2);
    assert!(host.is_subscribed(PointerEventKind::Move));
    assert!(host.is_subscribed(PointerEventKind::Leave));

    plugin.detach(&mut host);
    assert!(!plugin.is_attached());
    assert_eq!(host.subscription_count(), 0);

    move_to(&mut plugin, &mut host, 110.0, 70.0);
    assert!(!plugin.crosshair_state().is_active());
    assert_eq!(host.redraw_requests(), 0);
}

#[test]
fn disabled_mode_never_subscribes() {
    let mut host = build_host();
    let mut plugin = CrosshairPlugin::new(CrosshairConfig::default()).expect("plugin init");

    plugin.attach(&mut host);

    assert!(!plugin.is_attached());
    assert_eq!(host.subscription_count(), 0);
}
