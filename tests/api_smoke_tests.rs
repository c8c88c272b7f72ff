use chart_crosshair::api::{CrosshairConfig, CrosshairPlugin, HeadlessChartHost};
use chart_crosshair::core::{AxisPosition, LinearPlotGeometry, Sample, Series};
use chart_crosshair::interaction::PointerEvent;
use chart_crosshair::render::{Color, RecordingSurface};

#[test]
fn crosshair_smoke_flow() {
    let geometry = LinearPlotGeometry::new(800.0, 600.0)
        .expect("geometry")
        .with_offset(40.0, 10.0)
        .with_x_axis("x", 0.0, 100.0)
        .expect("x axis")
        .with_y_axis("y", 10.0, 50.0)
        .expect("y axis");
    let mut host = HeadlessChartHost::new(geometry).with_series(Series::new(
        vec![
            Sample::new(10.0, 20.0),
            Sample::new(20.0, 30.0),
            Sample::new(30.0, 40.0),
        ],
        Color::rgb(0.2, 0.4, 0.8),
    ));
    let config = CrosshairConfig::from_json_compat_str(r#"{ "mode": "xyd", "snap_to_series_index": 0 }"#)
        .expect("config");
    let mut plugin = CrosshairPlugin::new(config).expect("plugin init");
    plugin.attach(&mut host);

    plugin.handle_pointer_event(&mut host, PointerEvent::Move { x: 200.0, y: 300.0 });
    assert_eq!(plugin.crosshair_state().snapped_index, Some(1));

    let mut surface = RecordingSurface::new();
    plugin.draw_overlay(&host, &mut surface).expect("overlay");
    assert_eq!(surface.lines().count(), 2);
    assert_eq!(surface.markers().count(), 1);
    assert_eq!(surface.depth(), 0);

    plugin.lock_crosshair(&mut host, Some(&AxisPosition::xy(30.0, 40.0)));
    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert!(plugin.crosshair_state().is_active());

    plugin.unlock_crosshair();
    plugin.handle_pointer_event(&mut host, PointerEvent::Leave);
    assert!(!plugin.crosshair_state().is_active());

    plugin.detach(&mut host);
    assert_eq!(host.subscription_count(), 0);
}
