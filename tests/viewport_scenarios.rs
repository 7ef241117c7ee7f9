use escape_viewport::{
    escape::escape_magnitude_at, screen, Config, FractalModel, NavEvent, Params, PassOutcome,
    Point, Rect, Session,
};

fn scenario_model() -> FractalModel {
    let params = Params {
        steps: 50,
        threshold: 1000.0,
        ..Params::default()
    };
    let mut model = FractalModel::new(screen::Size::new(4, 4), params, 2).unwrap();
    model.set_viewport(Rect::from_corners(
        Point::new(-2.5, -1.5),
        Point::new(1.0, 1.5),
    ));
    model
}

#[test]
fn classic_view_on_a_four_by_four_grid() {
    let mut model = scenario_model();

    assert_eq!(model.to_world(0.0, 0.0), Point::new(-2.5, -1.5));
    assert_eq!(model.recompute(), PassOutcome::Complete);
    assert_eq!(model.field().get(0, 0), 1000.0);

    let (row, col) = (2, 2);
    let world = model.to_world(col as f64 / 4.0, row as f64 / 4.0);
    assert_eq!(world, Point::new(-0.75, 0.0));

    let magnitude = model.field().get(row, col);
    assert!(magnitude < 2.0);
    assert_eq!(magnitude, escape_magnitude_at(world, 50, 1000.0));
}

#[test]
fn every_cell_matches_a_direct_evaluation() {
    let mut model = scenario_model();
    model.recompute();

    for row in 0..4 {
        for col in 0..4 {
            let world = model.to_world(col as f64 / 4.0, row as f64 / 4.0);
            assert_eq!(
                model.field().get(row, col).to_bits(),
                escape_magnitude_at(world, 50, 1000.0).to_bits()
            );
        }
    }
}

#[test]
fn tap_in_the_middle_recentres_exactly() {
    let mut model = scenario_model();
    let before = model.viewport();
    let target = model.to_world(0.5, 0.5);

    model.apply(NavEvent::Tap { x: 0.5, y: 0.5 });

    assert_eq!(model.viewport().centre(), target);
    assert_eq!(model.viewport().size(), before.size());
}

#[test]
fn zooming_in_changes_the_field() {
    let mut model = scenario_model();
    model.recompute();
    let wide = model.field().magnitudes().to_vec();

    model.apply(NavEvent::Scroll {
        x: 0.5,
        y: 0.5,
        dy: 1.0,
    });
    model.recompute();

    assert_ne!(wide, model.field().magnitudes());
}

#[test]
fn session_renders_a_full_frame() {
    let config = Config {
        width: 32,
        height: 24,
        tick_max: 10,
        threads: Some(3),
        params: Params::default(),
    };
    let mut session = Session::with_default_palette(&config).unwrap();
    let mut pixels = session.pixel_buffer();

    let report = session.frame(&mut pixels).unwrap();

    assert_eq!(report.outcome, PassOutcome::Complete);
    assert_eq!(pixels.len(), 32 * 24);
    assert!(pixels.iter().all(|pixel| pixel.a == 255));
    // escaped corners and the dark interior around the origin differ
    assert_ne!(pixels[0], pixels[12 * 32 + 16]);
}
