use branchwork::constants::{ALIVE_COLOR, BACKGROUND_COLOR, LIFE_DECAY_RATE};
use branchwork::{
    Canvas, FixedSource, GrowthEngine, PixelCanvas, SequenceSource, SimRandom, SimulationConfig,
    ViewTransform,
};
use glam::Vec2;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Runs frames the way the driver does: tick, clear if the view asked for it,
/// render.
fn run_frame<R: branchwork::RandomSource>(
    engine: &mut GrowthEngine<R>,
    view: &mut ViewTransform,
    canvas: &mut PixelCanvas,
) -> (bool, usize) {
    engine.tick();
    let cleared = view.take_clear_request();
    if cleared {
        canvas.fill(BACKGROUND_COLOR);
    }
    (cleared, engine.render(canvas, view))
}

#[test]
fn test_population_never_grows_when_draws_never_succeed() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(1.0));
    for _ in 0..200 {
        engine.tick();
    }
    assert_eq!(engine.len(), 1, "a draw of 1.0 never beats the propensity");
    let seed = &engine.organisms()[0];
    assert_eq!(seed.life(), 0.0);
    assert!(!seed.is_locked());
}

#[test]
fn test_always_zero_draws_place_child_exactly() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(0.0));
    let seed_orientation = engine.organisms()[0].orientation;
    assert_eq!(seed_orientation, 0.0);

    engine.tick();
    assert_eq!(engine.len(), 2);
    let child = &engine.organisms()[1];

    // rotation mutation -1, radius mutation -1, propensity mutation 0
    let orientation = -0.5_f32;
    let radius = 4.75_f32;
    let offset = (5.0 + radius) / 2.0;
    assert_eq!(child.orientation, orientation);
    assert_eq!(child.radius, radius);
    assert_eq!(child.reproduction_propensity, 0.5);
    assert_eq!(
        child.position,
        Vec2::new(400.0, 400.0) + offset * Vec2::new(orientation.sin(), orientation.cos())
    );
    assert!(!engine.organisms()[0].is_locked());
}

#[test]
fn test_decay_drives_life_to_zero_after_expected_ticks() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(1.0));
    let ticks = (1.0 / LIFE_DECAY_RATE).ceil() as usize;
    for _ in 0..ticks - 1 {
        engine.tick();
    }
    assert!(engine.organisms()[0].life() > 0.0);
    engine.tick();
    assert_eq!(engine.organisms()[0].life(), 0.0);
    for _ in 0..10 {
        engine.tick();
        assert_eq!(engine.organisms()[0].life(), 0.0);
    }
}

#[test]
fn test_random_run_keeps_invariants() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), SimRandom::seeded(1234));
    let mut locked_before: Vec<bool> = Vec::new();
    for _ in 0..250 {
        engine.tick();
        for (i, organism) in engine.organisms().iter().enumerate() {
            assert!((0.0..=1.0).contains(&organism.life()));
            assert!(organism.radius >= engine.config.min_radius);
            if locked_before.get(i).copied().unwrap_or(false) {
                assert!(organism.is_locked(), "lock flag must never clear");
            }
        }
        locked_before = engine.organisms().iter().map(|o| o.is_locked()).collect();
    }
    let stats = engine.stats();
    assert_eq!(stats.total, engine.len());
    assert!(stats.alive <= stats.total);
}

#[test]
fn test_zoom_and_pan_clear_twice() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(1.0));
    let mut view = ViewTransform::default();
    let mut canvas = PixelCanvas::new(800, 800, BACKGROUND_COLOR);
    let mut clears = 0;

    view.zoom_in();
    view.zoom_in();
    view.zoom_in();
    let (cleared, _) = run_frame(&mut engine, &mut view, &mut canvas);
    clears += cleared as usize;

    view.pan_by(10.0, 0.0);
    let (cleared, _) = run_frame(&mut engine, &mut view, &mut canvas);
    clears += cleared as usize;

    let (cleared, _) = run_frame(&mut engine, &mut view, &mut canvas);
    clears += cleared as usize;

    assert_eq!(clears, 2);
}

#[test]
fn test_dead_population_redraws_only_on_view_change() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(1.0));
    let mut view = ViewTransform::default();
    let mut canvas = PixelCanvas::new(800, 800, BACKGROUND_COLOR);

    // live frames always draw
    let (_, drawn) = run_frame(&mut engine, &mut view, &mut canvas);
    assert_eq!(drawn, 1);
    for _ in 0..120 {
        run_frame(&mut engine, &mut view, &mut canvas);
    }
    assert_eq!(engine.stats().alive, 0);
    let (_, drawn) = run_frame(&mut engine, &mut view, &mut canvas);
    assert_eq!(drawn, 0);

    // pan clears the canvas and forces the dead seed to redraw at its new place
    view.pan_by(-100.0, 0.0);
    let (cleared, drawn) = run_frame(&mut engine, &mut view, &mut canvas);
    assert!(cleared);
    assert_eq!(drawn, 1);
    assert_ne!(canvas.pixel(300, 400), Some(BACKGROUND_COLOR));
    assert_eq!(canvas.pixel(400, 400), Some(BACKGROUND_COLOR));
}

#[test]
fn test_newborns_paint_over_parents() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(0.0));
    let mut view = ViewTransform::default();
    let mut canvas = PixelCanvas::new(800, 800, BACKGROUND_COLOR);
    for _ in 0..3 {
        run_frame(&mut engine, &mut view, &mut canvas);
    }
    let newest = engine.organisms().last().expect("population is never empty");
    let screen = view.world_to_screen(newest.position);
    assert_eq!(
        canvas.pixel(screen.x as u32, screen.y as u32),
        Some(ALIVE_COLOR)
    );
}

#[test]
fn test_zoomed_render_scales_position_and_radius() {
    let mut engine = GrowthEngine::with_source(SimulationConfig::default(), FixedSource(1.0));
    let mut view = ViewTransform::default();
    for _ in 0..10_000 {
        view.zoom_out();
    }
    assert!(approx_eq(view.zoom(), 0.01, 1e-6));
    let mut canvas = PixelCanvas::new(800, 800, BACKGROUND_COLOR);
    run_frame(&mut engine, &mut view, &mut canvas);
    // (400 + 0) * 0.01 = 4, radius floors at one pixel
    assert_ne!(canvas.pixel(4, 4), Some(BACKGROUND_COLOR));
    assert_eq!(canvas.pixel(6, 4), Some(BACKGROUND_COLOR));
}

#[test]
fn test_reset_after_growth_restores_single_seed() {
    let mut engine = GrowthEngine::with_source(
        SimulationConfig::default(),
        SequenceSource::new(vec![0.0, 0.01, 0.3, 0.7, 0.2, 0.45]),
    );
    for _ in 0..40 {
        engine.tick();
    }
    assert!(engine.len() > 1);
    engine.reset();
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.stats().alive, 1);
    assert_eq!(engine.organisms()[0].position, Vec2::new(400.0, 400.0));
}

#[test]
fn test_population_cap_bounds_dead_history() {
    let config = SimulationConfig::default().with_population_cap(50);
    let mut engine = GrowthEngine::with_source(config, SimRandom::seeded(99));
    for _ in 0..400 {
        engine.tick();
        let stats = engine.stats();
        // only living organisms may push the population past the cap
        if stats.total > 50 {
            assert_eq!(stats.total, stats.alive);
        }
    }
}
