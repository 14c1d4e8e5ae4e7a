use disk_dynamics::{Engine, EngineConfig, StepController};

use std::time::Instant;

/// Headless stress run: spawns disks continuously and reports once a second
/// how the engine and the adaptive step rate hold up.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig {
        min_radius: 4.0 / 1080.0,
        max_radius: 10.0 / 1080.0,
        spawn_limit: 50_000,
        gravity: 98.1,
        restitution: 0.7,
        initial_aspect_ratio: 16.0 / 9.0,
        initial_window_height: 1080.0,
        spawn_rate: 2000.0,
        correction_iterations: 4,
    };
    let aspect_ratio = config.initial_aspect_ratio;

    let mut engine = Engine::new(config)?;
    engine.set_world_bounds(aspect_ratio, 1.0);

    let mut controller = StepController::new(engine, 120.0)?.with_adaptive_frequency();

    let started = Instant::now();
    let mut last_time = started;
    let mut last_report = started;
    let mut steps = 0;
    let mut collision_checks = 0;

    while started.elapsed().as_secs_f64() < 30.0 {
        let now = Instant::now();
        let delta = now.duration_since(last_time).as_secs_f64();
        last_time = now;

        let report = controller.advance(delta);
        steps += report.steps;
        collision_checks += report.collision_checks;

        if now.duration_since(last_report).as_secs_f64() >= 1.0 {
            println!(
                "{} disks, {} steps/s, {} collision checks/s, physics at {:.0} Hz",
                controller.engine().disk_count(),
                steps,
                collision_checks,
                controller.active_frequency()
            );
            steps = 0;
            collision_checks = 0;
            last_report = now;
        }
    }

    Ok(())
}
