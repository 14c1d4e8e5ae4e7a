use disk_dynamics::{Disk, Engine, EngineConfig, StepController, Vector2};

use std::thread::sleep;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A handful of large disks in a square container
    let config = EngineConfig {
        min_radius: 0.04,
        max_radius: 0.08,
        spawn_limit: 12,
        gravity: 2.0,
        restitution: 0.8,
        initial_aspect_ratio: 1.0,
        initial_window_height: 720.0,
        spawn_rate: 0.0,
        correction_iterations: 4,
    };

    let mut engine = Engine::new(config)?;
    engine.set_world_bounds(1.0, 1.0);

    // One immovable disk near the floor for the others to bounce off
    engine.add_disk(Disk::fixed(Vector2::new(0.0, -0.5), 0.08).with_color(0.9, 0.4, 0.4))?;

    let mut controller = StepController::new(engine, 60.0)?;

    let frame_time = Duration::from_millis(16);
    let mut last_time = Instant::now();

    loop {
        let now = Instant::now();
        let delta = now.duration_since(last_time).as_secs_f64();
        last_time = now;

        controller.advance(delta);

        // Print the first few disk states
        print!("\x1B[2J\x1B[1;1H"); // Clear terminal
        println!("Bouncing Disks Simulation");
        println!("-------------------------");
        println!(
            "t = {:.2} s, {} disks, alpha = {:.2}",
            controller.simulation_time(),
            controller.engine().disk_count(),
            controller.interpolation_factor()
        );

        let snapshot = controller.engine().snapshot();
        for i in 0..snapshot.count.min(8) {
            println!(
                "Disk {}: pos=({:+.3}, {:+.3}), vel=({:+.3}, {:+.3}), r={:.3}",
                i,
                snapshot.positions_x[i],
                snapshot.positions_y[i],
                snapshot.velocities_x[i],
                snapshot.velocities_y[i],
                snapshot.radii[i]
            );
        }

        sleep(frame_time);

        if controller.simulation_time() > 10.0 {
            break;
        }
    }

    Ok(())
}
