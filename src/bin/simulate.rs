use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

use flightmodel::{
    components::{Aircraft, AircraftConfig, AircraftSource, ControlInput},
    plugins::{spawn_aircraft, FlightModelPlugin, FlightSet},
    resources::{EnvironmentConfig, PhysicsConfig},
    systems::TelemetryEvent,
};

/// Fly one aircraft headless at the fixed physics rate and report its telemetry.
#[derive(Parser, Debug, Clone)]
#[command(name = "flightmodel_sim", version)]
struct Args {
    /// YAML aircraft file; the built-in trainer when omitted
    config: Option<PathBuf>,

    /// Engine throttle [0-1]; keeps the configured value when omitted
    #[arg(long)]
    throttle: Option<f64>,

    /// Roll input [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    roll: f64,

    /// Pitch input [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f64,

    /// Yaw input [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f64,

    /// Simulated duration [s]
    #[arg(long, default_value_t = 10.0, value_parser = parse_duration)]
    seconds: f64,

    /// Initial height above the origin [m]
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    altitude: f64,

    /// Initial forward speed [m/s]
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    speed: f64,

    /// Print telemetry as JSON lines instead of log messages
    #[arg(long)]
    json: bool,
}

impl Args {
    fn controls(&self) -> ControlInput {
        ControlInput::new(self.roll, self.yaw, self.pitch)
    }
}

fn parse_duration(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("must be a non-negative number of seconds, got {raw}"))
    }
}

fn print_json_telemetry(mut telemetry_events: EventReader<TelemetryEvent>) {
    for event in telemetry_events.read() {
        match serde_json::to_string(&event.telemetry) {
            Ok(line) => println!("{line}"),
            Err(e) => error!("Failed to encode telemetry: {e}"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AircraftConfig::new(AircraftSource::from(args.config.clone()))?;
    let physics = PhysicsConfig::default();
    let environment = EnvironmentConfig::default();

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin::default(),
        FlightModelPlugin::new(environment, physics),
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        physics.timestep,
    )));

    if args.json {
        app.add_systems(FixedUpdate, print_json_telemetry.after(FlightSet::Step));
    }

    let entity = spawn_aircraft(app.world_mut(), &config)?;
    if let Some(mut aircraft) = app.world_mut().get_mut::<Aircraft>(entity) {
        aircraft.rigid_body.position.y = args.altitude;
        aircraft.rigid_body.velocity.x = args.speed;
        if let Some(throttle) = args.throttle {
            aircraft.set_throttle(throttle);
        }
        aircraft.set_controls(args.controls());
    }

    let steps = (args.seconds / physics.timestep).round() as u64;
    info!(
        "Simulating {} for {:.1} s ({} steps)",
        config.name, args.seconds, steps
    );

    // The first update only starts the manual clock; it runs no fixed step.
    app.update();
    for _ in 0..steps {
        app.update();
    }

    if let Some(aircraft) = app.world().get::<Aircraft>(entity) {
        let pose = aircraft.pose();
        if args.json {
            println!("{}", serde_json::to_string(&pose)?);
        } else {
            info!("Final: {}", aircraft.telemetry());
        }
    }

    Ok(())
}
