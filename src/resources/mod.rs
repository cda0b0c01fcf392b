pub mod config;

pub use config::{environment::EnvironmentConfig, physics::PhysicsConfig};
