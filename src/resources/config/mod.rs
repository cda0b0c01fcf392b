pub mod environment;
pub mod physics;
