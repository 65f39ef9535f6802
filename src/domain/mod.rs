// Domain layer: facade models and ports (factory, console, session config).

pub mod model;
pub mod ports;
