// Domain layer: line model and ports (interfaces). No I/O here.

pub mod model;
pub mod ports;
