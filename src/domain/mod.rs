// Domain layer: value records and the rendering port. No I/O beyond the writer handed in.

pub mod model;
pub mod ports;
