// Domain layer: launch records, selections and the ports the core depends on.

pub mod model;
pub mod ports;
