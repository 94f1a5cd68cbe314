// Domain layer: the vehicle document model and the port it is read through.

pub mod model;
pub mod ports;
