// Domain layer: the ports shared by the library and application beans.

pub mod ports;
