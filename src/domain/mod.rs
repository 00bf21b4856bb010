// Domain layer: the article payload and the health-check port. No HTTP or CLI code here.

pub mod model;
pub mod ports;
