// Domain layer: payload models and ports (interfaces). Concrete transports live in `adapters`.

pub mod model;
pub mod ports;
