pub mod pokemon;

pub use crate::domain::model::{Move, PokeapiResponse};
pub use crate::domain::ports::{Announcer, ConfigProvider, HttpAdapter, TransportKind};
pub use crate::utils::error::Result;
pub use pokemon::{Endpoints, Pokemon};
