// panelkit-api: Async client for the shell settings backend command bridge

pub mod backend;
pub mod error;
pub mod gateway;
pub mod models;
pub mod transport;

pub use backend::Backend;
pub use error::Error;
pub use gateway::{Gateway, HttpGateway};
pub use transport::{TlsMode, TransportConfig};
