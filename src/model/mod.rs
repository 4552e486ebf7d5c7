pub mod configuration;
pub mod connection;
pub mod label;

pub use configuration::*;
pub use connection::*;
pub use label::*;
