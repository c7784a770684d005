mod chat;
mod command;
mod connection;
mod error;
mod handle;
mod registry;
mod relay;
mod rooms;

pub use chat::*;
pub use command::*;
pub use connection::*;
pub use error::*;
pub use handle::*;
pub use registry::*;
pub use relay::*;
pub use rooms::*;
