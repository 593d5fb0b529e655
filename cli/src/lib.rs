//! Host side of the todo client: argument parsing and the HTTP transport the
//! `todo` binary hands to `TodoPage`.

pub mod config;
pub mod transport;

pub use transport::UreqTransport;
