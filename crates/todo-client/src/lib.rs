//! HTTP gateway for the todo service and the list view-model built on it.

pub mod board;
pub mod client;
pub mod error;

pub use board::TodoBoard;
pub use client::TodoClient;
pub use error::ClientError;
