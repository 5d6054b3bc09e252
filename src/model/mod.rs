//!
//! Domain types shared by services and repositories.
//! Nothing in here knows how it is stored or sent over the wire.
//!

mod message;
mod platform;
mod token;

pub use message::*;
pub use platform::*;
pub use token::*;
