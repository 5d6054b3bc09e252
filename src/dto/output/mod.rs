mod error_response;
mod outcome;
mod success;

pub use error_response::*;
pub use outcome::*;
pub use success::*;
