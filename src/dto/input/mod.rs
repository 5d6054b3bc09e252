mod message;
mod send_to_all_user;
mod send_to_multi_user;
mod send_to_user;
mod token_delete;
mod token_set;

pub use message::*;
pub use send_to_all_user::*;
pub use send_to_multi_user::*;
pub use send_to_user::*;
pub use token_delete::*;
pub use token_set::*;
