mod get_session;
mod login;
mod logout;

pub use get_session::*;
pub use login::*;
pub use logout::*;
