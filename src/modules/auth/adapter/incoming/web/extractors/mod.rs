mod admin_session;

pub use admin_session::*;
