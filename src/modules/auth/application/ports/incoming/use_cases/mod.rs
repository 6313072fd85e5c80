mod login;

pub use login::{LoginError, LoginResult, LoginUseCase};
