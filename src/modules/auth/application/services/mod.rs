mod login_service;

pub use login_service::LoginService;
