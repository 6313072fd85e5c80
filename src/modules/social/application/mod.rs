pub mod domain;
pub mod ports;
pub mod services;
pub mod social_use_cases;
