mod create_social;
mod delete_social;
mod get_social;
mod get_socials;
mod update_social;

pub use create_social::*;
pub use delete_social::*;
pub use get_social::*;
pub use get_socials::*;
pub use update_social::*;
