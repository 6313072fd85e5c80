mod get_profile;
mod patch_profile;
mod upsert_profile;

pub use get_profile::*;
pub use patch_profile::*;
pub use upsert_profile::*;
