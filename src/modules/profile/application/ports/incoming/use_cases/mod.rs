mod get_profile;
mod patch_profile;
mod upsert_profile;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use patch_profile::{PatchProfileError, PatchProfileUseCase};
pub use upsert_profile::{UpsertProfileError, UpsertProfileUseCase};
