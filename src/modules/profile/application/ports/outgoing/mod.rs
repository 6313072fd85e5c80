mod profile_repository;

pub use profile_repository::{
    PatchProfileData, ProfileData, ProfileRepository, ProfileRepositoryError, ProfileResult,
};
