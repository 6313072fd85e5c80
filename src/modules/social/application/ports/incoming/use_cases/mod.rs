mod create_social;
mod delete_social;
mod get_social;
mod get_socials;
mod update_social;

pub use create_social::{CreateSocialError, CreateSocialUseCase};
pub use delete_social::{DeleteSocialError, DeleteSocialUseCase};
pub use get_social::{GetSocialError, GetSocialUseCase};
pub use get_socials::{GetSocialsError, GetSocialsUseCase};
pub use update_social::{UpdateSocialError, UpdateSocialUseCase};
