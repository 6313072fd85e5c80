/// Column widths of `social_media.name` and `social_media.icon`.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_ICON_LEN: usize = 100;

// ========================= Command =========================

/// Validated social link: `name` and `url` are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaCommand {
    name: String,
    url: String,
    icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocialMediaCommandError {
    #[error("Name is required")]
    EmptyName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("URL is required")]
    EmptyUrl,

    #[error("Icon must be at most 100 characters")]
    IconTooLong,
}

impl SocialMediaCommand {
    pub fn new(
        name: Option<String>,
        url: Option<String>,
        icon: Option<String>,
    ) -> Result<Self, SocialMediaCommandError> {
        let name = name.unwrap_or_default().trim().to_string();
        if name.is_empty() {
            return Err(SocialMediaCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(SocialMediaCommandError::NameTooLong);
        }

        let url = url.unwrap_or_default().trim().to_string();
        if url.is_empty() {
            return Err(SocialMediaCommandError::EmptyUrl);
        }

        let icon = icon.unwrap_or_default();
        if icon.chars().count() > MAX_ICON_LEN {
            return Err(SocialMediaCommandError::IconTooLong);
        }

        Ok(Self { name, url, icon })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}
