pub mod social_media;
