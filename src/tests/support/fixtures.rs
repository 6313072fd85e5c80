use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use chrono::{DateTime, TimeZone, Utc};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::profile::application::domain::entities::PROFILE_ID;
use crate::profile::application::ports::outgoing::{ProfileData, ProfileResult};
use crate::project::application::ports::outgoing::{ProjectData, ProjectResult};

pub const TEST_JWT_SECRET: &str = "test_secret_key_min_32_characters_long";

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

pub fn profile_result(data: ProfileData) -> ProfileResult {
    ProfileResult {
        id: PROFILE_ID,
        name: data.name,
        title: data.title,
        description: data.description,
        bio: data.bio,
        avatar: data.avatar,
        email: data.email,
        phone: data.phone,
        location: data.location,
        website: data.website,
        linkedin: data.linkedin,
        github: data.github,
        resume: data.resume,
        experience: data.experience,
        availability: data.availability,
        skills: data.skills,
        languages: data.languages,
        education: data.education,
        certificates: data.certificates,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn project_result(id: i32, data: ProjectData) -> ProjectResult {
    ProjectResult {
        id,
        title: data.title,
        category: data.category,
        description: data.description,
        full_description: data.full_description,
        technologies: data.technologies,
        images: data.images,
        github: data.github,
        demo: data.demo,
        rating: data.rating,
        icon: data.icon,
        duration: data.duration,
        team: data.team,
        status: data.status,
        challenges: data.challenges,
        solutions: data.solutions,
        features: data.features,
        objectives: data.objectives,
        results: data.results,
        testimonial: data.testimonial,
        published: data.published,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// Cheap Argon2id hash with a fixed salt, so tests stay fast and repeatable.
pub fn argon2_hash(password: &str) -> String {
    let salt = SaltString::from_b64("c29tZXNhbHQxMjM0NTY3OA").unwrap();
    let params = Params::new(4096, 3, 1, None).unwrap();

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "portfolio".to_string(),
        session_expiry: 3600,
    })
}
