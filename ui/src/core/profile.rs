//! Profile projection with hardcoded fallbacks.
//!
//! When no profile row is available (empty table, failed fetch, still
//! loading) the page shows the owner's default identity. A present row
//! with a blank contact field falls back per field.

use api::Profile;

use crate::core::format;
use crate::i18n::{Catalog, Language};

pub const FALLBACK_EMAIL: &str = "nemeradel62@gmail.com";
pub const FALLBACK_PHONE: &str = "0791569362";
pub const FALLBACK_LINKEDIN: &str = "https://www.linkedin.com/in/nemer-adel";
pub const FALLBACK_GITHUB: &str = "https://github.com/nemer-adel";
pub const FALLBACK_AVATAR: &str = "/placeholder-avatar.jpg";
/// Substituted when the profile image fails to load.
pub const BROKEN_AVATAR_REPLACEMENT: &str =
    "https://images.pexels.com/photos/2381069/pexels-photo-2381069.jpeg?auto=compress&cs=tinysrgb&w=400";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub image_url: String,
}

fn or_fallback(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl ProfileView {
    pub fn resolve(profile: Option<&Profile>, lang: Language, catalog: &Catalog) -> Self {
        let Some(profile) = profile else {
            return Self::fallback(lang, catalog);
        };

        Self {
            name: lang.pick(&profile.name_ar, &profile.name_en).clone(),
            title: lang.pick(&profile.title_ar, &profile.title_en).clone(),
            description: lang.pick(&profile.description_ar, &profile.description_en).clone(),
            location: lang.pick(&profile.location_ar, &profile.location_en).clone(),
            email: or_fallback(&profile.email, FALLBACK_EMAIL),
            phone: or_fallback(&profile.phone, FALLBACK_PHONE),
            linkedin_url: or_fallback(&profile.linkedin_url, FALLBACK_LINKEDIN),
            github_url: or_fallback(&profile.github_url, FALLBACK_GITHUB),
            image_url: or_fallback(&profile.profile_image_url, FALLBACK_AVATAR),
        }
    }

    pub fn fallback(lang: Language, catalog: &Catalog) -> Self {
        Self {
            name: catalog.lookup(lang, "hero-title"),
            title: catalog.lookup(lang, "hero-subtitle"),
            description: catalog.lookup(lang, "hero-description"),
            location: catalog.lookup(lang, "contact-location-fallback"),
            email: FALLBACK_EMAIL.to_string(),
            phone: FALLBACK_PHONE.to_string(),
            linkedin_url: FALLBACK_LINKEDIN.to_string(),
            github_url: FALLBACK_GITHUB.to_string(),
            image_url: FALLBACK_AVATAR.to_string(),
        }
    }

    pub fn mailto(&self) -> String {
        format::mailto_href(&self.email)
    }

    pub fn tel(&self) -> String {
        format::tel_href(&self.phone)
    }

    pub fn linkedin_display(&self) -> &str {
        format::strip_scheme(&self.linkedin_url)
    }

    pub fn github_display(&self) -> &str {
        format::strip_scheme(&self.github_url)
    }
}

/// Image to render for `current`, given the URL whose last load failed.
///
/// The replacement only stands in for the URL that actually failed; once the
/// profile supplies a different image, that image is tried again.
pub fn avatar_src<'a>(current: &'a str, failed: Option<&str>) -> &'a str {
    if failed == Some(current) {
        BROKEN_AVATAR_REPLACEMENT
    } else {
        current
    }
}
