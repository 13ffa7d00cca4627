//! Records as stored in the data store.
//!
//! Text shown to visitors is stored twice, once per language (`*_ar` /
//! `*_en`). Those columns are required: a row missing one of them fails to
//! decode instead of rendering a blank. Sequence columns may be `null` or
//! absent and decode as empty.

use serde::{Deserialize, Deserializer, Serialize};

fn null_to_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
    pub title_ar: String,
    pub title_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub location_ar: String,
    pub location_en: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub linkedin_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub github_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub profile_image_url: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Gallery category. Only the three known values take part in filtering;
/// anything else is kept verbatim and only shows under "all".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectCategory {
    Apps,
    Websites,
    Other,
    Unrecognized(String),
}

impl ProjectCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectCategory::Apps => "apps",
            ProjectCategory::Websites => "websites",
            ProjectCategory::Other => "other",
            ProjectCategory::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProjectCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "apps" => ProjectCategory::Apps,
            "websites" => ProjectCategory::Websites,
            "other" => ProjectCategory::Other,
            _ => ProjectCategory::Unrecognized(raw),
        }
    }
}

impl From<ProjectCategory> for String {
    fn from(category: ProjectCategory) -> Self {
        category.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub category: ProjectCategory,
    pub title_ar: String,
    pub title_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub purpose_ar: String,
    pub purpose_en: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub technologies: Vec<String>,
    // Independent lists: index i in one language need not match index i
    // in the other.
    #[serde(default, deserialize_with = "null_to_default")]
    pub goals_ar: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub goals_en: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
    pub type_ar: String,
    pub type_en: String,
    pub position_ar: String,
    pub position_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub experience_ar: String,
    pub experience_en: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_row(category: &str) -> serde_json::Value {
        json!({
            "id": 7,
            "category": category,
            "title_ar": "تطبيق",
            "title_en": "App",
            "description_ar": "وصف",
            "description_en": "Description",
            "purpose_ar": "هدف",
            "purpose_en": "Purpose",
            "image_url": "https://cdn.example/p.png",
            "technologies": ["Rust", "Dioxus"],
            "goals_ar": ["أ"],
            "goals_en": ["a", "b"],
            "github_url": null,
            "screenshots": null
        })
    }

    #[test]
    fn known_categories_decode_to_variants() {
        let project: Project = serde_json::from_value(project_row("websites")).unwrap();
        assert_eq!(project.category, ProjectCategory::Websites);
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let project: Project = serde_json::from_value(project_row("games")).unwrap();
        assert_eq!(project.category, ProjectCategory::Unrecognized("games".into()));
        assert_eq!(project.category.as_str(), "games");
    }

    #[test]
    fn null_sequences_become_empty() {
        let project: Project = serde_json::from_value(project_row("apps")).unwrap();
        assert!(project.screenshots.is_empty());
        assert_eq!(project.github_url, None);
        assert_eq!(project.goals_en.len(), 2);
        assert_eq!(project.goals_ar.len(), 1);
    }

    #[test]
    fn missing_language_column_fails_loudly() {
        let mut row = project_row("apps");
        row.as_object_mut().unwrap().remove("title_en");
        assert!(serde_json::from_value::<Project>(row).is_err());
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let value = serde_json::to_value(ProjectCategory::Other).unwrap();
        assert_eq!(value, json!("other"));
    }
}
