//! Language-aware view models.
//!
//! Each `project_*`/`*_card` function selects the `_ar` or `_en` column for
//! the active language. Labels, URLs and dates pass through unchanged.

use api::{Competition, Course, Project};

use crate::core::links::non_empty;
use crate::i18n::Language;

/// Technologies shown on a gallery card before the `+N` badge.
pub const CARD_TECH_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    /// Technologies beyond `CARD_TECH_LIMIT`.
    pub hidden_technologies: usize,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLinkKind {
    Source,
    LiveDemo,
    Video,
}

impl ProjectLinkKind {
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectLinkKind::Source => "projects-source-code",
            ProjectLinkKind::LiveDemo => "projects-live-demo",
            ProjectLinkKind::Video => "projects-video",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ProjectLinkKind::Source => "project-link project-link--source",
            ProjectLinkKind::LiveDemo => "project-link project-link--live",
            ProjectLinkKind::Video => "project-link project-link--video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: ProjectLinkKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub purpose: String,
    pub goals: Vec<String>,
    pub screenshots: Vec<String>,
    /// Source, live demo, video; absent links are skipped.
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    pub id: i64,
    pub name: String,
    pub provider: String,
    pub date: String,
    pub description: String,
    pub image_url: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionCard {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub position: String,
    pub date: String,
    pub description: String,
    pub experience: String,
    pub image_url: Option<String>,
    pub skills: Vec<String>,
    pub gallery: Vec<String>,
}

pub fn project_card(project: &Project, lang: Language) -> ProjectCard {
    let technologies: Vec<String> = project
        .technologies
        .iter()
        .take(CARD_TECH_LIMIT)
        .cloned()
        .collect();

    ProjectCard {
        id: project.id,
        title: lang.pick(&project.title_ar, &project.title_en).clone(),
        description: lang.pick(&project.description_ar, &project.description_en).clone(),
        image_url: project.image_url.clone(),
        hidden_technologies: project.technologies.len().saturating_sub(technologies.len()),
        technologies,
        source_url: non_empty(project.github_url.as_deref()).map(str::to_string),
    }
}

pub fn project_detail(project: &Project, lang: Language) -> ProjectDetail {
    let links = [
        (ProjectLinkKind::Source, project.github_url.as_deref()),
        (ProjectLinkKind::LiveDemo, project.live_url.as_deref()),
        (ProjectLinkKind::Video, project.video_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, url)| {
        non_empty(url).map(|url| ProjectLink {
            kind,
            url: url.to_string(),
        })
    })
    .collect();

    ProjectDetail {
        id: project.id,
        title: lang.pick(&project.title_ar, &project.title_en).clone(),
        image_url: project.image_url.clone(),
        description: lang.pick(&project.description_ar, &project.description_en).clone(),
        technologies: project.technologies.clone(),
        purpose: lang.pick(&project.purpose_ar, &project.purpose_en).clone(),
        goals: lang.pick(&project.goals_ar, &project.goals_en).clone(),
        screenshots: project.screenshots.clone(),
        links,
    }
}

pub fn course_card(course: &Course, lang: Language) -> CourseCard {
    CourseCard {
        id: course.id,
        name: lang.pick(&course.name_ar, &course.name_en).clone(),
        provider: course.provider.clone(),
        date: course.date.clone(),
        description: lang.pick(&course.description_ar, &course.description_en).clone(),
        image_url: course.image_url.clone(),
        skills: course.skills.clone(),
    }
}

pub fn competition_card(competition: &Competition, lang: Language) -> CompetitionCard {
    CompetitionCard {
        id: competition.id,
        name: lang.pick(&competition.name_ar, &competition.name_en).clone(),
        kind: lang.pick(&competition.type_ar, &competition.type_en).clone(),
        position: lang.pick(&competition.position_ar, &competition.position_en).clone(),
        date: competition.date.clone(),
        description: lang
            .pick(&competition.description_ar, &competition.description_en)
            .clone(),
        experience: lang
            .pick(&competition.experience_ar, &competition.experience_en)
            .clone(),
        image_url: non_empty(competition.image_url.as_deref()).map(str::to_string),
        skills: competition.skills.clone(),
        gallery: competition.gallery.clone(),
    }
}
