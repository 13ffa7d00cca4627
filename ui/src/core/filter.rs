//! Gallery filter and achievements tab selection.

use api::{Project, ProjectCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Apps,
    Websites,
    Other,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Apps,
        CategoryFilter::Websites,
        CategoryFilter::Other,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            CategoryFilter::All => "projects-all",
            CategoryFilter::Apps => "projects-apps",
            CategoryFilter::Websites => "projects-websites",
            CategoryFilter::Other => "projects-other",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Apps => "apps",
            CategoryFilter::Websites => "websites",
            CategoryFilter::Other => "other",
        }
    }

    /// Unrecognized categories only match `All`.
    pub fn matches(self, category: &ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Apps => *category == ProjectCategory::Apps,
            CategoryFilter::Websites => *category == ProjectCategory::Websites,
            CategoryFilter::Other => *category == ProjectCategory::Other,
        }
    }
}

/// Projects in `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(&project.category))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchievementTab {
    #[default]
    Courses,
    Competitions,
}

impl AchievementTab {
    pub const ALL: [AchievementTab; 2] = [AchievementTab::Courses, AchievementTab::Competitions];

    pub fn label_key(self) -> &'static str {
        match self {
            AchievementTab::Courses => "achievements-courses",
            AchievementTab::Competitions => "achievements-competitions",
        }
    }
}
