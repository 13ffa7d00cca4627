//! What each page section asks the store for.
//!
//! Profile and projects are single unordered reads. Achievements fan out to
//! `courses` and `competitions` concurrently and join all-or-nothing: the
//! first failure wins and no partial result is returned.

use futures::future::try_join;

use crate::error::FetchError;
use crate::models::{Competition, Course, Profile, Project};
use crate::query::{Collection, Query};
use crate::source::{select_as, DataSource};

pub fn profile_query() -> Query {
    Query::all(Collection::Profile)
}

pub fn projects_query() -> Query {
    Query::all(Collection::Projects)
}

pub fn courses_query() -> Query {
    Query::all(Collection::Courses).order_desc("date")
}

pub fn competitions_query() -> Query {
    Query::all(Collection::Competitions).order_desc("date")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Achievements {
    pub courses: Vec<Course>,
    pub competitions: Vec<Competition>,
}

/// First profile row, if the store has one.
pub async fn fetch_profile(source: &dyn DataSource) -> Result<Option<Profile>, FetchError> {
    let rows: Vec<Profile> = select_as(source, &profile_query()).await?;
    if rows.len() > 1 {
        tracing::debug!(rows = rows.len(), "profile has several rows; using the first");
    }
    Ok(rows.into_iter().next())
}

pub async fn fetch_projects(source: &dyn DataSource) -> Result<Vec<Project>, FetchError> {
    select_as(source, &projects_query()).await
}

pub async fn fetch_achievements(source: &dyn DataSource) -> Result<Achievements, FetchError> {
    let courses = courses_query();
    let competitions = competitions_query();

    let (courses, competitions) = try_join(
        select_as::<Course>(source, &courses),
        select_as::<Competition>(source, &competitions),
    )
    .await?;

    Ok(Achievements {
        courses,
        competitions,
    })
}
