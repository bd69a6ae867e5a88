//! Project display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_as_iso_datetime, or_dash, truncate_string};
use crate::projects::{ProjectDetail, ProjectSummary};

/// Project display model for table/JSON list output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectRow {
    /// "owner/name" key
    #[tabled(rename = "PROJECT")]
    pub full_name: String,

    /// Owner kind (user or organization)
    #[tabled(rename = "KIND")]
    pub owner_kind: String,

    /// public or private
    #[tabled(rename = "VIS")]
    pub visibility: String,

    /// Last push time (ISO datetime)
    #[tabled(rename = "PUSHED")]
    pub last_activity: String,

    /// Truncated description
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<ProjectSummary> for ProjectRow {
    fn from(project: ProjectSummary) -> Self {
        Self {
            full_name: project.full_name,
            owner_kind: project.owner_kind.to_string(),
            visibility: project.visibility.to_string(),
            last_activity: format_as_iso_datetime(&project.last_activity_at),
            description: truncate_string(&or_dash(project.description.as_deref()), 48),
        }
    }
}

/// Project detail display model, used for JSON detail output.
///
/// The pretty detail view is rendered directly in the command handler;
/// this struct exists so `--format json` has a stable flat shape.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailDisplay {
    pub full_name: String,
    pub owner: String,
    pub owner_kind: String,
    pub visibility: String,
    pub last_activity: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub open_issues: u32,
    pub url: String,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    pub default_branch: String,
    pub readme: Option<String>,
}

impl From<ProjectDetail> for ProjectDetailDisplay {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            full_name: detail.full_name,
            owner: detail.owner,
            owner_kind: detail.owner_kind.to_string(),
            visibility: detail.visibility.to_string(),
            last_activity: format_as_iso_datetime(&detail.last_activity_at),
            description: detail.description,
            language: detail.language,
            stars: detail.star_count,
            forks: detail.fork_count,
            open_issues: detail.open_issue_count,
            url: detail.web_url,
            homepage: detail.homepage_url,
            topics: detail.topics,
            default_branch: detail.default_branch,
            readme: detail.readme,
        }
    }
}
