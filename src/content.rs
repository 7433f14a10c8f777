use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub const ALL_CATEGORIES: &str = "All";
pub const COLLAPSED_PROJECTS: usize = 3;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Option<Project>>> =
    LazyLock::new(DashMap::new);

static SITE: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(load_site);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error("Invalid content in {file}: {reason}")]
    Invalid { file: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
    pub headlines: Vec<String>,
    pub roles: Vec<String>,
    pub socials: Socials,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    Design,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Technical, Self::Design, Self::Soft];

    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Development",
            Self::Design => "Design",
            Self::Soft => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillSet {
    pub technical: Vec<Skill>,
    pub design: Vec<Skill>,
    pub soft: Vec<Skill>,
}

impl SkillSet {
    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Design => &self.design,
            SkillCategory::Soft => &self.soft,
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        let over = SkillCategory::ALL
            .iter()
            .flat_map(|c| self.get(*c))
            .find(|s| s.level > 100);
        match over {
            Some(skill) => Err(ContentError::Invalid {
                file: "skills.json",
                reason: format!("{} has level {} (max 100)", skill.name, skill.level),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub text: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetails {
    pub challenge: String,
    pub solution: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
    pub details: ProjectDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: SkillSet,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Category filter labels: "All" first, then each category in the order
    /// it first appears.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(
                self.projects
                    .iter()
                    .filter(|p| seen.insert(p.category.as_str()))
                    .map(|p| p.category.clone()),
            )
            .collect()
    }

    pub fn filter_projects(&self, category: &str, show_all: bool) -> Vec<&Project> {
        let matching = self
            .projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category);
        if show_all {
            matching.collect()
        } else {
            matching.take(COLLAPSED_PROJECTS).collect()
        }
    }

    pub fn count_in(&self, category: &str) -> usize {
        self.filter_projects(category, true).len()
    }

    fn validate(&self) -> Result<(), ContentError> {
        self.skills.validate()?;
        let mut ids = HashSet::new();
        if let Some(dup) = self.projects.iter().find(|p| !ids.insert(p.id.as_str())) {
            return Err(ContentError::Invalid {
                file: "projects.json",
                reason: format!("duplicate project id {}", dup.id),
            });
        }
        if self.profile.headlines.is_empty() {
            return Err(ContentError::Invalid {
                file: "profile.json",
                reason: "at least one headline is required".to_string(),
            });
        }
        Ok(())
    }
}

fn read<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}

pub fn load_site() -> Result<SiteContent, ContentError> {
    let site = SiteContent {
        profile: read("profile.json")?,
        skills: read("skills.json")?,
        experience: read("experience.json")?,
        education: read("education.json")?,
        testimonials: read("testimonials.json")?,
        projects: read("projects.json")?,
    };
    site.validate()?;
    log::debug!(
        "loaded site content: {} projects, {} roles",
        site.projects.len(),
        site.experience.len()
    );
    Ok(site)
}

/// Parsed once per process.
pub fn site() -> Result<&'static SiteContent, ContentError> {
    SITE.as_ref().map_err(Clone::clone)
}

pub fn project(id: &str) -> Option<Project> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    cache
        .entry(id.to_string())
        .or_insert_with(|| {
            site()
                .ok()?
                .projects
                .iter()
                .find(|p| p.id == id)
                .cloned()
        })
        .clone()
}

pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let site = load_site().expect("embedded content should be valid");
        assert_eq!(site.profile.name, "Dhirendra Singh");
        assert_eq!(site.skills.get(SkillCategory::Technical).len(), 12);
        assert_eq!(site.skills.get(SkillCategory::Soft)[0].icon, None);
        assert_eq!(site.experience.len(), 3);
        assert_eq!(site.projects.len(), 6);
        assert!(!site.profile.headlines.is_empty());
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let site = load_site().unwrap();
        assert_eq!(
            site.categories(),
            vec!["All", "UI/UX", "Web Dev", "Front-End", "CS Projects"]
        );
    }

    #[test]
    fn test_filter_projects() {
        let site = load_site().unwrap();
        assert_eq!(site.filter_projects(ALL_CATEGORIES, false).len(), 3);
        assert_eq!(site.filter_projects(ALL_CATEGORIES, true).len(), 6);

        let web: Vec<&str> = site
            .filter_projects("Web Dev", true)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(web, vec!["ecommerce-platform", "music-streaming"]);
        assert_eq!(site.count_in("Nope"), 0);
    }

    #[test]
    fn test_project_lookup_is_cached() {
        let found = project("health-app").expect("project should exist");
        assert_eq!(found.title, "VitalTrack");
        assert!(GLOBAL_PROJECT_CACHE.contains_key("health-app"));
        assert!(project("missing").is_none());
        assert!(GLOBAL_PROJECT_CACHE.get("missing").is_some_and(|p| p.is_none()));
    }

    #[test]
    fn test_skill_level_over_100_is_invalid() {
        let skills: SkillSet = serde_json::from_str(
            r#"{"technical":[{"name":"Rust","level":101}],"design":[],"soft":[]}"#,
        )
        .unwrap();
        assert!(matches!(
            skills.validate(),
            Err(ContentError::Invalid { file: "skills.json", .. })
        ));
    }

    #[test]
    fn test_duplicate_project_ids_are_invalid() {
        let mut site = load_site().unwrap();
        let copy = site.projects[0].clone();
        site.projects.push(copy);
        assert!(matches!(
            site.validate(),
            Err(ContentError::Invalid { file: "projects.json", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            read::<SkillSet>("nope.json"),
            Err(ContentError::Missing("nope.json"))
        );
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }
}
