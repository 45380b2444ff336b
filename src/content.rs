use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const SITE_FILE: &str = "site.json";

static GLOBAL_SITE: LazyLock<Result<Site, ContentError>> = LazyLock::new(Site::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub brand: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub demo: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

/// Everything the page renders that isn't user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Site content not found: {0}")]
    Missing(&'static str),
    #[error("Site content is not UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Site {
    pub fn from_json(raw: &str) -> Result<Site, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load() -> Result<Site, ContentError> {
        let file = Assets::get(SITE_FILE).ok_or(ContentError::Missing(SITE_FILE))?;
        Site::from_json(std::str::from_utf8(&file.data)?)
    }
}

/// Site content, decoded on first access and shared afterwards.
pub fn site() -> Result<&'static Site, &'static ContentError> {
    (*GLOBAL_SITE).as_ref()
}

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
