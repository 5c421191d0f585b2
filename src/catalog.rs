//! Bundled Content
//!
//! Project catalog, task list and site profile, compiled into the binary
//! and validated once at startup.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, Result};
use crate::models::{Project, SiteProfile, TaskCategory};

const PROJECTS_JSON: &str = include_str!("../content/projects.json");
const TASKS_JSON: &str = include_str!("../content/tasks.json");
const SITE_JSON: &str = include_str!("../content/site.json");

fn parse<T: DeserializeOwned>(document: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { document, source })
}

/// Immutable, ordered collection of all projects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        Ok(Self { projects })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(parse("projects.json", json)?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Parse the task list; category titles form task ids and must be unique
pub fn tasks_from_json(json: &str) -> Result<Vec<TaskCategory>> {
    let categories: Vec<TaskCategory> = parse("tasks.json", json)?;
    let mut seen = HashSet::new();
    for category in &categories {
        if !seen.insert(category.title.as_str()) {
            return Err(ContentError::DuplicateTaskCategory(category.title.clone()));
        }
    }
    Ok(categories)
}

/// Everything the page renders, loaded once per session
#[derive(Debug, Clone)]
pub struct Content {
    pub catalog: Catalog,
    pub tasks: Vec<TaskCategory>,
    pub site: SiteProfile,
}

impl Content {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::from_json(PROJECTS_JSON)?,
            tasks: tasks_from_json(TASKS_JSON)?,
            site: parse("site.json", SITE_JSON)?,
        })
    }

    pub fn task_count(&self) -> usize {
        self.tasks.iter().map(|c| c.tasks.len()).sum()
    }
}
