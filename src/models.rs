//! Frontend Models
//!
//! Data structures matching the bundled content documents.

use serde::{Deserialize, Serialize};

/// Project category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Graphical,
    Coding,
    Website,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Graphical, Category::Coding, Category::Website];

    pub fn key(self) -> &'static str {
        match self {
            Category::Graphical => "graphical",
            Category::Coding => "coding",
            Category::Website => "website",
        }
    }

    /// Badge text shown on cards and in the modal
    pub fn badge(self) -> &'static str {
        match self {
            Category::Graphical => "Design",
            Category::Coding => "Development",
            Category::Website => "Website",
        }
    }

    /// CSS gradient class used for badges and placeholder tiles
    pub fn gradient_class(self) -> &'static str {
        match self {
            Category::Graphical => "grad-purple",
            Category::Coding => "grad-blue",
            Category::Website => "grad-green",
        }
    }

    /// Icon drawn on the placeholder tile when a project has no image
    pub fn placeholder_icon(self) -> &'static str {
        match self {
            Category::Graphical => "🎨",
            Category::Coding => "</>",
            Category::Website => "🌐",
        }
    }

    /// Heading of the per-category showcase below the gallery
    pub fn showcase_title(self) -> &'static str {
        match self {
            Category::Graphical => "Graphical Projects",
            Category::Coding => "Coding Projects",
            Category::Website => "Website Showcase",
        }
    }

    /// Label for the live link in the project modal
    pub fn live_label(self) -> &'static str {
        match self {
            Category::Website => "Visit Website",
            _ => "Live Demo",
        }
    }
}

/// External links of a project; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

/// Project data structure (one portfolio entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub discipline: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub image: Option<String>,
}

/// Checklist category with its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub title: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    pub icon: String,
    /// Render the value as a `mailto:` link
    #[serde(default)]
    pub mail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// Site owner profile and page copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub owner: String,
    pub initials: String,
    pub roles: Vec<String>,
    pub tagline: String,
    /// Markdown
    pub about: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub contact: Vec<ContactEntry>,
    pub mail_subject: String,
    pub nav: Vec<NavLink>,
    pub task_link: String,
}
