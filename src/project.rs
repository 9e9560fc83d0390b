use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random id, unique for the lifetime of the process.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ProjectStatus::Active),
            "finished" => Some(ProjectStatus::Finished),
            _ => None,
        }
    }

    /// Heading shown above the list holding projects with this status.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active projects",
            ProjectStatus::Finished => "Finished projects",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            ProjectStatus::Active => ProjectStatus::Finished,
            ProjectStatus::Finished => ProjectStatus::Active,
        }
    }

    /// Position of this status in [`ProjectStatus::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ProjectStatus::Active => 0,
            ProjectStatus::Finished => 1,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u8,
    pub status: ProjectStatus,
}

impl Project {
    #[must_use]
    pub fn new(title: String, description: String, people: u8) -> Self {
        Self {
            id: ProjectId::generate(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    #[must_use]
    pub fn persons(&self) -> String {
        persons_label(self.people)
    }
}

#[must_use]
pub fn persons_label(people: u8) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{people} persons")
    }
}
