//! Project domain record.

use crate::record::value_objects::{PersonName, ProjectDescription, ProjectName, ProjectStatus};
use serde::{Deserialize, Serialize};

/// An immutable, fully-validated project record.
///
/// Projects are keyed by name and associated with employees independently of
/// their lifetimes (many-to-many, managed outside this core).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: ProjectName,
    pub description: ProjectDescription,
    pub status: ProjectStatus,
    pub manager: PersonName,
}

impl Project {
    /// Assemble a project from already-validated fields.
    pub fn new(
        name: ProjectName,
        description: ProjectDescription,
        status: ProjectStatus,
        manager: PersonName,
    ) -> Self {
        Self {
            name,
            description,
            status,
            manager,
        }
    }

    /// Replace the description, keeping every other field.
    pub fn with_description(mut self, description: ProjectDescription) -> Self {
        self.description = description;
        self
    }

    /// Replace the status, keeping every other field.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the manager, keeping every other field.
    pub fn with_manager(mut self, manager: PersonName) -> Self {
        self.manager = manager;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project::new(
            ProjectName::parse("payroll revamp").unwrap(),
            ProjectDescription::parse("Rebuild the payroll pipeline end to end.").unwrap(),
            ProjectStatus::Development,
            PersonName::parse("mary jane").unwrap(),
        )
    }

    #[test]
    fn test_with_status_replaces_only_status() {
        let project = sample();
        let updated = project.clone().with_status(ProjectStatus::Live);
        assert_eq!(updated.status, ProjectStatus::Live);
        assert_eq!(updated.name, project.name);
        assert_eq!(updated.manager, project.manager);
    }

    #[test]
    fn test_serde_round_trip() {
        let project = sample();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
