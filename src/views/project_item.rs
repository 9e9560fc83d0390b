use crate::dnd::{DataTransfer, Draggable, DropEffect, ProjectTransfer};
use crate::project::{Project, ProjectId, ProjectStatus, persons_label};

/// Rendered view of a single project. Built from a snapshot, so it never
/// reflects later edits to the project; list views replace it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub project_id: ProjectId,
    pub status: ProjectStatus,
    pub title: String,
    pub description: String,
    pub people: u8,
}

impl ProjectItem {
    #[must_use]
    pub fn new(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            status: project.status,
            title: project.title.clone(),
            description: project.description.clone(),
            people: project.people,
        }
    }

    #[must_use]
    pub fn persons(&self) -> String {
        persons_label(self.people)
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer.clear_data();
        ProjectTransfer {
            project_id: self.project_id.clone(),
            source_status: self.status,
        }
        .write_to(transfer);
        transfer.effect_allowed = DropEffect::Move;
    }

    fn drag_end(&self, _transfer: &DataTransfer) {}
}
