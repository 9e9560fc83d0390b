use crate::project::{ProjectId, ProjectStatus};

pub const TEXT_PLAIN: &str = "text/plain";
const SOURCE_STATUS: &str = "application/x-project-status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Key-value payload carried for the duration of one drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    slots: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `kind` to `value`, keeping its original position if it was
    /// already present.
    pub fn set_data(&mut self, kind: &str, value: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|(k, _)| k == kind) {
            slot.1 = value.to_string();
        } else {
            self.slots.push((kind.to_string(), value.to_string()));
        }
    }

    #[must_use]
    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, v)| v.as_str())
    }

    /// Payload kinds in the order they were first set.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.slots.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn clear_data(&mut self) {
        self.slots.clear();
    }
}

/// What a project drag carries, validated when it reaches a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTransfer {
    pub project_id: ProjectId,
    pub source_status: ProjectStatus,
}

impl ProjectTransfer {
    pub fn write_to(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project_id.as_str());
        transfer.set_data(SOURCE_STATUS, self.source_status.as_str());
    }

    /// Returns `None` unless both the id and a known source status are
    /// present.
    #[must_use]
    pub fn read_from(transfer: &DataTransfer) -> Option<Self> {
        let id = transfer.get_data(TEXT_PLAIN).filter(|id| !id.is_empty())?;
        let source_status = transfer
            .get_data(SOURCE_STATUS)
            .and_then(ProjectStatus::parse)?;
        Some(Self {
            project_id: ProjectId::from(id),
            source_status,
        })
    }
}

/// A view that can be picked up and dragged.
pub trait Draggable {
    fn drag_start(&self, transfer: &mut DataTransfer);
    fn drag_end(&self, transfer: &DataTransfer);
}

/// A view that can accept dragged items.
pub trait Droppable {
    /// Returns whether a drop would be accepted.
    fn drag_over(&mut self, transfer: &DataTransfer) -> bool;
    fn drag_leave(&mut self);
}
