use tracing::{debug, info};

use super::{Channel, ListenerId};
use crate::project::{Project, ProjectId, ProjectStatus};

/// The project store. Construct one at startup and hand it to every view
/// that reads or mutates projects.
///
/// Projects keep creation order and are never removed. Every mutation
/// notifies listeners with a full snapshot of the list.
#[derive(Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Channel<[Project]>,
    /// Fired with the moved project's id before listeners see the new
    /// snapshot, so the old item view is gone before a new one is created.
    detach_hooks: Channel<ProjectId>,
}

impl ProjectState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self, title: &str, description: &str, people: u8) -> ProjectId {
        let project = Project::new(title.to_string(), description.to_string(), people);
        let id = project.id.clone();
        info!(id = %id, title, people, "project added");
        self.projects.push(project);
        self.trigger_listeners();
        id
    }

    /// Moves a project to `status`. Returns false without notifying anyone
    /// when the id is unknown or the project already has that status.
    pub fn update_status(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            debug!(id = %id, "status update for unknown project ignored");
            return false;
        };
        if project.status == status {
            debug!(id = %id, %status, "status unchanged");
            return false;
        }

        let from = project.status;
        project.status = status;
        info!(id = %id, %from, to = %status, "project status changed");

        self.detach_hooks.emit(id);
        self.trigger_listeners();
        true
    }

    pub fn add_listener(&mut self, listener: impl FnMut(&[Project]) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn on_detach(&mut self, hook: impl FnMut(&ProjectId) + 'static) -> ListenerId {
        self.detach_hooks.subscribe(hook)
    }

    pub fn remove_detach_hook(&mut self, id: ListenerId) -> bool {
        self.detach_hooks.unsubscribe(id)
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn trigger_listeners(&mut self) {
        let snapshot = self.projects.clone();
        self.listeners.emit(&snapshot);
    }
}
