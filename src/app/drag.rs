use tracing::debug;

use super::App;
use crate::dnd::{DataTransfer, Draggable, Droppable};
use crate::project::{ProjectId, ProjectStatus};
use crate::views::{ProjectItem, ProjectList};

/// An in-progress drag gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub transfer: DataTransfer,
    pub source: ProjectItem,
    /// List currently showing the drop indicator, if any.
    pub hover: Option<ProjectStatus>,
}

impl App {
    /// Picks up the item view for `id`. Returns false if no view is mounted
    /// for it or a drag is already running.
    pub fn begin_drag(&mut self, id: &ProjectId) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(source) = self.item_view(id) else {
            return false;
        };

        let mut transfer = DataTransfer::new();
        source.drag_start(&mut transfer);
        debug!(id = %id, from = %source.status, "drag started");

        self.drag = Some(DragSession {
            transfer,
            source,
            hover: None,
        });
        true
    }

    /// Moves the pointer of the running drag over `target` (or off every
    /// list), updating drop indicators.
    pub fn drag_to(&mut self, target: Option<ProjectStatus>) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if session.hover == target {
            return;
        }

        if let Some(previous) = session.hover.take() {
            self.lists[previous.index()].borrow_mut().drag_leave();
        }
        if let Some(status) = target {
            let accepted = self.lists[status.index()]
                .borrow_mut()
                .drag_over(&session.transfer);
            session.hover = accepted.then_some(status);
        }
    }

    /// Drops onto the hovered list, if any. Returns whether a project moved.
    pub fn finish_drag(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };

        let moved = match session.hover {
            Some(status) => ProjectList::handle_drop(
                &self.lists[status.index()],
                &session.transfer,
                &mut self.store,
            ),
            None => false,
        };
        session.source.drag_end(&session.transfer);

        if moved {
            if let Some(status) = session.hover {
                self.set_status(format!("Moved \"{}\" to {status}", session.source.title));
            }
            self.clamp_selection();
        }
        moved
    }

    pub fn cancel_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        if let Some(status) = session.hover {
            self.lists[status.index()].borrow_mut().drag_leave();
        }
        session.source.drag_end(&session.transfer);
        debug!(id = %session.source.project_id, "drag cancelled");
    }

    /// Moves the selected project to the other list through the same
    /// drag and drop path the mouse uses.
    pub fn move_selected(&mut self) -> bool {
        let Some(item) = self.selected_item() else {
            return false;
        };
        if !self.begin_drag(&item.project_id) {
            return false;
        }
        self.drag_to(Some(item.status.other()));
        self.finish_drag()
    }

    #[must_use]
    pub fn dragged_project(&self) -> Option<&ProjectId> {
        self.drag.as_ref().map(|s| &s.source.project_id)
    }
}
