use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;

use tracing::{debug, warn};

use super::{InsertPosition, NodeId, ProjectItem, ViewTree};
use crate::dnd::{DataTransfer, Droppable, ProjectTransfer, TEXT_PLAIN};
use crate::project::{Project, ProjectId, ProjectStatus};
use crate::state::{ListenerId, ProjectState};

/// Id of the tree host that items with `status` attach under.
#[must_use]
pub fn host_id(status: ProjectStatus) -> String {
    format!("{}-projects-list", status.as_str())
}

/// Only drags whose first payload type is plain text are accepted.
fn accepts_payload(transfer: &DataTransfer) -> bool {
    transfer.types().first() == Some(&TEXT_PLAIN)
}

struct Subscriptions {
    listener: ListenerId,
    detach: ListenerId,
}

/// Shows every project with one status and accepts drops from the other list.
///
/// Item views are tracked in a side-table keyed by project id. An entry is
/// set once per view and removed when the view is destroyed, so each project
/// has at most one live view, always under the list matching its status.
pub struct ProjectList {
    status: ProjectStatus,
    host_id: String,
    assigned: Vec<Project>,
    views: HashMap<ProjectId, NodeId>,
    tree: Rc<RefCell<ViewTree>>,
    subscriptions: Option<Subscriptions>,
}

impl ProjectList {
    /// Creates the list's host in `tree` and subscribes to `store`.
    pub fn mount(
        status: ProjectStatus,
        store: &mut ProjectState,
        tree: Rc<RefCell<ViewTree>>,
    ) -> Rc<RefCell<Self>> {
        let host_id = host_id(status);
        tree.borrow_mut().add_host(&host_id, status.heading());

        let list = Rc::new(RefCell::new(Self {
            status,
            host_id,
            assigned: Vec::new(),
            views: HashMap::new(),
            tree,
            subscriptions: None,
        }));

        let weak = Rc::downgrade(&list);
        let listener = store.add_listener(move |projects| {
            if let Some(list) = weak.upgrade() {
                list.borrow_mut().assign(projects);
            }
        });

        let weak = Rc::downgrade(&list);
        let detach = store.on_detach(move |id| {
            if let Some(list) = weak.upgrade() {
                list.borrow_mut().destroy_view(id);
            }
        });

        {
            let mut this = list.borrow_mut();
            this.subscriptions = Some(Subscriptions { listener, detach });
            this.assign(store.projects());
        }
        list
    }

    /// Unsubscribes from `store` and removes every item view this list owns.
    pub fn unmount(&mut self, store: &mut ProjectState) {
        if let Some(subs) = self.subscriptions.take() {
            store.remove_listener(subs.listener);
            store.remove_detach_hook(subs.detach);
        }
        let ids: Vec<ProjectId> = self.views.keys().cloned().collect();
        for id in ids {
            self.destroy_view(&id);
        }
        self.assigned.clear();
    }

    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    #[must_use]
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    #[must_use]
    pub fn assigned(&self) -> &[Project] {
        &self.assigned
    }

    #[must_use]
    pub fn view_for(&self, id: &ProjectId) -> Option<NodeId> {
        self.views.get(id).copied()
    }

    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.tree
            .borrow()
            .host(&self.host_id)
            .is_some_and(|h| h.droppable)
    }

    /// Records `node` as the view for `id`. An existing entry is never
    /// overwritten.
    pub fn set_view(&mut self, id: ProjectId, node: NodeId) -> bool {
        match self.views.entry(id) {
            Entry::Occupied(entry) => {
                debug!(id = %entry.key(), "view already set, keeping existing");
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(node);
                true
            }
        }
    }

    /// Detaches the view for `id` from the tree. Returns false if this list
    /// held no view for it.
    pub fn destroy_view(&mut self, id: &ProjectId) -> bool {
        let Some(node) = self.views.remove(id) else {
            return false;
        };
        self.tree.borrow_mut().detach(node);
        debug!(id = %id, list = %self.status, "item view destroyed");
        true
    }

    fn assign(&mut self, projects: &[Project]) {
        self.assigned = projects
            .iter()
            .filter(|p| p.status == self.status)
            .cloned()
            .collect();
        self.reconcile();
        self.render_projects();
    }

    /// Drops views whose project left this list without a detach, so a view
    /// can never outlive its membership.
    fn reconcile(&mut self) {
        let stale: Vec<ProjectId> = self
            .views
            .keys()
            .filter(|id| !self.assigned.iter().any(|p| &p.id == *id))
            .cloned()
            .collect();
        for id in stale {
            warn!(id = %id, list = %self.status, "removing orphaned item view");
            self.destroy_view(&id);
        }
    }

    fn render_projects(&mut self) {
        let missing: Vec<ProjectItem> = self
            .assigned
            .iter()
            .filter(|p| !self.views.contains_key(&p.id))
            .map(ProjectItem::new)
            .collect();

        for item in missing {
            let id = item.project_id.clone();
            let node = self
                .tree
                .borrow_mut()
                .attach(&self.host_id, InsertPosition::End, item);
            if let Some(node) = node {
                self.set_view(id, node);
            }
        }
    }

    fn set_droppable(&mut self, droppable: bool) {
        self.tree
            .borrow_mut()
            .set_droppable(&self.host_id, droppable);
    }

    /// Completes a drop onto `list`. The list borrow is released before the
    /// store is updated because the store notifies this same list.
    pub fn handle_drop(
        list: &RefCell<Self>,
        transfer: &DataTransfer,
        store: &mut ProjectState,
    ) -> bool {
        let status = {
            let mut list = list.borrow_mut();
            list.drag_leave();
            list.status
        };

        if !accepts_payload(transfer) {
            debug!(list = %status, "drop rejected, payload is not plain text");
            return false;
        }
        let Some(payload) = ProjectTransfer::read_from(transfer) else {
            debug!(list = %status, "drop rejected, no project payload");
            return false;
        };
        if payload.source_status == status {
            debug!(id = %payload.project_id, list = %status, "drop onto source list ignored");
            return false;
        }

        store.update_status(&payload.project_id, status)
    }
}

impl Droppable for ProjectList {
    fn drag_over(&mut self, transfer: &DataTransfer) -> bool {
        let accepts = accepts_payload(transfer);
        if accepts {
            self.set_droppable(true);
        }
        accepts
    }

    fn drag_leave(&mut self) {
        self.set_droppable(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::Draggable;

    struct Fixture {
        store: ProjectState,
        tree: Rc<RefCell<ViewTree>>,
        active: Rc<RefCell<ProjectList>>,
        finished: Rc<RefCell<ProjectList>>,
    }

    fn fixture() -> Fixture {
        let mut store = ProjectState::new();
        let tree = Rc::new(RefCell::new(ViewTree::new()));
        let active = ProjectList::mount(ProjectStatus::Active, &mut store, Rc::clone(&tree));
        let finished = ProjectList::mount(ProjectStatus::Finished, &mut store, Rc::clone(&tree));
        Fixture {
            store,
            tree,
            active,
            finished,
        }
    }

    fn drag(item_of: &Project) -> DataTransfer {
        let mut transfer = DataTransfer::new();
        ProjectItem::new(item_of).drag_start(&mut transfer);
        transfer
    }

    #[test]
    fn new_project_gets_one_view_in_active_list() {
        let mut fx = fixture();
        let id = fx.store.add_project("Build API", "Backend work", 3);

        assert!(fx.active.borrow().view_for(&id).is_some());
        assert!(fx.finished.borrow().view_for(&id).is_none());
        assert_eq!(fx.tree.borrow().count_element(id.as_str()), 1);

        let host = host_id(ProjectStatus::Active);
        let tree = fx.tree.borrow();
        let nodes = &tree.host(&host).expect("active host").nodes;
        assert_eq!(nodes[0].item.persons(), "3 persons");
    }

    #[test]
    fn rerender_keeps_existing_views() {
        let mut fx = fixture();
        let first = fx.store.add_project("First", "Kept view", 2);
        let node = fx.active.borrow().view_for(&first);

        fx.store.add_project("Second", "New view", 2);

        assert_eq!(fx.active.borrow().view_for(&first), node);
        assert_eq!(fx.active.borrow().view_count(), 2);
    }

    #[test]
    fn set_view_does_not_overwrite() {
        let mut fx = fixture();
        let id = fx.store.add_project("Guarded", "One view only", 1);
        let original = fx.active.borrow().view_for(&id).expect("view exists");

        let other = fx
            .tree
            .borrow_mut()
            .attach(
                &host_id(ProjectStatus::Active),
                InsertPosition::End,
                ProjectItem::new(fx.store.get(&id).expect("project")),
            )
            .expect("host exists");

        assert!(!fx.active.borrow_mut().set_view(id.clone(), other));
        assert_eq!(fx.active.borrow().view_for(&id), Some(original));
    }

    #[test]
    fn drop_moves_view_to_other_list() {
        let mut fx = fixture();
        let id = fx.store.add_project("Mover", "Goes to finished", 2);
        let old_node = fx.active.borrow().view_for(&id).expect("active view");
        let transfer = drag(fx.store.get(&id).expect("project"));

        assert!(fx.finished.borrow_mut().drag_over(&transfer));
        assert!(ProjectList::handle_drop(&fx.finished, &transfer, &mut fx.store));

        assert!(fx.active.borrow().view_for(&id).is_none());
        let new_node = fx.finished.borrow().view_for(&id).expect("finished view");
        assert!(new_node > old_node);
        assert!(fx.tree.borrow().locate(old_node).is_none());
        assert_eq!(fx.tree.borrow().count_element(id.as_str()), 1);
        assert!(!fx.finished.borrow().is_droppable());
    }

    #[test]
    fn old_view_is_gone_before_listeners_run() {
        let mut store = ProjectState::new();
        let tree = Rc::new(RefCell::new(ViewTree::new()));

        // Registered before the lists, so it observes the tree before either
        // list re-renders
        let seen = Rc::new(RefCell::new(Vec::new()));
        let probe = Rc::clone(&seen);
        let probe_tree = Rc::clone(&tree);
        store.add_listener(move |_| probe.borrow_mut().push(probe_tree.borrow().node_count()));

        let active = ProjectList::mount(ProjectStatus::Active, &mut store, Rc::clone(&tree));
        let finished = ProjectList::mount(ProjectStatus::Finished, &mut store, Rc::clone(&tree));

        let id = store.add_project("Bouncer", "Back and forth", 2);
        store.update_status(&id, ProjectStatus::Finished);
        store.update_status(&id, ProjectStatus::Active);

        assert_eq!(*seen.borrow(), vec![0, 0, 0]);
        assert!(active.borrow().view_for(&id).is_some());
        assert!(finished.borrow().view_for(&id).is_none());
        assert_eq!(tree.borrow().count_element(id.as_str()), 1);
    }

    #[test]
    fn drag_over_rejects_non_plain_text_payloads() {
        let fx = fixture();
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>nope</b>");

        assert!(!fx.finished.borrow_mut().drag_over(&transfer));
        assert!(!fx.finished.borrow().is_droppable());

        transfer.clear_data();
        transfer.set_data(TEXT_PLAIN, "anything");
        assert!(fx.finished.borrow_mut().drag_over(&transfer));
        assert!(fx.finished.borrow().is_droppable());

        fx.finished.borrow_mut().drag_leave();
        assert!(!fx.finished.borrow().is_droppable());
    }

    #[test]
    fn drop_onto_source_list_is_ignored() {
        let mut fx = fixture();
        let id = fx.store.add_project("Stay", "Same list", 2);
        let node = fx.active.borrow().view_for(&id);
        let transfer = drag(fx.store.get(&id).expect("project"));

        assert!(!ProjectList::handle_drop(&fx.active, &transfer, &mut fx.store));
        assert_eq!(fx.active.borrow().view_for(&id), node);
    }

    #[test]
    fn drop_without_typed_payload_is_ignored() {
        let mut fx = fixture();
        let id = fx.store.add_project("Raw", "Untyped drop", 2);
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, id.as_str());

        assert!(!ProjectList::handle_drop(&fx.finished, &transfer, &mut fx.store));
        assert_eq!(
            fx.store.get(&id).map(|p| p.status),
            Some(ProjectStatus::Active)
        );
    }

    #[test]
    fn drop_with_non_plain_text_first_is_ignored() {
        let mut fx = fixture();
        let id = fx.store.add_project("Html", "Wrong marker", 2);
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>Html</b>");
        ProjectTransfer {
            project_id: id.clone(),
            source_status: ProjectStatus::Active,
        }
        .write_to(&mut transfer);

        assert!(!ProjectList::handle_drop(&fx.finished, &transfer, &mut fx.store));
        assert_eq!(
            fx.store.get(&id).map(|p| p.status),
            Some(ProjectStatus::Active)
        );
        assert!(fx.active.borrow().view_for(&id).is_some());
    }

    #[test]
    fn unmount_stops_updates_and_clears_views() {
        let mut fx = fixture();
        fx.store.add_project("Before", "Unmount", 2);
        fx.active.borrow_mut().unmount(&mut fx.store);

        assert!(!fx.active.borrow().is_mounted());
        assert_eq!(fx.tree.borrow().node_count(), 0);

        fx.store.add_project("After", "Unmount", 2);
        assert_eq!(fx.active.borrow().view_count(), 0);
        assert_eq!(fx.store.listener_count(), 1);
    }

    #[test]
    fn mount_renders_existing_projects() {
        let mut store = ProjectState::new();
        let id = store.add_project("Existing", "Added before mount", 4);
        let tree = Rc::new(RefCell::new(ViewTree::new()));

        let active = ProjectList::mount(ProjectStatus::Active, &mut store, Rc::clone(&tree));
        assert!(active.borrow().view_for(&id).is_some());
    }
}
