mod drag;

pub use drag::DragSession;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;
use crate::dispatch::Keymap;
use crate::error::{Error, Result};
use crate::project::{ProjectId, ProjectStatus};
use crate::state::ProjectState;
use crate::ui::ScreenLayout;
use crate::views::{FormField, ProjectInput, ProjectItem, ProjectList, ViewTree, host_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List(ProjectStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Blocking notice; all other input waits until it is dismissed.
    Alert(String),
    Help,
}

pub struct App {
    pub store: ProjectState,
    pub tree: Rc<RefCell<ViewTree>>,
    /// Indexed by [`ProjectStatus::index`]. Active is mounted first, so it
    /// is notified first.
    lists: [Rc<RefCell<ProjectList>>; 2],
    pub input: ProjectInput,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub drag: Option<DragSession>,
    pub keymap: Keymap,
    /// Selected item index per list.
    pub selected: [usize; 2],
    /// First visible item per list.
    pub scroll: [usize; 2],
    /// Hit areas from the most recent render, used for mouse input.
    pub layout: ScreenLayout,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(keymap: Keymap) -> Self {
        let mut store = ProjectState::new();
        let tree = Rc::new(RefCell::new(ViewTree::new()));
        let lists = ProjectStatus::ALL
            .map(|status| ProjectList::mount(status, &mut store, Rc::clone(&tree)));

        Self {
            store,
            tree,
            lists,
            input: ProjectInput::new(),
            focus: Focus::Form,
            input_mode: InputMode::Normal,
            drag: None,
            keymap,
            selected: [0; 2],
            scroll: [0; 2],
            layout: ScreenLayout::default(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.keymap()?))
    }

    #[must_use]
    pub fn list(&self, status: ProjectStatus) -> &Rc<RefCell<ProjectList>> {
        &self.lists[status.index()]
    }

    /// Item views mounted under the list for `status`, in display order.
    #[must_use]
    pub fn list_items(&self, status: ProjectStatus) -> Vec<ProjectItem> {
        self.tree
            .borrow()
            .host(&host_id(status))
            .map(|host| host.nodes.iter().map(|m| m.item.clone()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn item_view(&self, id: &ProjectId) -> Option<ProjectItem> {
        let tree = self.tree.borrow();
        ProjectStatus::ALL.into_iter().find_map(|status| {
            let node = self.lists[status.index()].borrow().view_for(id)?;
            tree.locate(node).map(|(_, mounted)| mounted.item.clone())
        })
    }

    #[must_use]
    pub fn focused_list(&self) -> Option<ProjectStatus> {
        match self.focus {
            Focus::List(status) => Some(status),
            Focus::Form => None,
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<ProjectItem> {
        let status = self.focused_list()?;
        self.list_items(status)
            .into_iter()
            .nth(self.selected[status.index()])
    }

    pub fn submit_form(&mut self) {
        match self.input.submit(&mut self.store) {
            Ok(id) => {
                let title = self
                    .store
                    .get(&id)
                    .map(|p| p.title.clone())
                    .unwrap_or_default();
                self.set_status(format!("Added \"{title}\""));
            }
            Err(err @ Error::InvalidInput) => self.input_mode = InputMode::Alert(err.to_string()),
            Err(err) => self.set_status(err.to_string()),
        }
    }

    pub fn dismiss_alert(&mut self) {
        if matches!(self.input_mode, InputMode::Alert(_)) {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Help => InputMode::Normal,
            _ => InputMode::Help,
        };
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focus = Focus::Form;
        self.input.focus(field);
    }

    pub fn focus_list(&mut self, status: ProjectStatus) {
        self.focus = Focus::List(status);
        self.clamp_selection();
    }

    pub fn switch_list(&mut self) {
        let next = self
            .focused_list()
            .map_or(ProjectStatus::Active, ProjectStatus::other);
        self.focus_list(next);
    }

    pub fn select_next(&mut self) {
        if let Some(status) = self.focused_list() {
            let count = self.list_items(status).len();
            let selected = &mut self.selected[status.index()];
            if *selected + 1 < count {
                *selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(status) = self.focused_list() {
            let selected = &mut self.selected[status.index()];
            *selected = selected.saturating_sub(1);
        }
    }

    /// Focuses the list showing `id` and selects it.
    pub fn select_project(&mut self, id: &ProjectId) -> bool {
        for status in ProjectStatus::ALL {
            if let Some(pos) = self
                .list_items(status)
                .iter()
                .position(|item| &item.project_id == id)
            {
                self.focus = Focus::List(status);
                self.selected[status.index()] = pos;
                return true;
            }
        }
        false
    }

    pub fn clamp_selection(&mut self) {
        for status in ProjectStatus::ALL {
            let count = self.list_items(status).len();
            let selected = &mut self.selected[status.index()];
            *selected = (*selected).min(count.saturating_sub(1));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
