#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use projboard::app::App;
use projboard::dispatch::Keymap;
use projboard::handlers;
use projboard::project::{ProjectId, ProjectStatus};
use projboard::ui;
use projboard::views::{FormField, host_id};

pub struct TestContext {
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_size(80, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self::with_app(App::new(Keymap::default()), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
        let mut ctx = Self { app, terminal };
        ctx.render();
        ctx
    }

    pub fn press(&mut self, key: KeyCode) {
        self.press_with_modifiers(key, KeyModifiers::NONE);
    }

    pub fn press_with_modifiers(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, modifiers));
        self.render();
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Fills the form through the keyboard and submits it.
    pub fn submit_project(&mut self, title: &str, description: &str, people: &str) {
        self.app.focus_field(FormField::Title);
        self.type_str(title);
        self.press(KeyCode::Tab);
        self.type_str(description);
        self.press(KeyCode::Tab);
        self.type_str(people);
        self.press(KeyCode::Enter);
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        handlers::handle_mouse(
            &mut self.app,
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
        self.render();
    }

    pub fn mouse_down(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn mouse_drag(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    pub fn mouse_up(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    pub fn item_rect(&self, id: &ProjectId) -> Rect {
        self.app
            .layout
            .item_rect(id)
            .expect("project should be on screen")
    }

    pub fn list_rect(&self, status: ProjectStatus) -> Rect {
        self.app.layout.list_rect(status).expect("list is laid out")
    }

    /// Presses on the project, drags it to the middle of `target` and
    /// releases there.
    pub fn drag_project(&mut self, id: &ProjectId, target: ProjectStatus) {
        let (x, y) = center(self.item_rect(id));
        let (tx, ty) = center(self.list_rect(target));
        self.mouse_down(x, y);
        self.mouse_drag(tx, ty);
        self.mouse_up(tx, ty);
    }

    pub fn render(&mut self) -> Vec<String> {
        self.terminal
            .draw(|f| ui::render(f, &mut self.app))
            .expect("Failed to draw");
        self.screen_lines(Rect::new(0, 0, self.width(), self.height()))
    }

    fn width(&self) -> u16 {
        self.terminal.backend().buffer().area.width
    }

    fn height(&self) -> u16 {
        self.terminal.backend().buffer().area.height
    }

    fn screen_lines(&self, area: Rect) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn panel_lines(&mut self, status: ProjectStatus) -> Vec<String> {
        self.render();
        let rect = self.list_rect(status);
        self.screen_lines(rect)
    }

    pub fn panel_contains(&mut self, status: ProjectStatus, text: &str) -> bool {
        self.panel_lines(status).iter().any(|line| line.contains(text))
    }

    pub fn screen_contains(&mut self, text: &str) -> bool {
        self.render().iter().any(|line| line.contains(text))
    }

    pub fn field(&self, field: FormField) -> String {
        self.app.input.field(field).content().to_string()
    }

    pub fn project_id(&self, title: &str) -> ProjectId {
        self.app
            .store
            .projects()
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.id.clone())
            .expect("project exists")
    }

    /// Verify invariants that must always hold after any operation.
    /// Call this at the end of every test.
    pub fn verify_invariants(&mut self) {
        self.verify_one_view_per_project();
        self.verify_selection_bounds();
        self.verify_drop_indicators();
    }

    fn verify_one_view_per_project(&self) {
        let tree = self.app.tree.borrow();
        for project in self.app.store.projects() {
            assert_eq!(
                tree.count_element(project.id.as_str()),
                1,
                "Project {} should have exactly one view",
                project.title
            );
            let host = tree
                .host(&host_id(project.status))
                .expect("host exists");
            assert!(
                host.nodes.iter().any(|m| m.item.project_id == project.id),
                "View for {} is not under the {} list",
                project.title,
                project.status
            );
        }
        assert_eq!(tree.node_count(), self.app.store.len());
    }

    fn verify_selection_bounds(&self) {
        for status in ProjectStatus::ALL {
            let count = self.app.list_items(status).len();
            let selected = self.app.selected[status.index()];
            if count > 0 {
                assert!(
                    selected < count,
                    "Selection {} out of bounds in {} (count={})",
                    selected,
                    status,
                    count
                );
            }
        }
    }

    fn verify_drop_indicators(&self) {
        if self.app.drag.is_none() {
            for status in ProjectStatus::ALL {
                assert!(
                    !self.app.list(status).borrow().is_droppable(),
                    "{status} list still shows the drop indicator"
                );
            }
        }
    }
}

pub fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}
