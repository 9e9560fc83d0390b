use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use super::theme::{FORM_HEIGHT, ITEM_HEIGHT, ITEM_STRIDE};
use crate::app::App;
use crate::project::{ProjectId, ProjectStatus};
use crate::views::FormField;

/// Screen regions before any item placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regions {
    pub form: Rect,
    pub lists: [Rect; 2],
    pub footer: Rect,
}

impl Regions {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[1]);

        Self {
            form: rows[0],
            lists: [columns[0], columns[1]],
            footer: rows[2],
        }
    }
}

/// Inside of a bordered panel.
#[must_use]
pub fn panel_inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// How many items fit in a list panel of this size (at least one).
#[must_use]
pub fn visible_items(panel: Rect) -> usize {
    let height = panel_inner(panel).height;
    // The last item needs no trailing gap
    (((height + 1) / ITEM_STRIDE) as usize).max(1)
}

/// Hit areas of the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub form: Rect,
    pub fields: Vec<(FormField, Rect)>,
    pub lists: Vec<(ProjectStatus, Rect)>,
    pub items: Vec<(ProjectId, Rect)>,
    pub footer: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn list_at(&self, column: u16, row: u16) -> Option<ProjectStatus> {
        let pos = Position::new(column, row);
        self.lists
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(status, _)| *status)
    }

    #[must_use]
    pub fn item_at(&self, column: u16, row: u16) -> Option<&ProjectId> {
        let pos = Position::new(column, row);
        self.items
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let pos = Position::new(column, row);
        self.fields
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(field, _)| *field)
    }

    #[must_use]
    pub fn item_rect(&self, id: &ProjectId) -> Option<Rect> {
        self.items.iter().find(|(i, _)| i == id).map(|(_, r)| *r)
    }

    #[must_use]
    pub fn list_rect(&self, status: ProjectStatus) -> Option<Rect> {
        self.lists
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, r)| *r)
    }
}

/// Places every visible item, honoring each list's scroll offset.
#[must_use]
pub fn compute_layout(area: Rect, app: &App) -> ScreenLayout {
    let regions = Regions::new(area);
    let form_inner = panel_inner(regions.form);

    let fields = FormField::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| (*i as u16) < form_inner.height)
        .map(|(i, field)| {
            let rect = Rect {
                x: form_inner.x,
                y: form_inner.y + i as u16,
                width: form_inner.width,
                height: 1,
            };
            (field, rect)
        })
        .collect();

    let mut lists = Vec::new();
    let mut items = Vec::new();
    for status in ProjectStatus::ALL {
        let panel = regions.lists[status.index()];
        lists.push((status, panel));

        let inner = panel_inner(panel);
        let offset = app.scroll[status.index()];
        for (slot, item) in app.list_items(status).into_iter().skip(offset).enumerate() {
            let y = inner.y + slot as u16 * ITEM_STRIDE;
            if y + ITEM_HEIGHT > inner.bottom() {
                break;
            }
            let rect = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: ITEM_HEIGHT,
            };
            items.push((item.project_id, rect));
        }
    }

    ScreenLayout {
        form: regions.form,
        fields,
        lists,
        items,
        footer: regions.footer,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
