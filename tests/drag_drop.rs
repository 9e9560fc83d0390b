mod helpers;

use helpers::{TestContext, center};
use projboard::project::ProjectStatus;
use projboard::views::host_id;

#[test]
fn mouse_drag_moves_project_to_finished() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.render();
    let old_node = ctx
        .app
        .list(ProjectStatus::Active)
        .borrow()
        .view_for(&id)
        .expect("view mounted");

    ctx.drag_project(&id, ProjectStatus::Finished);

    assert_eq!(
        ctx.app.store.get(&id).map(|p| p.status),
        Some(ProjectStatus::Finished)
    );
    assert!(!ctx.panel_contains(ProjectStatus::Active, "Build API"));
    assert!(ctx.panel_contains(ProjectStatus::Finished, "Build API"));
    assert!(ctx.panel_contains(ProjectStatus::Finished, "3 persons"));

    let new_node = ctx
        .app
        .list(ProjectStatus::Finished)
        .borrow()
        .view_for(&id)
        .expect("view remounted");
    assert!(new_node > old_node);
    assert!(ctx.app.tree.borrow().locate(old_node).is_none());
    assert!(ctx.app.list(ProjectStatus::Active).borrow().view_for(&id).is_none());

    ctx.verify_invariants();
}

#[test]
fn hovering_a_list_shows_drop_indicator() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.render();

    let (x, y) = center(ctx.item_rect(&id));
    let (tx, ty) = center(ctx.list_rect(ProjectStatus::Finished));
    ctx.mouse_down(x, y);
    assert_eq!(ctx.app.dragged_project(), Some(&id));

    ctx.mouse_drag(tx, ty);
    assert!(ctx.app.list(ProjectStatus::Finished).borrow().is_droppable());
    let finished = ctx.panel_lines(ProjectStatus::Finished);
    assert!(finished[0].contains('═'), "double border expected: {}", finished[0]);
    assert!(ctx.screen_contains("DRAG"));

    let (ax, ay) = center(ctx.list_rect(ProjectStatus::Active));
    ctx.mouse_drag(ax, ay);
    assert!(!ctx.app.list(ProjectStatus::Finished).borrow().is_droppable());

    ctx.mouse_up(ax, ay);
    assert!(ctx.app.drag.is_none());

    ctx.verify_invariants();
}

#[test]
fn dropping_on_source_list_changes_nothing() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.render();
    let node = ctx
        .app
        .list(ProjectStatus::Active)
        .borrow()
        .view_for(&id)
        .expect("view mounted");

    ctx.drag_project(&id, ProjectStatus::Active);

    assert_eq!(
        ctx.app.store.get(&id).map(|p| p.status),
        Some(ProjectStatus::Active)
    );
    assert_eq!(
        ctx.app.list(ProjectStatus::Active).borrow().view_for(&id),
        Some(node)
    );

    ctx.verify_invariants();
}

#[test]
fn releasing_outside_lists_cancels_drag() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.render();

    let (x, y) = center(ctx.item_rect(&id));
    let (tx, ty) = center(ctx.list_rect(ProjectStatus::Finished));
    let form = ctx.app.layout.form;
    ctx.mouse_down(x, y);
    ctx.mouse_drag(tx, ty);
    ctx.mouse_drag(form.x + 2, form.y + 1);
    ctx.mouse_up(form.x + 2, form.y + 1);

    assert!(ctx.app.drag.is_none());
    assert_eq!(
        ctx.app.store.get(&id).map(|p| p.status),
        Some(ProjectStatus::Active)
    );
    assert!(ctx.panel_contains(ProjectStatus::Active, "Build API"));

    ctx.verify_invariants();
}

#[test]
fn dragging_back_restores_active_status() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.render();

    ctx.drag_project(&id, ProjectStatus::Finished);
    ctx.drag_project(&id, ProjectStatus::Active);

    assert_eq!(
        ctx.app.store.get(&id).map(|p| p.status),
        Some(ProjectStatus::Active)
    );
    let tree = ctx.app.tree.borrow();
    let active = tree.host(&host_id(ProjectStatus::Active)).expect("host");
    assert_eq!(active.nodes.len(), 1);
    drop(tree);

    ctx.verify_invariants();
}

#[test]
fn moved_project_goes_to_end_of_target_list() {
    let mut ctx = TestContext::new();
    let first = ctx.app.store.add_project("First", "one", 1);
    let second = ctx.app.store.add_project("Second", "two", 2);
    ctx.render();

    ctx.drag_project(&second, ProjectStatus::Finished);
    ctx.drag_project(&first, ProjectStatus::Finished);

    let titles: Vec<String> = ctx
        .app
        .list_items(ProjectStatus::Finished)
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, ["Second", "First"]);

    ctx.verify_invariants();
}

#[test]
fn clicking_a_field_focuses_the_form() {
    let mut ctx = TestContext::new();
    ctx.app.focus_list(ProjectStatus::Finished);
    ctx.render();

    let (field, rect) = ctx.app.layout.fields[1];
    ctx.mouse_down(rect.x + 1, rect.y);
    ctx.mouse_up(rect.x + 1, rect.y);

    assert_eq!(ctx.app.focus, projboard::app::Focus::Form);
    assert_eq!(ctx.app.input.focused(), field);

    ctx.verify_invariants();
}

#[test]
fn mouse_is_ignored_while_alert_is_open() {
    let mut ctx = TestContext::new();
    let id = ctx.app.store.add_project("Build API", "Backend work", 3);
    ctx.submit_project("x", "y", "9");
    assert!(ctx.app.drag.is_none());

    let rect = ctx.item_rect(&id);
    ctx.mouse_down(rect.x + 1, rect.y);
    assert!(ctx.app.drag.is_none());

    ctx.verify_invariants();
}

#[test]
fn press_after_lost_release_drags_the_new_item() {
    let mut ctx = TestContext::new();
    let alpha = ctx.app.store.add_project("Alpha", "first one", 1);
    let bravo = ctx.app.store.add_project("Bravo", "second one", 2);
    ctx.render();

    // Press on Alpha; the release happens outside the terminal
    let (ax, ay) = center(ctx.item_rect(&alpha));
    ctx.mouse_down(ax, ay);
    assert_eq!(ctx.app.dragged_project(), Some(&alpha));

    ctx.drag_project(&bravo, ProjectStatus::Finished);

    assert_eq!(
        ctx.app.store.get(&bravo).map(|p| p.status),
        Some(ProjectStatus::Finished)
    );
    assert_eq!(
        ctx.app.store.get(&alpha).map(|p| p.status),
        Some(ProjectStatus::Active)
    );
    assert!(ctx.app.drag.is_none());

    ctx.verify_invariants();
}
