use oceannotes_core::{
    Category, Note, NoteId, NotePatch, Workspace, WorkspaceError, ALL_CATEGORY_ID,
};

fn seeded() -> (Workspace, [NoteId; 3]) {
    let categories = vec![
        Category::all_notes(),
        Category::with_color("work", "Work", "#2563EB"),
        Category::with_color("personal", "Personal", "#F59E0B"),
        Category::with_color("ideas", "Ideas", "#10B981"),
    ];

    let mut welcome = Note::new(None);
    welcome.title = "Welcome to Ocean Notes".to_string();
    welcome.content = "Create, edit, and organize notes.".to_string();

    let mut sprint = Note::new(Some("work".to_string()));
    sprint.title = "Work: Sprint Planning".to_string();
    sprint.content = "Draft sprint goals, scope, and timeline.".to_string();

    let mut groceries = Note::new(Some("personal".to_string()));
    groceries.title = "Personal: Grocery List".to_string();
    groceries.content = "- Almond milk\n- Berries\n- Oats".to_string();

    let ids = [welcome.id, sprint.id, groceries.id];
    let workspace = Workspace::initialize(categories, vec![welcome, sprint, groceries]);
    (workspace, ids)
}

fn assert_invariants(workspace: &Workspace) {
    // Active note is null or present in the filtered list.
    if let Some(active) = workspace.active_note_id() {
        assert!(
            workspace
                .filtered_notes()
                .iter()
                .any(|note| note.id == active),
            "active note {active} is not in the filtered list"
        );
    }

    // Category counts match actual membership.
    for category in workspace.categories() {
        let expected = if category.is_all() {
            workspace.notes().len()
        } else {
            workspace
                .notes()
                .iter()
                .filter(|note| note.category_id.as_deref() == Some(category.id.as_str()))
                .count()
        };
        assert_eq!(
            category.count, expected,
            "count mismatch for category {}",
            category.id
        );
    }
}

#[test]
fn initialize_selects_first_note_and_derives_counts() {
    let (workspace, ids) = seeded();

    assert_eq!(workspace.active_category_id(), ALL_CATEGORY_ID);
    assert_eq!(workspace.active_note_id(), Some(ids[0]));
    assert_eq!(workspace.filtered_notes().len(), 3);

    let counts: Vec<(String, usize)> = workspace
        .categories()
        .iter()
        .map(|c| (c.id.clone(), c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("all".to_string(), 3),
            ("work".to_string(), 1),
            ("personal".to_string(), 1),
            ("ideas".to_string(), 0),
        ]
    );
    assert_invariants(&workspace);
}

#[test]
fn select_category_narrows_filter_and_fixes_selection() {
    // Scenario A.
    let (mut workspace, ids) = seeded();

    workspace.select_category("work").unwrap();
    assert_eq!(workspace.filtered_notes().len(), 1);
    assert_eq!(workspace.filtered_notes()[0].id, ids[1]);
    assert_eq!(workspace.active_note_id(), Some(ids[1]));
    assert_invariants(&workspace);
}

#[test]
fn search_without_matches_empties_list_and_clears_selection() {
    // Scenario B: the work note mentions nothing about groceries.
    let (mut workspace, _) = seeded();

    workspace.select_category("work").unwrap();
    workspace.set_search_query("grocery");
    assert!(workspace.filtered_notes().is_empty());
    assert_eq!(workspace.active_note_id(), None);
    assert_invariants(&workspace);
}

#[test]
fn create_note_inherits_active_category_and_leads_the_list() {
    // Scenario C.
    let (mut workspace, _) = seeded();

    workspace.select_category("work").unwrap();
    let new_id = workspace.create_note();

    let created = workspace
        .notes()
        .iter()
        .find(|note| note.id == new_id)
        .unwrap();
    assert_eq!(created.category_id.as_deref(), Some("work"));
    assert!(created.title.is_empty());
    assert!(created.tags.is_empty());
    assert!(created.updated_at > 0);

    assert_eq!(workspace.filtered_notes()[0].id, new_id);
    assert_eq!(workspace.notes()[0].id, new_id);
    assert_eq!(workspace.active_note_id(), Some(new_id));
    assert_invariants(&workspace);
}

#[test]
fn create_note_under_all_category_stays_uncategorized() {
    let (mut workspace, _) = seeded();

    let new_id = workspace.create_note();
    let created = workspace
        .notes()
        .iter()
        .find(|note| note.id == new_id)
        .unwrap();
    assert_eq!(created.category_id, None);
    assert_eq!(workspace.active_note_id(), Some(new_id));
    assert_invariants(&workspace);
}

#[test]
fn create_note_under_excluding_search_falls_back_to_valid_selection() {
    // The fresh empty note cannot match the active search, so the fix-up
    // keeps the selection inside the filtered list instead of dangling.
    let (mut workspace, ids) = seeded();

    workspace.set_search_query("grocery");
    assert_eq!(workspace.active_note_id(), Some(ids[2]));

    let new_id = workspace.create_note();
    assert!(workspace
        .filtered_notes()
        .iter()
        .all(|note| note.id != new_id));
    assert_eq!(workspace.active_note_id(), Some(ids[2]));
    assert_invariants(&workspace);
}

#[test]
fn move_note_shifts_counts_by_exactly_one() {
    // Scenario D.
    let (mut workspace, ids) = seeded();

    workspace.select_category("work").unwrap();
    assert_eq!(workspace.active_note_id(), Some(ids[1]));

    workspace.move_note_to_category(Some("ideas".to_string())).unwrap();
    let count_of = |workspace: &Workspace, id: &str| {
        workspace
            .categories()
            .iter()
            .find(|c| c.id == id)
            .unwrap()
            .count
    };
    assert_eq!(count_of(&workspace, "ideas"), 1);
    assert_eq!(count_of(&workspace, "work"), 0);

    workspace.select_category("ideas").unwrap();
    assert!(workspace
        .filtered_notes()
        .iter()
        .any(|note| note.id == ids[1]));
    assert_invariants(&workspace);
}

#[test]
fn unknown_category_is_rejected_without_state_change() {
    let (mut workspace, _) = seeded();
    let before = workspace.snapshot();

    let err = workspace.select_category("archive").unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownCategory("archive".to_string()));
    assert_eq!(workspace.snapshot(), before);
}

#[test]
fn select_note_requires_membership_in_filtered_list() {
    let (mut workspace, ids) = seeded();

    workspace.select_category("work").unwrap();
    // The grocery note exists but is filtered out by category.
    let err = workspace.select_note(ids[2]).unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownNote(ids[2]));
    assert_eq!(workspace.active_note_id(), Some(ids[1]));

    workspace.select_category(ALL_CATEGORY_ID).unwrap();
    workspace.select_note(ids[2]).unwrap();
    assert_eq!(workspace.active_note_id(), Some(ids[2]));
    assert_invariants(&workspace);
}

#[test]
fn set_search_query_is_idempotent() {
    let (mut workspace, _) = seeded();

    workspace.set_search_query("oats");
    let first = workspace.snapshot();
    workspace.set_search_query("oats");
    assert_eq!(workspace.snapshot().filtered_notes, first.filtered_notes);
    assert_eq!(workspace.snapshot().active_note_id, first.active_note_id);
}

#[test]
fn create_then_delete_restores_prior_sequence_and_selection() {
    let (mut workspace, ids) = seeded();

    workspace.select_note(ids[1]).unwrap();
    let before: Vec<NoteId> = workspace.notes().iter().map(|note| note.id).collect();

    workspace.create_note();
    workspace.delete_note();

    let after: Vec<NoteId> = workspace.notes().iter().map(|note| note.id).collect();
    assert_eq!(after, before);
    // The previously selected note is still selectable, so the fix-up keeps
    // falling back to the head of the filtered list.
    assert_eq!(workspace.active_note_id(), Some(ids[0]));
    assert_invariants(&workspace);
}

#[test]
fn update_note_merges_patch_and_refilters() {
    let (mut workspace, ids) = seeded();

    workspace.set_search_query("grocery");
    assert_eq!(workspace.active_note_id(), Some(ids[2]));

    let before = workspace.active_note().unwrap().updated_at;
    workspace
        .update_note(
            NotePatch::default()
                .title("Pantry")
                .content("restock later"),
        )
        .unwrap();

    // The note no longer matches the search, so it leaves the filtered
    // list and the selection clears.
    assert!(workspace.filtered_notes().is_empty());
    assert_eq!(workspace.active_note_id(), None);

    let updated = workspace
        .notes()
        .iter()
        .find(|note| note.id == ids[2])
        .unwrap();
    assert_eq!(updated.title, "Pantry");
    assert_eq!(updated.content, "restock later");
    assert!(updated.updated_at >= before);
    assert_invariants(&workspace);
}

#[test]
fn update_patch_with_unknown_category_is_rejected_whole() {
    let (mut workspace, ids) = seeded();
    let before_title = workspace.active_note().unwrap().title.clone();

    let err = workspace
        .update_note(
            NotePatch::default()
                .title("should not land")
                .category(Some("ghost".to_string())),
        )
        .unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownCategory("ghost".to_string()));

    let note = workspace
        .notes()
        .iter()
        .find(|note| note.id == ids[0])
        .unwrap();
    assert_eq!(note.title, before_title);
}

#[test]
fn synthetic_all_category_cannot_own_notes() {
    let (mut workspace, _) = seeded();

    let err = workspace
        .move_note_to_category(Some(ALL_CATEGORY_ID.to_string()))
        .unwrap_err();
    assert_eq!(err, WorkspaceError::ReservedCategory);

    let err = workspace
        .update_note(NotePatch::default().category(Some(ALL_CATEGORY_ID.to_string())))
        .unwrap_err();
    assert_eq!(err, WorkspaceError::ReservedCategory);
}

#[test]
fn move_note_to_none_uncategorizes() {
    let (mut workspace, ids) = seeded();

    workspace.select_category("work").unwrap();
    workspace.move_note_to_category(None).unwrap();

    let note = workspace
        .notes()
        .iter()
        .find(|note| note.id == ids[1])
        .unwrap();
    assert_eq!(note.category_id, None);
    // The note left the work category, so the work list is now empty.
    assert!(workspace.filtered_notes().is_empty());
    assert_eq!(workspace.active_note_id(), None);
    assert_invariants(&workspace);
}

#[test]
fn mutations_without_active_note_are_no_ops() {
    let mut workspace = Workspace::initialize(vec![Category::new("work", "Work")], Vec::new());
    assert_eq!(workspace.active_note_id(), None);

    workspace
        .update_note(NotePatch::default().title("nobody home"))
        .unwrap();
    workspace.delete_note();
    workspace
        .move_note_to_category(Some("work".to_string()))
        .unwrap();

    assert!(workspace.notes().is_empty());
    assert_invariants(&workspace);
}

#[test]
fn invariants_hold_across_an_arbitrary_operation_sequence() {
    let (mut workspace, ids) = seeded();

    workspace.set_search_query("  ");
    assert_invariants(&workspace);
    workspace.select_category("personal").unwrap();
    assert_invariants(&workspace);
    let created = workspace.create_note();
    assert_invariants(&workspace);
    workspace
        .update_note(NotePatch::default().title("Errands").tags(vec!["todo".to_string()]))
        .unwrap();
    assert_invariants(&workspace);
    workspace.set_search_query("errands");
    assert_invariants(&workspace);
    assert_eq!(workspace.active_note_id(), Some(created));
    workspace.move_note_to_category(Some("ideas".to_string())).unwrap();
    assert_invariants(&workspace);
    workspace.set_search_query("");
    assert_invariants(&workspace);
    workspace.select_category(ALL_CATEGORY_ID).unwrap();
    workspace.select_note(ids[2]).unwrap();
    workspace.delete_note();
    assert_invariants(&workspace);
    workspace.delete_note();
    assert_invariants(&workspace);
}

#[test]
fn snapshot_is_a_detached_copy() {
    let (mut workspace, _) = seeded();
    let snapshot = workspace.snapshot();

    workspace.create_note();
    assert_eq!(snapshot.notes.len(), 3);
    assert_eq!(workspace.notes().len(), 4);
    assert_eq!(snapshot.search_query, "");
}
