//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `oceannotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use oceannotes_core::{Category, Note, Workspace};

fn demo_categories() -> Vec<Category> {
    vec![
        Category::all_notes(),
        Category::with_color("work", "Work", "#2563EB"),
        Category::with_color("personal", "Personal", "#F59E0B"),
        Category::with_color("ideas", "Ideas", "#10B981"),
    ]
}

fn demo_notes() -> Vec<Note> {
    let mut welcome = Note::new(None);
    welcome.title = "Welcome to Ocean Notes".to_string();
    welcome.content = "This is your modern note space. Create, edit, and organize notes \
                       with style. Try selecting categories, or start typing."
        .to_string();
    welcome.tags = vec!["onboarding".to_string(), "tips".to_string()];

    let mut sprint = Note::new(Some("work".to_string()));
    sprint.title = "Work: Sprint Planning".to_string();
    sprint.content = "Draft sprint goals, scope, and timeline. Capture tasks and \
                      priorities. Align with team objectives."
        .to_string();
    sprint.tags = vec!["work".to_string(), "planning".to_string()];

    let mut groceries = Note::new(Some("personal".to_string()));
    groceries.title = "Personal: Grocery List".to_string();
    groceries.content =
        "- Almond milk\n- Berries\n- Oats\n- Coffee beans\nTip: Use separate notes for \
         recurring lists."
            .to_string();
    groceries.tags = vec!["personal".to_string(), "list".to_string()];

    vec![welcome, sprint, groceries]
}

fn main() {
    println!("oceannotes_core version={}", oceannotes_core::core_version());

    let workspace = Workspace::initialize(demo_categories(), demo_notes());
    for category in workspace.categories() {
        println!("category id={} name={} count={}", category.id, category.name, category.count);
    }
    for note in workspace.filtered_notes() {
        println!("note id={} title={}", note.id, note.display_title());
    }
}
