// Integration tests for the command layer: execution feedback,
// persistence round trips and error paths.

mod common;

use common::get_test_handler;
use rolodex::{AppHandler, Command, Tag};

fn add_person_cmd(name: &str, tags: &[&str]) -> Command {
    Command::AddPerson {
        name: name.to_string(),
        phone: None,
        email: None,
        address: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn add_person_reports_and_persists() {
    let (mut handler, temp_file) = get_test_handler();

    let result = add_person_cmd("Alice Pauline", &["friends"])
        .execute(&mut handler)
        .unwrap();
    assert!(result.feedback.contains("New person added"));
    assert!(result.feedback.contains("Alice Pauline"));
    assert!(result.feedback.contains("[friends]"));

    // A fresh handler over the same file sees the person and the tag.
    let reloaded = AppHandler::new(temp_file.path()).unwrap();
    assert_eq!(reloaded.model().book().persons().len(), 1);
    assert!(reloaded.model().has_tag(&Tag::new("friends").unwrap()));
}

#[test]
fn add_person_rejects_invalid_tag() {
    let (mut handler, _temp_file) = get_test_handler();
    let result = add_person_cmd("Alice Pauline", &["not a tag"]).execute(&mut handler);
    assert!(result.is_err());
    // Nothing was partially constructed.
    assert_eq!(handler.model().book().persons().len(), 0);
}

#[test]
fn add_person_collapses_repeated_tags() {
    let (mut handler, _temp_file) = get_test_handler();
    add_person_cmd("Alice Pauline", &["friends", "friends", "owesMoney"])
        .execute(&mut handler)
        .unwrap();

    let alice = &handler.model().book().persons()[0];
    assert_eq!(alice.tags.len(), 2);
    assert_eq!(alice.tags[0], Tag::new("friends").unwrap());
    assert_eq!(alice.tags[1], Tag::new("owesMoney").unwrap());
}

#[test]
fn add_duplicate_person_fails() {
    let (mut handler, _temp_file) = get_test_handler();
    add_person_cmd("Alice Pauline", &[])
        .execute(&mut handler)
        .unwrap();
    let result = add_person_cmd("Alice Pauline", &[]).execute(&mut handler);
    assert!(result.is_err());
}

#[test]
fn delete_person_by_name() {
    let (mut handler, _temp_file) = get_test_handler();
    add_person_cmd("Alice Pauline", &[])
        .execute(&mut handler)
        .unwrap();

    let result = Command::DeletePerson {
        name: "Alice Pauline".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.contains("Deleted person"));
    assert_eq!(handler.model().book().persons().len(), 0);

    let result = Command::DeletePerson {
        name: "Alice Pauline".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());
}

#[test]
fn add_event_validates_date() {
    let (mut handler, _temp_file) = get_test_handler();

    let result = Command::AddEvent {
        name: "Launch".to_string(),
        date: "2026-09-01".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.contains("Launch (2026-09-01)"));

    let result = Command::AddEvent {
        name: "Broken".to_string(),
        date: "someday".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());
    assert_eq!(handler.model().book().events().len(), 1);
}

#[test]
fn reminders_attach_to_events_and_persist() {
    let (mut handler, temp_file) = get_test_handler();
    Command::AddEvent {
        name: "Launch".to_string(),
        date: "2026-09-01".to_string(),
    }
    .execute(&mut handler)
    .unwrap();

    let result = Command::AddReminder {
        event: "Launch".to_string(),
        message: "book the venue".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.contains("1 reminder(s) total"));

    let reloaded = AppHandler::new(temp_file.path()).unwrap();
    let launch = reloaded.model().book().find_event_by_name("Launch").unwrap();
    assert_eq!(launch.reminders().len(), 1);
    assert_eq!(launch.reminders()[0].message, "book the venue");
}

#[test]
fn reminder_requires_existing_event_and_message() {
    let (mut handler, _temp_file) = get_test_handler();

    let result = Command::AddReminder {
        event: "Ghost".to_string(),
        message: "hello".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());

    Command::AddEvent {
        name: "Launch".to_string(),
        date: "2026-09-01".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    let result = Command::AddReminder {
        event: "Launch".to_string(),
        message: "   ".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());
}

#[test]
fn remove_tag_cascades_and_reports_unknown_tags() {
    let (mut handler, _temp_file) = get_test_handler();
    add_person_cmd("Benson Meier", &["owesMoney", "friends"])
        .execute(&mut handler)
        .unwrap();

    let result = Command::RemoveTag {
        tag: "owesMoney".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.contains("Removed tag [owesMoney]"));
    assert_eq!(handler.model().book().persons()[0].tags.len(), 1);

    let err = Command::RemoveTag {
        tag: "owesMoney".to_string(),
    }
    .execute(&mut handler)
    .unwrap_err();
    assert!(err.to_string().contains("Available tags: friends"));
}

#[test]
fn set_tag_color_persists_explicit_color() {
    let (mut handler, temp_file) = get_test_handler();
    add_person_cmd("Alice Pauline", &["friends"])
        .execute(&mut handler)
        .unwrap();

    let result = Command::SetTagColor {
        tag: "friends".to_string(),
        color: "red".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.contains("#ff0000"));

    let reloaded = AppHandler::new(temp_file.path()).unwrap();
    assert_eq!(
        reloaded.model().tag_color(&Tag::new("friends").unwrap()),
        Some("#ff0000")
    );
}

#[test]
fn set_tag_color_rejects_unknown_tag_and_bad_color() {
    let (mut handler, _temp_file) = get_test_handler();

    let result = Command::SetTagColor {
        tag: "ghost".to_string(),
        color: "red".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());

    add_person_cmd("Alice Pauline", &["friends"])
        .execute(&mut handler)
        .unwrap();
    let result = Command::SetTagColor {
        tag: "friends".to_string(),
        color: "not a color".to_string(),
    }
    .execute(&mut handler);
    assert!(result.is_err());
}

#[test]
fn find_and_list_render_the_filtered_view() {
    let (mut handler, _temp_file) = get_test_handler();
    add_person_cmd("Alice Pauline", &["friends"])
        .execute(&mut handler)
        .unwrap();
    add_person_cmd("Benson Meier", &[])
        .execute(&mut handler)
        .unwrap();

    let result = Command::FindPersons {
        keyword: "meier".to_string(),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.starts_with("1 person(s) listed"));
    assert!(result.feedback.contains("Benson Meier"));

    let result = Command::ListPersons {
        tag: Some("friends".to_string()),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.starts_with("1 person(s) listed"));
    assert!(result.feedback.contains("Alice Pauline"));

    let result = Command::ListPersons { tag: None }
        .execute(&mut handler)
        .unwrap();
    assert!(result.feedback.starts_with("2 person(s) listed"));
}

#[test]
fn list_events_with_date_cutoff() {
    let (mut handler, _temp_file) = get_test_handler();
    for (name, date) in [("Planning", "2026-05-01"), ("Retro", "2026-06-01")] {
        Command::AddEvent {
            name: name.to_string(),
            date: date.to_string(),
        }
        .execute(&mut handler)
        .unwrap();
    }

    let result = Command::ListEvents {
        on_or_before: Some("2026-05-15".to_string()),
    }
    .execute(&mut handler)
    .unwrap();
    assert!(result.feedback.starts_with("1 event(s) listed"));
    assert!(result.feedback.contains("Planning"));
    assert!(!result.feedback.contains("Retro"));
}
