//! Task store tests
mod common;

use chrono::Duration;
use common::{at, fixed_now, get_test_store, month_end_now, store_with_titles};
use todo_manager::migration::{TaskRecord, TaskV1, TaskV2};
use todo_manager::*;

#[test]
fn test_ids_are_sequential_and_never_reused() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    assert_eq!(store.delete(2), Ok(2));

    let id = store.add(Some("D"), None).unwrap();
    assert_eq!(id, 4);

    let ids: Vec<u32> = store.list().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_add_defaults() {
    let mut store = get_test_store();
    let id = store.add(Some("Buy milk"), None).unwrap();

    let task = store.get_by_id(id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "");
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.tags.is_empty());
    assert_eq!(task.created_at, fixed_now());
    assert_eq!(task.recurrence_pattern, None);
    assert_eq!(task.recurrence_interval, 1);
}

#[test]
fn test_add_rejects_invalid_fields() {
    let mut store = get_test_store();
    assert_eq!(store.add(None, None), Err(TodoError::EmptyTitle));
    assert_eq!(store.add(Some("   "), None), Err(TodoError::EmptyTitle));
    assert_eq!(
        store.add(Some("a".repeat(201).as_str()), None),
        Err(TodoError::TitleTooLong)
    );
    assert_eq!(
        store.add(Some("ok"), Some("d".repeat(1001).as_str())),
        Err(TodoError::DescriptionTooLong)
    );
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
}

#[test]
fn test_capacity_limit() {
    let mut store = get_test_store();
    for i in 0..MAX_TASKS {
        store.add(Some(format!("Task {}", i).as_str()), None).unwrap();
    }
    assert_eq!(store.len(), 1000);
    assert_eq!(
        store.add(Some("One too many"), None),
        Err(TodoError::CapacityExceeded)
    );
    assert_eq!(store.len(), 1000);

    // Deleting frees a slot, but the id keeps counting up
    store.delete(1).unwrap();
    assert_eq!(store.add(Some("Fits again"), None), Ok(1001));
}

#[test]
fn test_id_errors_come_before_payload_errors() {
    let mut store = store_with_titles(&["A"]);
    assert_eq!(store.delete("abc"), Err(TodoError::InvalidId));
    assert_eq!(store.delete(0), Err(TodoError::InvalidId));
    assert_eq!(store.delete(99), Err(TodoError::NotFound(99)));
    assert_eq!(
        store.update_priority(99, "urgent"),
        Err(TodoError::NotFound(99))
    );
    assert_eq!(
        store.update("x", Some(""), None),
        Err(TodoError::InvalidId)
    );
}

#[test]
fn test_update_is_atomic() {
    let mut store = store_with_titles(&["Original"]);
    let too_long = "d".repeat(1001);

    assert_eq!(
        store.update(1, Some("Renamed"), Some(too_long.as_str())),
        Err(TodoError::DescriptionTooLong)
    );
    assert_eq!(store.get_by_id(1).unwrap().title, "Original");

    assert_eq!(store.update(1, Some("Renamed"), Some("notes")), Ok(1));
    let task = store.get_by_id(1).unwrap();
    assert_eq!(task.title, "Renamed");
    assert_eq!(task.description, "notes");
}

#[test]
fn test_update_none_keeps_field_and_empty_clears() {
    let mut store = get_test_store();
    store.add(Some("Title"), Some("notes")).unwrap();

    store.update("1", None, None).unwrap();
    assert_eq!(store.get_by_id(1).unwrap().description, "notes");

    store.update("1", None, Some("")).unwrap();
    assert_eq!(store.get_by_id(1).unwrap().description, "");
}

#[test]
fn test_invalid_priority_leaves_task_unchanged() {
    let mut store = store_with_titles(&["A"]);
    assert_eq!(
        store.update_priority(1, "urgent"),
        Err(TodoError::InvalidPriority)
    );
    assert_eq!(store.get_by_id(1).unwrap().priority, Priority::Medium);

    assert_eq!(store.update_priority(1, "hIgH"), Ok(Priority::High));
    assert_eq!(store.get_by_id(1).unwrap().priority, Priority::High);
}

#[test]
fn test_tags_are_normalized_and_deduplicated() {
    let mut store = store_with_titles(&["A"]);
    assert_eq!(store.add_tags(1, "work, Work, WORK"), Ok(vec!["work".to_string()]));
    assert_eq!(
        store.add_tags(1, vec!["Urgent", "work"]),
        Ok(vec!["work".to_string(), "urgent".to_string()])
    );

    assert_eq!(
        store.remove_tags(1, "WORK, missing"),
        Ok(vec!["urgent".to_string()])
    );
    assert_eq!(
        store.remove_tags(1, "x".repeat(21)),
        Err(TodoError::TagTooLong)
    );
    assert_eq!(store.get_by_id(1).unwrap().tags, vec!["urgent".to_string()]);
}

#[test]
fn test_set_recurrence_validation() {
    let mut store = store_with_titles(&["A"]);
    assert_eq!(
        store.set_recurrence(1, "yearly", 1),
        Err(TodoError::InvalidRecurrencePattern)
    );
    assert_eq!(
        store.set_recurrence(1, "daily", 0),
        Err(TodoError::InvalidInterval)
    );
    assert_eq!(
        store.set_recurrence(1, "Weekly", 2),
        Ok(Some(RecurrencePattern::Weekly))
    );
    assert_eq!(store.get_by_id(1).unwrap().recurrence_interval, 2);

    // "none" ignores the interval and resets it
    assert_eq!(store.set_recurrence(1, "NONE", 0), Ok(None));
    let task = store.get_by_id(1).unwrap();
    assert_eq!(task.recurrence_pattern, None);
    assert_eq!(task.recurrence_interval, 1);
}

#[test]
fn test_completing_daily_task_spawns_next_occurrence() {
    let mut store = store_with_titles(&["Water plants"]);
    store.update_priority(1, "high").unwrap();
    store.add_tags(1, "home").unwrap();
    store.set_recurrence(1, "daily", 1).unwrap();

    let completion = store.set_completed(1, true).unwrap();
    let next_date = fixed_now() + Duration::days(1);
    assert_eq!(
        completion,
        Completion {
            id: 1,
            completed: true,
            spawned: Some(SpawnedOccurrence {
                id: 2,
                next_occurrence: next_date,
            }),
        }
    );

    let tasks = store.list();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].completed);

    let next = &tasks[1];
    assert_eq!(next.title, "Water plants");
    assert!(!next.completed);
    assert_eq!(next.priority, Priority::High);
    assert_eq!(next.tags, vec!["home".to_string()]);
    assert_eq!(next.recurrence_pattern, Some(RecurrencePattern::Daily));
    assert_eq!(next.next_occurrence, Some(next_date));
}

#[test]
fn test_monthly_recurrence_clamps_to_month_end() {
    let mut store = TaskStore::with_clock(month_end_now);
    store.add(Some("Pay rent"), None).unwrap();
    store.set_recurrence(1, "monthly", 1).unwrap();

    let completion = store.set_completed(1, true).unwrap();
    assert_eq!(
        completion.spawned.map(|s| s.next_occurrence),
        Some(at(2024, 2, 29))
    );
}

#[test]
fn test_completing_twice_spawns_once() {
    let mut store = store_with_titles(&["Standup"]);
    store.set_recurrence(1, "weekly", 1).unwrap();

    assert!(store.set_completed(1, true).unwrap().spawned.is_some());
    let again = store.set_completed(1, true).unwrap();
    assert!(again.completed);
    assert_eq!(again.spawned, None);
    assert_eq!(store.len(), 2);

    // Reopening and completing again is a new transition
    store.set_completed(1, false).unwrap();
    assert!(store.set_completed(1, true).unwrap().spawned.is_some());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_spawn_at_capacity_fails_atomically() {
    let mut store = get_test_store();
    for i in 0..MAX_TASKS {
        store.add(Some(format!("Task {}", i).as_str()), None).unwrap();
    }
    store.set_recurrence(1, "daily", 1).unwrap();

    assert_eq!(
        store.set_completed(1, true),
        Err(TodoError::CapacityExceeded)
    );
    assert!(!store.get_by_id(1).unwrap().completed);
    assert_eq!(store.next_id(), 1001);

    // Non-recurring tasks complete fine at capacity
    assert!(store.set_completed(2, true).is_ok());
}

#[test]
fn test_reset() {
    let mut store = store_with_titles(&["A", "B"]);
    store.reset();
    assert!(store.is_empty());
    assert_eq!(store.add(Some("Again"), None), Ok(1));
}

#[test]
fn test_import_legacy_records_upgrades_lazily() {
    let mut store = get_test_store();
    let records = vec![
        TaskRecord::from(TaskV1 {
            id: 4,
            title: "Old task".to_string(),
            description: String::new(),
            completed: true,
        }),
        TaskRecord::from(TaskV2 {
            id: 9,
            title: "Tagged".to_string(),
            description: "v2".to_string(),
            completed: false,
            priority: Priority::Low,
            tags: vec!["Home".to_string(), "home".to_string()],
            created_at: at(2024, 5, 1),
        }),
    ];
    assert_eq!(store.import(records), Ok(2));
    assert_eq!(store.next_id(), 10);

    // Point reads do not persist the upgrade
    let old = store.get_by_id(4).unwrap();
    assert_eq!(old.priority, Priority::Medium);
    assert_eq!(old.created_at, fixed_now());
    assert_eq!(store.records()[0].version(), 1);

    // Title edits keep the record's version
    store.update(4, Some("Renamed"), None).unwrap();
    assert_eq!(store.records()[0].version(), 1);

    // Tags exist from version 2 on and were normalized at import
    assert_eq!(store.get_by_id(9).unwrap().tags, vec!["home".to_string()]);

    let tasks = store.list();
    assert_eq!(tasks[0].title, "Renamed");
    assert!(store.records().iter().all(TaskRecord::is_current));
}

#[test]
fn test_priority_write_upgrades_only_that_record() {
    let mut store = get_test_store();
    store
        .import(vec![
            TaskV1 {
                id: 1,
                title: "First".to_string(),
                description: String::new(),
                completed: false,
            }
            .into(),
            TaskV1 {
                id: 2,
                title: "Second".to_string(),
                description: String::new(),
                completed: false,
            }
            .into(),
        ])
        .unwrap();

    store.update_priority(2, "low").unwrap();
    let versions: Vec<u32> = store.records().iter().map(TaskRecord::version).collect();
    assert_eq!(versions, vec![1, 3]);
}

#[test]
fn test_import_is_all_or_nothing() {
    let mut store = store_with_titles(&["Existing"]);

    let duplicate = vec![
        TaskRecord::Current(create_task(5, "New", "")),
        TaskRecord::Current(create_task(1, "Clash", "")),
    ];
    assert_eq!(store.import(duplicate), Err(TodoError::DuplicateId(1)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), 2);

    let bad_title = vec![TaskRecord::Current(create_task(7, "", ""))];
    assert_eq!(store.import(bad_title), Err(TodoError::EmptyTitle));

    let too_many: Vec<TaskRecord> = (10..=1009)
        .map(|id| TaskRecord::Current(create_task(id, "Bulk", "")))
        .collect();
    assert_eq!(store.import(too_many), Err(TodoError::CapacityExceeded));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_import_never_revives_deleted_ids() {
    let mut store = store_with_titles(&["A", "B", "C"]);
    store.delete(2).unwrap();

    let revived = vec![TaskRecord::Current(create_task(2, "Back again", ""))];
    assert_eq!(store.import(revived), Err(TodoError::DuplicateId(2)));

    let ids: Vec<u32> = store.list().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(store.next_id(), 4);

    // Ids past the counter are still accepted
    let fresh = vec![TaskRecord::Current(create_task(4, "New", ""))];
    assert_eq!(store.import(fresh), Ok(1));
    assert_eq!(store.next_id(), 5);
}

#[test]
fn test_id_space_exhaustion_is_an_error() {
    let mut store = get_test_store();

    let last = vec![TaskRecord::Current(create_task(u32::MAX, "Too far", ""))];
    assert_eq!(store.import(last), Err(TodoError::InvalidId));
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);

    let near_end = vec![TaskRecord::Current(create_task(u32::MAX - 1, "Edge", ""))];
    assert_eq!(store.import(near_end), Ok(1));
    assert_eq!(store.next_id(), u32::MAX);

    assert_eq!(store.add(Some("No room"), None), Err(TodoError::IdsExhausted));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), u32::MAX);

    store.set_recurrence(u32::MAX - 1, "daily", 1).unwrap();
    assert_eq!(
        store.set_completed(u32::MAX - 1, true),
        Err(TodoError::IdsExhausted)
    );
    assert!(!store.get_by_id(u32::MAX - 1).unwrap().completed);
    assert_eq!(store.len(), 1);
}
