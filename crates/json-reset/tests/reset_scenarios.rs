//! End-to-end reset scenarios: diff a change, let a user touch the data, reset.

use std::cell::RefCell;

use json_reset::logger::{CHECK, WARN};
use json_reset::{diff, may_change, reset, reset_logged, reset_optional, Logger, Operation, OperationOptions};
use serde_json::{json, Value};

fn reset_with(mut data: Value, from: &Value, to: &Value, opts: OperationOptions) -> (Value, Vec<Operation>) {
    let history = diff(Some(from), Some(to));
    let remaining = reset(&mut data, &history, &opts);
    (data, remaining)
}

/// Reset `b` back to `a` with default options.
fn reset_back(a: Value, b: Value) -> (Value, Vec<Operation>) {
    reset_with(b.clone(), &b, &a, OperationOptions::default())
}

// ── may_change ────────────────────────────────────────────────────────────

mod may_change_paths {
    use super::*;

    fn docs() -> (Value, Value) {
        (
            json!({"name": "Mike", "color": "red", "option": [1, 3]}),
            json!({"name": "Julia", "color": "red", "option": [1, 2, 3], "total": 23}),
        )
    }

    #[test]
    fn changed_object_value() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "name"));
    }

    #[test]
    fn unchanged_object_value() {
        let (a, b) = docs();
        assert!(!may_change(&a, &b, "color"));
    }

    #[test]
    fn missing_object_entry() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "size.name"));
    }

    #[test]
    fn added_object_entry() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "total"));
    }

    #[test]
    fn unchanged_array_element() {
        let (a, b) = docs();
        assert!(!may_change(&a, &b, "option.0"));
    }

    #[test]
    fn changed_array_element() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "option.1"));
    }

    #[test]
    fn added_array_element() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "option.2"));
    }

    #[test]
    fn missing_array_element() {
        let (a, b) = docs();
        assert!(may_change(&a, &b, "option.3"));
    }
}

// ── Basic objects ─────────────────────────────────────────────────────────

mod basic_object {
    use super::*;

    #[test]
    fn added_prop() {
        let a = json!({"name": "Mike"});
        let (data, remaining) = reset_back(a.clone(), json!({"name": "Julia", "language": "en"}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn deleted_prop() {
        let a = json!({"name": "Mike"});
        let (data, remaining) = reset_back(a.clone(), json!({}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn replaced_prop() {
        let a = json!({"name": "Mike"});
        let (data, remaining) = reset_back(a.clone(), json!({"name": "Julia"}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn added_deleted_replaced_props() {
        let a = json!({"name": "Mike", "language": "en"});
        let (data, remaining) = reset_back(a.clone(), json!({"name": "Julia", "favorite": "blue"}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn absent_original() {
        let mut data = json!({"name": "Julia", "favorite": "blue"});
        let history = diff(Some(&data), None);
        let remaining = reset(&mut data, &history, &OperationOptions::default());
        assert_eq!(data, json!({}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn absent_history() {
        let mut data = json!({"name": "Julia", "favorite": "blue", "tags": [], "meta": {}});
        let remaining = reset_optional(Some(&mut data), None, &OperationOptions::default());
        assert_eq!(data, json!({"name": "Julia", "favorite": "blue", "tags": [], "meta": {}}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn absent_data_and_history() {
        assert!(reset_optional(None, None, &OperationOptions::default()).is_empty());
    }
}

// ── Basic arrays ──────────────────────────────────────────────────────────

mod basic_array {
    use super::*;

    #[test]
    fn added_element() {
        let a = json!({"option": [0, 1, 2, 3]});
        let (data, remaining) = reset_back(a.clone(), json!({"option": [0, 1, 2, 3, 4]}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn deleted_element() {
        let a = json!({"option": [0, 1, 2, 3]});
        let (data, remaining) = reset_back(a.clone(), json!({"option": [0, 1, 2]}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn replaced_elements() {
        let a = json!({"option": [0, 1, 2, 3]});
        let (data, remaining) = reset_back(a.clone(), json!({"option": [9, 9, 9, 9]}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn added_deleted_replaced_elements() {
        let a = json!({"option": [0, 1, 2, 3]});
        let (data, remaining) = reset_back(a.clone(), json!({"option": [1, 9, 3, 5, 4]}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn exact_removes_element_in_place() {
        let a = json!({"option": [0, 1, 2, 3]});
        let b = json!({"option": [0, 1, 2, 3, 4]});
        let exact = OperationOptions { exact: true, ..Default::default() };
        let (data, remaining) = reset_with(b.clone(), &b, &a, exact);
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn adds_into_empty_array() {
        let a = json!({"option": [1]});
        let (data, remaining) = reset_back(a.clone(), json!({"option": []}));
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }

    #[test]
    fn cleans_by_default() {
        let a = json!({
            "option": {"id": [[]], "code": {}},
            "list": [],
            "person": {"detail": {"name": "mike"}},
            "fav": [[1]]
        });
        let (data, remaining) = reset_back(a, json!({"option": [1], "code": {"a": 1}}));
        assert_eq!(data, json!({"person": {"detail": {"name": "mike"}}, "fav": [[1]]}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn keeps_empties_without_clean() {
        let a = json!({
            "option": {"id": [[]], "code": {}},
            "list": [],
            "person": {"detail": {"name": "mike"}},
            "fav": [[1]]
        });
        let b = json!({"option": [1], "code": {"a": 1}});
        let no_clean = OperationOptions { clean: false, ..Default::default() };
        let (data, remaining) = reset_with(b.clone(), &b, &a, no_clean);
        assert_eq!(data, a);
        assert!(remaining.is_empty());
    }
}

// ── Combined ──────────────────────────────────────────────────────────────

#[test]
fn combined_object() {
    let a = json!({
        "name": "mike",
        "color": "blue",
        "address": {"street": "bell", "no": 12, "option": [1, 2, 3, 4]},
        "size": [{"s": 1, "n": "s"}, {"s": 2, "n": "m"}]
    });
    let b = json!({
        "name": "susan",
        "address": {"street": "other", "no": [1, 2], "option": [1, 9, 3, 4, 12]},
        "size": [{"x": 3, "s": 1, "n": "s"}]
    });
    let (data, remaining) = reset_back(a.clone(), b);
    assert_eq!(data, a);
    assert!(remaining.is_empty());
}

// ── User-modified objects ─────────────────────────────────────────────────

mod user_modified_object {
    use super::*;

    #[test]
    fn prop_to_delete_already_gone() {
        let a = json!({"name": "Mike"});
        let b = json!({"name": "Julia", "color": "red"});
        let (data, remaining) = reset_with(json!({"name": "Julia"}), &b, &a, Default::default());
        assert_eq!(data, json!({"name": "Mike"}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn replaced_data_added_under_missing_parent() {
        let a = json!({"color": {"id": 1, "detail": {"lang": "en", "name": "red"}}});
        let b = json!({"color": {"id": 2}});
        let (data, remaining) = reset_with(json!({"name": "Julia"}), &b, &a, Default::default());
        assert_eq!(
            data,
            json!({"color": {"id": 1, "detail": {"lang": "en", "name": "red"}}, "name": "Julia"})
        );
        assert!(remaining.is_empty());
    }

    #[test]
    fn keeps_added_prop_modified_by_user() {
        let a = json!({"name": "Mike"});
        let b = json!({"name": "Mike", "color": "blue"});
        let (data, remaining) = reset_with(json!({"name": "Mike", "color": "red"}), &b, &a, Default::default());
        assert_eq!(data, json!({"name": "Mike", "color": "red"}));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].op_name(), "remove");
    }

    #[test]
    fn no_replace_of_missing_prop_without_add_not_found() {
        let a = json!({"name": "Mike"});
        let b = json!({"name": "Julia"});
        let opts = OperationOptions { add_not_found: false, ..Default::default() };
        let (data, remaining) = reset_with(json!({"color": "red"}), &b, &a, opts);
        assert_eq!(data, json!({"color": "red"}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn no_replace_of_user_edit() {
        let a = json!({"name": "Mike"});
        let b = json!({"name": "Julia"});
        let (data, remaining) = reset_with(json!({"name": "Tanja"}), &b, &a, Default::default());
        assert_eq!(data, json!({"name": "Tanja"}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn force_replaces_user_edit() {
        let a = json!({"name": "Mike"});
        let b = json!({"name": "Julia"});
        let opts = OperationOptions { force: true, ..Default::default() };
        let (data, remaining) = reset_with(json!({"name": "Tanja"}), &b, &a, opts);
        assert_eq!(data, json!({"name": "Mike"}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn no_add_of_prop_user_set() {
        let a = json!({"name": "Mike", "color": "red"});
        let b = json!({"name": "Mike"});
        let (data, remaining) = reset_with(json!({"name": "Mike", "color": "blue"}), &b, &a, Default::default());
        assert_eq!(data, json!({"name": "Mike", "color": "blue"}));
        assert_eq!(remaining.len(), 1);
    }
}

// ── Logger ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingLogger {
    lines: RefCell<Vec<(&'static str, String)>>,
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.lines.borrow_mut().push(("error", message.to_string()));
    }
    fn warn(&self, message: &str) {
        self.lines.borrow_mut().push(("warn", message.to_string()));
    }
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(("info", message.to_string()));
    }
    fn verbose(&self, message: &str) {
        self.lines.borrow_mut().push(("verbose", message.to_string()));
    }
}

fn logged_reset(name: Option<&str>) -> (Value, Vec<Operation>, Vec<(&'static str, String)>) {
    let a = json!({"name": "Mike"});
    let b = json!({"name": "Julia", "color": "red"});
    let mut data = json!({"name": "George"});
    let logger = RecordingLogger::default();
    let history = diff(Some(&b), Some(&a));
    let remaining = reset_logged(&mut data, &history, &OperationOptions::default(), &logger, name);
    (data, remaining, logger.lines.into_inner())
}

#[test]
fn logs_with_name() {
    let (data, remaining, lines) = logged_reset(Some("name.js"));
    assert_eq!(data, json!({"name": "George"}));
    assert_eq!(remaining.len(), 1);

    // test + remove of color, test + replace of name
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|(_, line)| line.ends_with(" of name.js")));
    let levels: Vec<_> = lines.iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec!["warn", "info", "warn", "warn"]);
    assert!(lines[0].1.contains("test"));
    assert!(lines[0].1.starts_with(WARN));
    assert!(lines[1].1.starts_with(CHECK));
    assert!(lines[3].1.contains("replace"));
    assert!(lines[3].1.contains("during reset path \"/name\""));
}

#[test]
fn test_op_logs_as_warning() {
    let logger = RecordingLogger::default();
    let mut data = json!({"name": "Julia"});
    let history = vec![Operation::Test { path: vec!["name".into()], value: json!("Julia") }];
    let remaining = reset_logged(&mut data, &history, &OperationOptions::default(), &logger, None);

    assert!(remaining.is_empty());
    let lines = logger.lines.into_inner();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, "warn");
    assert!(lines[0].1.starts_with(WARN));
}

#[test]
fn logs_without_name() {
    let (data, remaining, lines) = logged_reset(None);
    assert_eq!(data, json!({"name": "George"}));
    assert_eq!(remaining.len(), 1);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|(_, line)| !line.contains(" of ")));
}

// ── User-modified arrays ──────────────────────────────────────────────────

mod user_modified_array {
    use super::*;

    fn original() -> Value {
        json!({"option": [0, 1, 2, 3]})
    }

    fn appended() -> Value {
        json!({"option": [0, 1, 2, 3, 4]})
    }

    fn replaced_last() -> Value {
        json!({"option": [0, 1, 2, 99]})
    }

    #[test]
    fn keeps_user_inserted_element() {
        let (data, remaining) =
            reset_with(json!({"option": [0, 999, 1, 2, 3, 4]}), &appended(), &original(), Default::default());
        assert_eq!(data, json!({"option": [0, 999, 1, 2, 3]}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn removes_element_moved_by_user() {
        let (data, remaining) =
            reset_with(json!({"option": [4, 0, 1, 2, 3]}), &appended(), &original(), Default::default());
        assert_eq!(data, json!({"option": [0, 1, 2, 3]}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn removes_nearest_match() {
        let (data, remaining) =
            reset_with(json!({"option": [4, 0, 1, 2, 3, 4]}), &appended(), &original(), Default::default());
        assert_eq!(data, json!({"option": [4, 0, 1, 2, 3]}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn exact_skips_shifted_element() {
        let opts = OperationOptions { exact: true, ..Default::default() };
        let (data, remaining) = reset_with(json!({"option": [4, 0, 1, 2, 3, 4]}), &appended(), &original(), opts);
        assert_eq!(data, json!({"option": [4, 0, 1, 2, 3, 4]}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn force_adds_value_whose_predecessor_is_gone() {
        let opts = OperationOptions { force: true, ..Default::default() };
        let (data, remaining) = reset_with(json!({"option": [0, 1, 2, 11]}), &replaced_last(), &original(), opts);
        assert_eq!(data, json!({"option": [0, 1, 2, 3, 11]}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn skips_duplicate_added_by_user() {
        let (data, remaining) =
            reset_with(json!({"option": [0, 1, 2, 3, 99]}), &replaced_last(), &original(), Default::default());
        assert_eq!(data, json!({"option": [0, 1, 2, 3]}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn allows_duplicate_without_check() {
        let opts = OperationOptions { check_duplicate: false, ..Default::default() };
        let (data, remaining) = reset_with(json!({"option": [0, 1, 2, 3, 99]}), &replaced_last(), &original(), opts);
        assert_eq!(data, json!({"option": [0, 1, 2, 3, 3]}));
        assert!(remaining.is_empty());
    }

    #[test]
    fn does_not_create_missing_array() {
        let (data, remaining) = reset_with(json!({}), &replaced_last(), &original(), Default::default());
        assert_eq!(data, json!({}));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn force_creates_missing_array() {
        let opts = OperationOptions { force: true, ..Default::default() };
        let (data, remaining) = reset_with(json!({}), &replaced_last(), &original(), opts);
        assert_eq!(data, json!({"option": [3]}));
        assert!(remaining.is_empty());
    }
}

// ── diff ──────────────────────────────────────────────────────────────────

#[test]
fn diff_accepts_absent_documents() {
    assert!(diff(None, None).is_empty());
}
