use super::*;

fn employee(id: i64, name: &str, role: Option<&str>) -> Employee {
    Employee {
        id,
        name: name.to_owned(),
        surname: "Test".to_owned(),
        role: role.map(ToOwned::to_owned),
        role_id: None,
        phone_number: None,
        telegram_id: None,
        login: None,
    }
}

// =============================================================
// role_options
// =============================================================

#[test]
fn role_options_are_sorted_and_distinct() {
    let list = vec![
        employee(1, "a", Some("technician")),
        employee(2, "b", Some("admin")),
        employee(3, "c", Some("technician")),
        employee(4, "d", None),
    ];
    assert_eq!(role_options(&list), vec!["admin", "technician"]);
}

#[test]
fn role_options_of_empty_list_is_empty() {
    assert!(role_options(&[]).is_empty());
}

#[test]
fn role_choices_pair_each_option_value_with_its_label() {
    let list = vec![
        employee(1, "a", Some("technician")),
        employee(2, "b", Some("admin")),
    ];
    let choices = role_choices(&list);
    assert_eq!(choices.len(), 2);
    for (value, label) in choices {
        assert_eq!(value, label);
    }
}

// =============================================================
// filter_by_role
// =============================================================

#[test]
fn empty_filter_keeps_everyone() {
    let list = vec![employee(1, "a", Some("admin")), employee(2, "b", None)];
    assert_eq!(filter_by_role(&list, "").len(), 2);
}

#[test]
fn filter_matches_exact_role() {
    let list = vec![
        employee(1, "a", Some("admin")),
        employee(2, "b", Some("technician")),
        employee(3, "c", None),
    ];
    let filtered = filter_by_role(&list, "admin");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn filter_excludes_employees_without_a_role() {
    let list = vec![employee(1, "a", None)];
    assert!(filter_by_role(&list, "admin").is_empty());
}
