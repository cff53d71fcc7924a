use super::*;
use serde_json::json;

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_parses_full_payload() {
    let body: ErrorBody = serde_json::from_value(json!({
        "message": "Please fix the form.",
        "details": "validation failed",
        "errors": { "login": "Login is taken." },
        "error_code": "INVALID_TOKEN"
    }))
    .unwrap();

    assert_eq!(body.message.as_deref(), Some("Please fix the form."));
    assert_eq!(body.details.as_deref(), Some("validation failed"));
    assert_eq!(
        body.errors.as_ref().and_then(|e| e.get("login")).map(String::as_str),
        Some("Login is taken.")
    );
    assert_eq!(body.error_code.as_deref(), Some("INVALID_TOKEN"));
}

#[test]
fn error_body_tolerates_empty_payload() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body, ErrorBody::default());
    assert_eq!(body.display_message(), "The server reported an error.");
}

#[test]
fn display_message_prefers_message_then_details() {
    let body = ErrorBody {
        message: Some("primary".to_owned()),
        details: Some("secondary".to_owned()),
        ..ErrorBody::default()
    };
    assert_eq!(body.display_message(), "primary");

    let body = ErrorBody {
        details: Some("secondary".to_owned()),
        ..ErrorBody::default()
    };
    assert_eq!(body.display_message(), "secondary");
}

// =============================================================
// Session DTOs
// =============================================================

#[test]
fn current_user_parses_identity_fields() {
    let user: CurrentUser = serde_json::from_value(json!({ "user_id": 1, "role_id": 2 })).unwrap();
    assert_eq!(user, CurrentUser { user_id: 1, role_id: 2 });
}

#[test]
fn credentials_serialize_with_passwd_field() {
    let creds = Credentials {
        login: "alice".to_owned(),
        passwd: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({ "login": "alice", "passwd": "secret1" })
    );
}

// =============================================================
// CRUD DTOs
// =============================================================

#[test]
fn employee_list_rows_omit_detail_fields() {
    let employee: Employee =
        serde_json::from_value(json!({ "id": 3, "name": "Ivan", "surname": "Petrov" })).unwrap();
    assert_eq!(employee.id, 3);
    assert_eq!(employee.role, None);
    assert_eq!(employee.phone_number, None);
}

#[test]
fn department_parses_optional_responsible_employee() {
    let bare: Department =
        serde_json::from_value(json!({ "id": 1, "name": "Maintenance", "floor": 2 })).unwrap();
    assert!(bare.responsible_employee.is_none());

    let full: Department = serde_json::from_value(json!({
        "id": 1,
        "name": "Maintenance",
        "floor": 2,
        "responsible_employee": { "id": 7, "name": "Anna", "surname": "Ivanova" }
    }))
    .unwrap();
    assert_eq!(
        full.responsible_employee,
        Some(ResponsibleEmployee {
            id: 7,
            name: "Anna".to_owned(),
            surname: "Ivanova".to_owned()
        })
    );
}
