use super::*;
use serde_json::json;

#[test]
fn user_deserializes_role_and_keeps_extra_fields() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "name": "Ada",
        "email": "ada@clinic.test",
        "role": "ADMIN",
        "phone": "555-0100"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());
    assert_eq!(user.extra.get("phone"), Some(&json!("555-0100")));

    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back["phone"], "555-0100");
    assert_eq!(back["role"], "ADMIN");
}

#[test]
fn unknown_or_missing_role_is_not_admin() {
    let user: User = serde_json::from_value(json!({ "id": 1, "role": "DOCTOR" })).unwrap();
    assert_eq!(user.role, Role::Other("DOCTOR".to_owned()));
    assert!(!user.is_admin());

    let user: User = serde_json::from_value(json!({ "id": 2 })).unwrap();
    assert_eq!(user.role, Role::default());
    assert!(!user.is_admin());
}

#[test]
fn unknown_role_writes_back_verbatim() {
    let user: User = serde_json::from_value(json!({ "id": 1, "role": "DOCTOR" })).unwrap();
    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back["role"], "DOCTOR");
}

#[test]
fn role_match_is_case_sensitive() {
    let role: Role = serde_json::from_value(json!("admin")).unwrap();
    assert_eq!(role, Role::Other("admin".to_owned()));
}

#[test]
fn patient_role_serializes_uppercase() {
    assert_eq!(serde_json::to_value(Role::Patient).unwrap(), json!("PATIENT"));
}

#[test]
fn doctor_defaults_duration_and_schedules() {
    let doctor: Doctor = serde_json::from_value(json!({
        "id": 3,
        "name": "Dr. Grey",
        "email": "grey@clinic.test",
        "specialty": "Cardiology",
        "bio": null
    }))
    .unwrap();
    assert_eq!(doctor.duration_minutes, 60);
    assert!(doctor.schedules.is_empty());
    assert_eq!(doctor.bio, None);
}

#[test]
fn schedule_day_name_is_sunday_first() {
    let schedule: Schedule = serde_json::from_value(json!({
        "id": 9, "weekday": 1, "start_time": "09:00", "end_time": "12:00"
    }))
    .unwrap();
    assert_eq!(schedule.day_name(), Some("Monday"));
}

#[test]
fn availability_appointment_has_no_doctor_or_patient() {
    let appt: Appointment = serde_json::from_value(json!({
        "id": 11,
        "start_at": "2025-03-04T09:00:00",
        "end_at": "2025-03-04T10:00:00",
        "status": "PENDING"
    }))
    .unwrap();
    assert!(appt.doctor.is_none());
    assert!(appt.patient.is_none());
    assert!(appt.is_pending());
    assert!(!appt.is_cancelled());
}

#[test]
fn new_doctor_omits_missing_bio() {
    let body = serde_json::to_value(NewDoctor {
        name: "Dr. Who".into(),
        email: "who@clinic.test".into(),
        specialty: "General".into(),
        bio: None,
        duration_minutes: 30,
    })
    .unwrap();
    assert!(body.get("bio").is_none());
    assert_eq!(body["duration_minutes"], 30);
}

#[test]
fn token_response_defaults_token_type() {
    let token: TokenResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert_eq!(token.token_type, "bearer");
}
