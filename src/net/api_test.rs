use super::*;
use crate::error::ErrorKind;
use crate::net::request::{AUTHORIZATION, CONTENT_TYPE, FORM_CONTENT_TYPE, Method, PreparedRequest, RawResponse};
use crate::net::storage::MemoryStore;
use crate::net::types::Role;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned responses in order and records every request it was sent.
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, ClientError>>>,
    sent: RefCell<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    fn fail(self, err: ClientError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.borrow().clone()
    }

    fn last(&self) -> PreparedRequest {
        self.sent.borrow().last().cloned().expect("no request sent")
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, ClientError> {
        self.sent.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted reply".to_owned())))
    }
}

fn api(transport: ScriptedTransport) -> ApiService<ScriptedTransport, MemoryStore> {
    ApiService::new(ClientConfig::default(), transport, MemoryStore::new())
}

fn doctor_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Dr. Grey",
        "email": "grey@clinic.test",
        "specialty": "Cardiology",
        "bio": null,
        "duration_minutes": 30
    })
}

fn me_json(role: &str) -> serde_json::Value {
    json!({ "id": 1, "name": "Alice", "email": "alice@clinic.test", "role": role })
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn endpoint_templates_format_ids() {
    assert_eq!(doctor_endpoint(7), "/doctors/7");
    assert_eq!(schedule_create_endpoint(7), "/doctors/7/schedule");
    assert_eq!(schedule_endpoint(12), "/doctors/schedules/12");
    assert_eq!(doctor_appointments_endpoint(7), "/appointments/doctor/7");
    assert_eq!(appointment_endpoint(3), "/appointments/3");
}

#[test]
fn landing_path_depends_on_role() {
    let pages = PagePaths::default();
    let mut user: User = serde_json::from_value(me_json("ADMIN")).unwrap();
    assert_eq!(landing_path(&user, &pages), "/admin/dashboard.html");
    user.role = Role::Patient;
    assert_eq!(landing_path(&user, &pages), "/doctors.html");
}

// =============================================================
// request()
// =============================================================

#[test]
fn stored_token_is_sent_as_bearer() {
    let api = api(ScriptedTransport::default().reply(200, json!([])));
    api.session().save_token("tok-1").unwrap();

    let doctors = block_on(api.get_doctors()).unwrap();
    assert!(doctors.is_empty());

    let sent = api.transport().last();
    assert_eq!(sent.url, "http://localhost:8000/doctors/");
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.header(AUTHORIZATION), Some("Bearer tok-1"));
}

#[test]
fn missing_token_sends_no_authorization_and_no_local_error() {
    let api = api(ScriptedTransport::default().reply(200, json!([])));
    block_on(api.get_my_appointments()).unwrap();
    assert_eq!(api.transport().last().header(AUTHORIZATION), None);
}

#[test]
fn not_found_detail_is_the_error_message() {
    let api = api(ScriptedTransport::default().reply(404, json!({ "detail": "Not found" })));
    let err = block_on(api.get_doctor(99)).unwrap_err();
    assert_eq!(err.to_string(), "Not found");
    assert_eq!(err.kind(), ErrorKind::Http);
}

#[test]
fn failure_without_detail_reports_request_failed() {
    let api = api(ScriptedTransport::default().reply(500, json!({})));
    let err = block_on(api.get_all_appointments()).unwrap_err();
    assert_eq!(err.message(), "Request failed");
}

#[test]
fn network_failure_propagates() {
    let api = api(ScriptedTransport::default().fail(ClientError::Network("Failed to fetch".to_owned())));
    let err = block_on(api.get_doctors()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.message(), "Failed to fetch");
}

#[test]
fn html_body_is_decode_error() {
    let api = api(ScriptedTransport::default().reply_raw(200, "<!doctype html>"));
    let err = block_on(api.get_doctors()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn wrong_shape_is_decode_error() {
    let api = api(ScriptedTransport::default().reply(200, json!({ "unexpected": true })));
    let err = block_on(api.get_doctors()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

// =============================================================
// Auth endpoints
// =============================================================

#[test]
fn register_never_sends_token() {
    let api = api(ScriptedTransport::default().reply(
        200,
        json!({ "message": "User registered successfully", "user": me_json("PATIENT") }),
    ));
    api.session().save_token("stale").unwrap();

    let req = RegisterRequest {
        name: "Alice".to_owned(),
        email: "alice@clinic.test".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Patient,
    };
    let resp = block_on(api.register(&req)).unwrap();
    assert_eq!(resp.user.role, Role::Patient);

    let sent = api.transport().last();
    assert_eq!(sent.url, "http://localhost:8000/auth/register");
    assert_eq!(sent.header(AUTHORIZATION), None);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["role"], "PATIENT");
    assert_eq!(body["email"], "alice@clinic.test");
}

#[test]
fn login_posts_form_credentials() {
    let api = api(ScriptedTransport::default().reply(200, json!({ "access_token": "jwt", "token_type": "bearer" })));
    api.session().save_token("stale").unwrap();

    let token = block_on(api.login("alice@clinic.test", "secret1")).unwrap();
    assert_eq!(token.access_token, "jwt");

    let sent = api.transport().last();
    assert_eq!(sent.url, "http://localhost:8000/auth/login");
    assert_eq!(sent.header(CONTENT_TYPE), Some(FORM_CONTENT_TYPE));
    assert_eq!(sent.header(AUTHORIZATION), None);
    assert_eq!(sent.body.as_deref(), Some("username=alice%40clinic.test&password=secret1"));
    assert_eq!(api.session().token().as_deref(), Some("stale"));
}

#[test]
fn login_rejection_uses_server_detail_or_login_failed() {
    let api = api(
        ScriptedTransport::default()
            .reply(401, json!({ "detail": "Invalid credentials" }))
            .reply(500, json!({})),
    );
    let err = block_on(api.login("a@b.com", "wrong")).unwrap_err();
    assert_eq!(err.message(), "Invalid credentials");
    let err = block_on(api.login("a@b.com", "wrong")).unwrap_err();
    assert_eq!(err.message(), "Login failed");
}

#[test]
fn sign_in_persists_token_then_profile() {
    let api = api(
        ScriptedTransport::default()
            .reply(200, json!({ "access_token": "jwt", "token_type": "bearer" }))
            .reply(200, me_json("ADMIN")),
    );

    let user = block_on(api.sign_in("alice@clinic.test", "secret1")).unwrap();
    assert!(user.is_admin());
    assert_eq!(api.session().token().as_deref(), Some("jwt"));
    assert_eq!(api.session().user(), Some(user));
    assert!(api.session().is_admin());

    let sent = api.transport().sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].url, "http://localhost:8000/auth/me");
    assert_eq!(sent[1].header(AUTHORIZATION), Some("Bearer jwt"));
}

#[test]
fn sign_in_clears_token_when_profile_fetch_fails() {
    let api = api(
        ScriptedTransport::default()
            .reply(200, json!({ "access_token": "jwt" }))
            .reply(401, json!({ "detail": "Could not validate credentials" })),
    );
    let err = block_on(api.sign_in("alice@clinic.test", "secret1")).unwrap_err();
    assert_eq!(err.message(), "Could not validate credentials");
    assert!(!api.session().is_authenticated());
    assert!(api.session().store().is_empty());
}

/// Memory store that refuses to persist the profile entry.
#[derive(Clone, Default)]
struct ProfileRejectingStore(MemoryStore);

impl SessionStore for ProfileRejectingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        if key == ClientConfig::default().user_key {
            return Err(ClientError::Storage("QuotaExceededError".to_owned()));
        }
        self.0.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

#[test]
fn sign_in_clears_token_when_profile_cannot_be_stored() {
    let transport = ScriptedTransport::default()
        .reply(200, json!({ "access_token": "jwt" }))
        .reply(200, me_json("PATIENT"));
    let api = ApiService::new(ClientConfig::default(), transport, ProfileRejectingStore::default());

    let err = block_on(api.sign_in("alice@clinic.test", "secret1")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(!api.session().is_authenticated());
    assert!(api.session().store().0.is_empty());
}

// =============================================================
// Doctor + schedule endpoints
// =============================================================

#[test]
fn create_doctor_posts_json_with_token() {
    let api = api(ScriptedTransport::default().reply(200, doctor_json(5)));
    api.session().save_token("admin-tok").unwrap();

    let doctor = block_on(api.create_doctor(&NewDoctor {
        name: "Dr. Grey".to_owned(),
        email: "grey@clinic.test".to_owned(),
        specialty: "Cardiology".to_owned(),
        bio: None,
        duration_minutes: 30,
    }))
    .unwrap();
    assert_eq!(doctor.id, 5);
    assert_eq!(doctor.duration_minutes, 30);

    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://localhost:8000/doctors/");
    assert_eq!(sent.header(AUTHORIZATION), Some("Bearer admin-tok"));
}

#[test]
fn doctor_detail_includes_schedules() {
    let mut body = doctor_json(5);
    body["schedules"] = json!([{ "id": 1, "weekday": 2, "start_time": "09:00", "end_time": "12:00" }]);
    let api = api(ScriptedTransport::default().reply(200, body));

    let doctor = block_on(api.get_doctor(5)).unwrap();
    assert_eq!(doctor.schedules.len(), 1);
    assert_eq!(doctor.schedules[0].day_name(), Some("Tuesday"));
    assert_eq!(api.transport().last().url, "http://localhost:8000/doctors/5");
}

#[test]
fn admin_doctor_listing_hits_all_endpoint() {
    let api = api(ScriptedTransport::default().reply(200, json!([doctor_json(1), doctor_json(2)])));
    let doctors = block_on(api.get_all_doctors()).unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(api.transport().last().url, "http://localhost:8000/doctors/all");
}

#[test]
fn delete_doctor_uses_delete_method() {
    let api = api(ScriptedTransport::default().reply(200, json!({ "message": "Doctor deleted successfully" })));
    let resp = block_on(api.delete_doctor(5)).unwrap();
    assert_eq!(resp.message, "Doctor deleted successfully");
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://localhost:8000/doctors/5");
    assert_eq!(sent.body, None);
}

#[test]
fn add_schedule_posts_weekday_window() {
    let api = api(ScriptedTransport::default().reply(
        200,
        json!({
            "id": 8, "doctor_id": 5, "weekday": 1,
            "start_time": "09:00", "end_time": "13:00",
            "message": "Schedule added successfully"
        }),
    ));
    let created = block_on(api.add_schedule(
        5,
        &NewSchedule { weekday: 1, start_time: "09:00".to_owned(), end_time: "13:00".to_owned() },
    ))
    .unwrap();
    assert_eq!(created.id, 8);

    let sent = api.transport().last();
    assert_eq!(sent.url, "http://localhost:8000/doctors/5/schedule");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "weekday": 1, "start_time": "09:00", "end_time": "13:00" }));
}

#[test]
fn duplicate_schedule_surfaces_detail() {
    let api = api(ScriptedTransport::default().reply(
        400,
        json!({ "detail": "Schedule already exists for this day. Delete the existing one first." }),
    ));
    let err = block_on(api.add_schedule(
        5,
        &NewSchedule { weekday: 1, start_time: "09:00".to_owned(), end_time: "13:00".to_owned() },
    ))
    .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(err.message().starts_with("Schedule already exists"));
}

#[test]
fn delete_schedule_path() {
    let api = api(ScriptedTransport::default().reply(200, json!({ "message": "Schedule deleted successfully" })));
    block_on(api.delete_schedule(8)).unwrap();
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://localhost:8000/doctors/schedules/8");
}

// =============================================================
// Appointment endpoints
// =============================================================

#[test]
fn book_appointment_returns_created_record() {
    let api = api(ScriptedTransport::default().reply(
        200,
        json!({
            "id": 21,
            "start_at": "2025-03-04T09:00:00",
            "end_at": "2025-03-04T09:30:00",
            "status": "PENDING",
            "doctor": { "id": 5, "name": "Dr. Grey", "specialty": "Cardiology" },
            "patient": { "id": 1, "name": "Alice" }
        }),
    ));
    api.session().save_token("tok").unwrap();

    let appt = block_on(api.book_appointment(&NewAppointment {
        doctor_id: 5,
        date: "2025-03-04".to_owned(),
        time: "09:00".to_owned(),
    }))
    .unwrap();
    assert!(appt.is_pending());
    assert_eq!(appt.doctor.unwrap().name, "Dr. Grey");

    let sent = api.transport().last();
    assert_eq!(sent.url, "http://localhost:8000/appointments/");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "doctor_id": 5, "date": "2025-03-04", "time": "09:00" }));
}

#[test]
fn doctor_availability_listing() {
    let api = api(ScriptedTransport::default().reply(
        200,
        json!([{ "id": 2, "start_at": "2025-03-04T10:00:00", "end_at": "2025-03-04T10:30:00", "status": "PENDING" }]),
    ));
    let booked = block_on(api.get_doctor_appointments(5)).unwrap();
    assert_eq!(booked.len(), 1);
    assert!(booked[0].doctor.is_none());
    assert_eq!(api.transport().last().url, "http://localhost:8000/appointments/doctor/5");
}

#[test]
fn cancel_appointment_forbidden_reports_detail() {
    let api = api(ScriptedTransport::default().reply(403, json!({ "detail": "Not authorized" })));
    let err = block_on(api.cancel_appointment(21)).unwrap_err();
    assert_eq!(err.message(), "Not authorized");
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://localhost:8000/appointments/21");
}

#[test]
fn appointment_listings_hit_expected_paths() {
    let api = api(ScriptedTransport::default().reply(200, json!([])).reply(200, json!([])));
    block_on(api.get_my_appointments()).unwrap();
    block_on(api.get_all_appointments()).unwrap();
    let urls: Vec<String> = api.transport().sent().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec!["http://localhost:8000/appointments/me", "http://localhost:8000/appointments/all"]
    );
}

#[test]
fn server_side_transport_reports_network_error() {
    let api = ApiService::new(ClientConfig::default(), crate::net::transport::UnavailableTransport, MemoryStore::new());
    let err = block_on(api.get_me()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.message(), "not available on server");
}
