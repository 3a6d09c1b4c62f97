//! REST API client for the clinic backend.
//!
//! Every endpoint is a thin parameterization of [`ApiService::request`]:
//! it picks the method and path, `request` attaches the session's bearer
//! token, sends through the transport, and decodes the JSON reply. Login is
//! the exception and talks form-encoded to the token endpoint directly.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ClientError` for page code to display; `request`
//! logs each one before returning it. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, PagePaths};
use crate::error::ClientError;
use crate::net::request::{LOGIN_FAILED, REQUEST_FAILED, RequestDescriptor, interpret_response, prepare, prepare_login};
use crate::net::storage::SessionStore;
use crate::net::transport::HttpTransport;
use crate::net::types::{
    Appointment, Doctor, MessageResponse, NewAppointment, NewDoctor, NewSchedule, RegisterRequest, RegisterResponse,
    ScheduleCreated, TokenResponse, User,
};
use crate::state::session::Session;

fn doctor_endpoint(doctor_id: i64) -> String {
    format!("/doctors/{doctor_id}")
}

fn schedule_create_endpoint(doctor_id: i64) -> String {
    format!("/doctors/{doctor_id}/schedule")
}

fn schedule_endpoint(schedule_id: i64) -> String {
    format!("/doctors/schedules/{schedule_id}")
}

fn doctor_appointments_endpoint(doctor_id: i64) -> String {
    format!("/appointments/doctor/{doctor_id}")
}

fn appointment_endpoint(appointment_id: i64) -> String {
    format!("/appointments/{appointment_id}")
}

/// Page a freshly signed-in user should land on.
pub fn landing_path<'a>(user: &User, pages: &'a PagePaths) -> &'a str {
    if user.is_admin() { &pages.admin_dashboard } else { &pages.doctors }
}

pub struct ApiService<T, S> {
    config: ClientConfig,
    transport: T,
    session: Session<S>,
}

impl<T: HttpTransport, S: SessionStore> ApiService<T, S> {
    pub fn new(config: ClientConfig, transport: T, store: S) -> Self {
        let session = Session::new(store, &config);
        Self { config, transport, session }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue `descriptor` and decode the JSON body into `R`.
    ///
    /// # Errors
    ///
    /// Returns `Network`, `Decode`, or `Http` (carrying the server `detail`);
    /// the error is logged before it is returned.
    pub async fn request<R: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<R, ClientError> {
        let result = self.send_and_decode(&descriptor).await;
        if let Err(e) = &result {
            leptos::logging::error!("API Error: {} {}: {e}", descriptor.method.as_str(), descriptor.endpoint);
        }
        result
    }

    async fn send_and_decode<R: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<R, ClientError> {
        let token = self.session.token();
        let prepared = prepare(&self.config, descriptor, token.as_deref());
        let response = self.transport.send(&prepared).await?;
        let body = interpret_response(&response, REQUEST_FAILED)?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/register` (unauthenticated).
    ///
    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn register(&self, user: &RegisterRequest) -> Result<RegisterResponse, ClientError> {
        self.request(RequestDescriptor::post("/auth/register", user)?.without_auth())
            .await
    }

    /// Exchange credentials for a token via form-encoded `POST /auth/login`.
    ///
    /// Does not touch the stored session; see [`ApiService::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns the server detail (for example "Invalid credentials") or
    /// "Login failed".
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let prepared = prepare_login(&self.config, email, password);
        let response = self.transport.send(&prepared).await?;
        let body = interpret_response(&response, LOGIN_FAILED)?;
        Ok(serde_json::from_value(body)?)
    }

    /// Log in, persist the token, fetch and persist the profile.
    ///
    /// # Errors
    ///
    /// Any login, profile, or storage failure. A token saved before a failed
    /// profile fetch or profile write is cleared again.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let token = self.login(email, password).await?;
        self.session.save_token(&token.access_token)?;
        let user = match self.get_me().await {
            Ok(user) => user,
            Err(e) => {
                self.session.clear();
                return Err(e);
            }
        };
        if let Err(e) = self.session.save_user(&user) {
            self.session.clear();
            return Err(e);
        }
        Ok(user)
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_me(&self) -> Result<User, ClientError> {
        self.request(RequestDescriptor::get("/auth/me")).await
    }

    // =========================================================================
    // DOCTORS
    // =========================================================================

    /// Public doctor listing, without schedules.
    ///
    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        self.request(RequestDescriptor::get("/doctors/")).await
    }

    /// One doctor with schedules.
    ///
    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, ClientError> {
        self.request(RequestDescriptor::get(doctor_endpoint(doctor_id))).await
    }

    /// Admin listing with schedules.
    ///
    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_all_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        self.request(RequestDescriptor::get("/doctors/all")).await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, ClientError> {
        self.request(RequestDescriptor::post("/doctors/", doctor)?).await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn delete_doctor(&self, doctor_id: i64) -> Result<MessageResponse, ClientError> {
        self.request(RequestDescriptor::delete(doctor_endpoint(doctor_id))).await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn add_schedule(&self, doctor_id: i64, schedule: &NewSchedule) -> Result<ScheduleCreated, ClientError> {
        self.request(RequestDescriptor::post(schedule_create_endpoint(doctor_id), schedule)?)
            .await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn delete_schedule(&self, schedule_id: i64) -> Result<MessageResponse, ClientError> {
        self.request(RequestDescriptor::delete(schedule_endpoint(schedule_id))).await
    }

    // =========================================================================
    // APPOINTMENTS
    // =========================================================================

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn book_appointment(&self, appointment: &NewAppointment) -> Result<Appointment, ClientError> {
        self.request(RequestDescriptor::post("/appointments/", appointment)?).await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_my_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.request(RequestDescriptor::get("/appointments/me")).await
    }

    /// Booked (non-cancelled) slots for one doctor.
    ///
    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_doctor_appointments(&self, doctor_id: i64) -> Result<Vec<Appointment>, ClientError> {
        self.request(RequestDescriptor::get(doctor_appointments_endpoint(doctor_id)))
            .await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.request(RequestDescriptor::get("/appointments/all")).await
    }

    /// # Errors
    ///
    /// See [`ApiService::request`].
    pub async fn cancel_appointment(&self, appointment_id: i64) -> Result<MessageResponse, ClientError> {
        self.request(RequestDescriptor::delete(appointment_endpoint(appointment_id)))
            .await
    }
}

#[cfg(feature = "hydrate")]
impl ApiService<crate::net::transport::GlooTransport, crate::net::storage::LocalStorageStore> {
    /// Browser client: `fetch` transport, `localStorage` session, build-time config.
    pub fn browser() -> Self {
        Self::new(
            ClientConfig::from_build_env(),
            crate::net::transport::GlooTransport,
            crate::net::storage::LocalStorageStore,
        )
    }
}
