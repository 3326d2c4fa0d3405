//! HTTP client for the remote attendance service.
//!
//! The backend is an external collaborator: the client only knows the
//! typed operations below and cannot tell a transport failure from an
//! application-level rejection. Callers that care (the submitter) treat
//! every error the same way.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Caller, Employee, Principal, UserProfile, UserRole};
use crate::models::record::AttendanceRecord;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde_json::json;
use std::time::Duration;

/// Seam between the attendance logic and the remote service.
/// Tests drive the submit/replay machinery through a recording fake.
pub trait Backend {
    fn check_in(&self, latitude: f64, longitude: f64) -> AppResult<()>;
    fn check_out(&self) -> AppResult<()>;
    fn monthly_report(
        &self,
        employee: &Principal,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<AttendanceRecord>>;
    fn all_employees(&self) -> AppResult<Vec<Employee>>;
    fn caller_profile(&self) -> AppResult<Option<UserProfile>>;
    fn save_caller_profile(&self, profile: &UserProfile) -> AppResult<()>;
    fn register_employee(&self, name: &str, email: &str) -> AppResult<()>;
    fn assign_role(&self, user: &Principal, role: UserRole) -> AppResult<()>;
    fn whoami(&self) -> AppResult<Caller>;

    /// Connectivity probe. `false` means the service is unreachable,
    /// not that it returned an error payload.
    fn ping(&self) -> bool;
}

/// Timeout for the health probe; deliberately shorter than the regular
/// request timeout so the sync watch loop stays responsive while offline.
const PING_TIMEOUT: Duration = Duration::from_secs(2);

pub struct HttpBackend {
    base: String,
    token: Option<String>,
    client: Client,
}

impl HttpBackend {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;

        Ok(Self {
            base: cfg.backend_url.trim_end_matches('/').to_string(),
            token: cfg.auth_token.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Map non-2xx responses to AppError::Backend carrying status + body.
    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .text()
            .unwrap_or_default()
            .trim()
            .chars()
            .take(200)
            .collect::<String>();
        Err(AppError::Backend {
            status: status.as_u16(),
            message: if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                message
            },
        })
    }

    fn post_empty(&self, path: &str, body: serde_json::Value) -> AppResult<()> {
        let resp = self
            .authorize(self.client.post(self.url(path)))
            .json(&body)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }
}

impl Backend for HttpBackend {
    fn check_in(&self, latitude: f64, longitude: f64) -> AppResult<()> {
        self.post_empty(
            "/api/attendance/check-in",
            json!({ "latitude": latitude, "longitude": longitude }),
        )
    }

    fn check_out(&self) -> AppResult<()> {
        let resp = self
            .authorize(self.client.post(self.url("/api/attendance/check-out")))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn monthly_report(
        &self,
        employee: &Principal,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let url = format!(
            "{}?year={}&month={}",
            self.url(&format!("/api/attendance/report/{}", employee)),
            year,
            month
        );
        let resp = self.authorize(self.client.get(url)).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn all_employees(&self) -> AppResult<Vec<Employee>> {
        let resp = self
            .authorize(self.client.get(self.url("/api/employees")))
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn caller_profile(&self) -> AppResult<Option<UserProfile>> {
        let resp = self
            .authorize(self.client.get(self.url("/api/profile")))
            .send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(resp)?.json()?))
    }

    fn save_caller_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let resp = self
            .authorize(self.client.put(self.url("/api/profile")))
            .json(profile)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn register_employee(&self, name: &str, email: &str) -> AppResult<()> {
        self.post_empty(
            "/api/employees/register",
            json!({ "name": name, "email": email }),
        )
    }

    fn assign_role(&self, user: &Principal, role: UserRole) -> AppResult<()> {
        self.post_empty(
            "/api/roles/assign",
            json!({ "user": user, "role": role.as_str() }),
        )
    }

    fn whoami(&self) -> AppResult<Caller> {
        let resp = self
            .authorize(self.client.get(self.url("/api/whoami")))
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn ping(&self) -> bool {
        self.client
            .get(self.url("/api/health"))
            .timeout(PING_TIMEOUT)
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}
