use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::datetime::{ADULT_AGE_YEARS, DateFormatter};

/// Policy knobs for form validation, loadable from host settings.
///
/// Missing keys fall back to the application defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Minimum volunteer age in whole years.
    pub minimum_age: u32,
    /// Minimum length of person and organization names, in characters.
    pub name_min_len: usize,
    /// Maximum length of names and event titles, in characters.
    pub name_max_len: usize,
    /// Whether an event may be scheduled for today.
    pub allow_same_day_events: bool,
    /// Zone used for "today" and for event wire timestamps.
    pub formatter: DateFormatter,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            minimum_age: ADULT_AGE_YEARS,
            name_min_len: 3,
            name_max_len: 100,
            allow_same_day_events: false,
            formatter: DateFormatter::default(),
        }
    }
}

/// Volunteer (individual) sign-up form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRegistration {
    pub name: String,
    pub email: String,
    /// CPF, masked or not.
    pub cpf: String,
    /// Mobile number in `+55` form, masked or not.
    pub phone: String,
    pub birth_date: NaiveDate,
}

/// Organization sign-up form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRegistration {
    pub name: String,
    pub email: String,
    /// CNPJ, masked or not.
    pub cnpj: String,
    /// Postal code of the organization's address.
    pub cep: String,
    pub phone: String,
}

/// An event being created by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Postal code of the venue, for in-person events.
    pub cep: Option<String>,
}

impl EventDraft {
    /// Start as the API expects it, e.g. `2024-05-01T14:30:00-03:00`.
    pub fn starts_at(&self, formatter: &DateFormatter) -> String {
        formatter.combine_date_time_string(&self.date, &self.start_time)
    }

    /// End as the API expects it.
    pub fn ends_at(&self, formatter: &DateFormatter) -> String {
        formatter.combine_date_time_string(&self.date, &self.end_time)
    }
}
