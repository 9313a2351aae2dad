use chrono::NaiveDate;

use crate::contact::{check_email, check_phone};
use crate::core::ValidationError;
use crate::datetime::{is_at_least_years_old_on, is_future_date_on};
use crate::documents::{check_cep, check_cnpj, check_cpf};

use super::types::*;

/// Validate a volunteer sign-up against `rules`, using today's date in
/// the rules' zone. Returns all errors found (not just the first).
pub fn validate_volunteer(form: &VolunteerRegistration, rules: &FormRules) -> Vec<ValidationError> {
    validate_volunteer_on(form, rules, rules.formatter.today())
}

/// [`validate_volunteer`] with an explicit "today".
pub fn validate_volunteer_on(
    form: &VolunteerRegistration,
    rules: &FormRules,
    today: NaiveDate,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_name("name", &form.name, rules, &mut errors);
    validate_email("email", &form.email, &mut errors);

    if let Err(e) = check_cpf(&form.cpf) {
        errors.push(ValidationError::document("cpf", &e));
    }

    validate_phone("phone", &form.phone, &mut errors);

    if is_future_date_on(form.birth_date, today) {
        errors.push(ValidationError::with_code(
            "birth_date",
            "birth date must not be in the future",
            "BIRTH-FUTURE",
        ));
    } else if !is_at_least_years_old_on(form.birth_date, rules.minimum_age, today) {
        errors.push(ValidationError::with_code(
            "birth_date",
            format!("volunteer must be at least {} years old", rules.minimum_age),
            "BIRTH-AGE",
        ));
    }

    tracing::debug!(form = "volunteer", errors = errors.len(), "form validated");
    errors
}

/// Validate an organization sign-up. Returns all errors found.
pub fn validate_organization(
    form: &OrganizationRegistration,
    rules: &FormRules,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_name("name", &form.name, rules, &mut errors);
    validate_email("email", &form.email, &mut errors);

    if let Err(e) = check_cnpj(&form.cnpj) {
        errors.push(ValidationError::document("cnpj", &e));
    }
    if let Err(e) = check_cep(&form.cep) {
        errors.push(ValidationError::document("cep", &e));
    }

    validate_phone("phone", &form.phone, &mut errors);

    tracing::debug!(form = "organization", errors = errors.len(), "form validated");
    errors
}

/// Validate an event draft, using today's date in the rules' zone.
pub fn validate_event(event: &EventDraft, rules: &FormRules) -> Vec<ValidationError> {
    validate_event_on(event, rules, rules.formatter.today())
}

/// [`validate_event`] with an explicit "today".
pub fn validate_event_on(
    event: &EventDraft,
    rules: &FormRules,
    today: NaiveDate,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let title_len = event.title.trim().chars().count();
    if title_len == 0 {
        errors.push(ValidationError::with_code(
            "title",
            "title must not be empty",
            "TITLE-EMPTY",
        ));
    } else if title_len > rules.name_max_len {
        errors.push(ValidationError::with_code(
            "title",
            format!("title must be at most {} characters", rules.name_max_len),
            "TITLE-LENGTH",
        ));
    }

    let same_day_ok = rules.allow_same_day_events && event.date == today;
    if !same_day_ok && !is_future_date_on(event.date, today) {
        let message = if rules.allow_same_day_events {
            "event date must be today or later"
        } else {
            "event date must be in the future"
        };
        errors.push(ValidationError::with_code("date", message, "EVENT-DATE"));
    }

    if event.end_time <= event.start_time {
        errors.push(ValidationError::with_code(
            "end_time",
            "event must end after it starts",
            "EVENT-TIME",
        ));
    }

    if let Some(cep) = &event.cep {
        if let Err(e) = check_cep(cep) {
            errors.push(ValidationError::document("cep", &e));
        }
    }

    tracing::debug!(form = "event", errors = errors.len(), "form validated");
    errors
}

fn validate_name(field: &str, name: &str, rules: &FormRules, errors: &mut Vec<ValidationError>) {
    let len = name.trim().chars().count();
    if len == 0 {
        errors.push(ValidationError::with_code(
            field,
            "name must not be empty",
            "NAME-EMPTY",
        ));
    } else if len < rules.name_min_len || len > rules.name_max_len {
        errors.push(ValidationError::with_code(
            field,
            format!(
                "name must have between {} and {} characters",
                rules.name_min_len, rules.name_max_len
            ),
            "NAME-LENGTH",
        ));
    }
}

fn validate_email(field: &str, email: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = check_email(email) {
        errors.push(ValidationError::contact(field, &e));
    }
}

fn validate_phone(field: &str, phone: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = check_phone(phone) {
        errors.push(ValidationError::contact(field, &e));
    }
}
