use chrono::{NaiveDate, NaiveTime};

use crate::core::{Error, ValidationError};

use super::types::*;
use super::validation;

/// Builder for volunteer sign-ups.
///
/// [`build`](Self::build) runs [`validate_volunteer`](super::validate_volunteer)
/// and fails with every error joined into one message.
///
/// ```
/// use chrono::NaiveDate;
/// use cadastro::forms::VolunteerBuilder;
///
/// let form = VolunteerBuilder::new("Maria Souza", "maria@exemplo.com.br")
///     .cpf("529.982.247-25")
///     .phone("+55 (42) 99999-9999")
///     .birth_date(NaiveDate::from_ymd_opt(1995, 8, 20).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(form.cpf, "529.982.247-25");
/// ```
#[derive(Debug, Clone)]
pub struct VolunteerBuilder {
    name: String,
    email: String,
    cpf: Option<String>,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    rules: FormRules,
    today: Option<NaiveDate>,
}

impl VolunteerBuilder {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cpf: None,
            phone: None,
            birth_date: None,
            rules: FormRules::default(),
            today: None,
        }
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    /// Pin "today" instead of reading the clock.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<VolunteerRegistration, Error> {
        let today = self.today.unwrap_or_else(|| self.rules.formatter.today());
        let rules = self.rules.clone();
        let form = self.build_unchecked()?;
        check(validation::validate_volunteer_on(&form, &rules, today))?;
        Ok(form)
    }

    /// Build without running validation; only required fields are checked.
    pub fn build_unchecked(self) -> Result<VolunteerRegistration, Error> {
        let cpf = self
            .cpf
            .ok_or_else(|| Error::Builder("cpf is required".into()))?;
        let phone = self
            .phone
            .ok_or_else(|| Error::Builder("phone is required".into()))?;
        let birth_date = self
            .birth_date
            .ok_or_else(|| Error::Builder("birth date is required".into()))?;

        Ok(VolunteerRegistration {
            name: self.name,
            email: self.email,
            cpf,
            phone,
            birth_date,
        })
    }
}

/// Builder for organization sign-ups.
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    name: String,
    email: String,
    cnpj: Option<String>,
    cep: Option<String>,
    phone: Option<String>,
    rules: FormRules,
}

impl OrganizationBuilder {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cnpj: None,
            cep: None,
            phone: None,
            rules: FormRules::default(),
        }
    }

    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cnpj = Some(cnpj.into());
        self
    }

    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = Some(cep.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Result<OrganizationRegistration, Error> {
        let rules = self.rules.clone();
        let form = self.build_unchecked()?;
        check(validation::validate_organization(&form, &rules))?;
        Ok(form)
    }

    pub fn build_unchecked(self) -> Result<OrganizationRegistration, Error> {
        let cnpj = self
            .cnpj
            .ok_or_else(|| Error::Builder("cnpj is required".into()))?;
        let cep = self
            .cep
            .ok_or_else(|| Error::Builder("cep is required".into()))?;
        let phone = self
            .phone
            .ok_or_else(|| Error::Builder("phone is required".into()))?;

        Ok(OrganizationRegistration {
            name: self.name,
            email: self.email,
            cnpj,
            cep,
            phone,
        })
    }
}

/// Builder for event drafts.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    title: String,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    cep: Option<String>,
    rules: FormRules,
    today: Option<NaiveDate>,
}

impl EventBuilder {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            start_time: None,
            end_time: None,
            cep: None,
            rules: FormRules::default(),
            today: None,
        }
    }

    pub fn starts(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self
    }

    pub fn ends(mut self, time: NaiveTime) -> Self {
        self.end_time = Some(time);
        self
    }

    /// Venue postal code for in-person events.
    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = Some(cep.into());
        self
    }

    pub fn rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn build(self) -> Result<EventDraft, Error> {
        let today = self.today.unwrap_or_else(|| self.rules.formatter.today());
        let rules = self.rules.clone();
        let event = self.build_unchecked()?;
        check(validation::validate_event_on(&event, &rules, today))?;
        Ok(event)
    }

    pub fn build_unchecked(self) -> Result<EventDraft, Error> {
        let start_time = self
            .start_time
            .ok_or_else(|| Error::Builder("start time is required".into()))?;
        let end_time = self
            .end_time
            .ok_or_else(|| Error::Builder("end time is required".into()))?;

        Ok(EventDraft {
            title: self.title,
            date: self.date,
            start_time,
            end_time,
            cep: self.cep,
        })
    }
}

fn check(errors: Vec<ValidationError>) -> Result<(), Error> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(Error::Validation(msg))
}
