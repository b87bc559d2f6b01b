use crate::models::participant::RegistrationRequest;

/// Controlled-input state for the registration form.
///
/// Setters mirror keystroke handling: the contact and usn setters reject
/// non-conforming values outright, leaving the field unchanged, so the
/// stored value is valid after every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
    pub usn: String,
    pub college: String,
    pub events_registered: Vec<String>,
}

impl RegistrationForm {
    pub fn input_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    pub fn input_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    /// Accept only 0-10 decimal digits; anything else is discarded.
    pub fn input_contact(&mut self, value: &str) {
        if value.len() <= 10 && value.chars().all(|c| c.is_ascii_digit()) {
            self.contact = value.to_string();
        }
    }

    pub fn input_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    /// Accept only values of at most 10 characters.
    pub fn input_usn(&mut self, value: &str) {
        if value.chars().count() <= 10 {
            self.usn = value.to_string();
        }
    }

    pub fn input_college(&mut self, value: &str) {
        self.college = value.to_string();
    }

    /// Replace the selected event set. Not additive.
    pub fn select_events(&mut self, selected: Vec<String>) {
        self.events_registered = selected;
    }

    pub fn reset(&mut self) {
        *self = RegistrationForm::default();
    }

    /// The checks native form constraints would enforce before submit.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        } else if !self.email.contains('@') || !self.email.contains('.') {
            errors.push("Email must be a valid address".to_string());
        }
        if self.contact.len() != 10 {
            errors.push("Contact must be exactly 10 digits".to_string());
        }
        if self.password.is_empty() {
            errors.push("Password is required".to_string());
        }
        if self.usn.trim().is_empty() {
            errors.push("USN is required".to_string());
        }
        if self.college.trim().is_empty() {
            errors.push("College is required".to_string());
        }
        if self.events_registered.is_empty() {
            errors.push("Select at least one event".to_string());
        }
        errors
    }

    pub fn payload(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
            password: self.password.clone(),
            usn: self.usn.clone(),
            college: self.college.clone(),
            events_registered: self.events_registered.clone(),
        }
    }
}
