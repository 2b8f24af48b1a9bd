use serde::{Deserialize, Serialize};

/// Registration body sent to the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Registration form as submitted, including the token of the rendered form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub submission_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl RegistrationForm {
    pub fn new(submission_id: String) -> Self {
        Self { submission_id, ..Self::default() }
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
        }
    }
}
