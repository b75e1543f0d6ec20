use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Lead submissions become draft documents in the content lake. Their
/// `status` starts at `new` and is only ever changed by the editorial
/// workflow afterwards.
const INITIAL_STATUS: &str = "new";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

fn require(value: &str, field: &'static str) -> Result<(), LeadError> {
    if value.trim().is_empty() {
        Err(LeadError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Payload of the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), LeadError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.message, "message")?;
        Ok(())
    }

    /// Build the document written to the content lake. `submitted_at` is
    /// assigned by the server, never taken from the client.
    pub fn into_document(self, submitted_at: DateTime<Utc>) -> Value {
        json!({
            "_type": "contactRequest",
            "name": self.name,
            "email": self.email,
            "subject": self.subject.unwrap_or_default(),
            "message": self.message,
            "submittedAt": submitted_at.to_rfc3339(),
            "status": INITIAL_STATUS,
        })
    }
}

/// The consultation form's project-type choices, mirroring the studio's
/// editorial schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Renovation,
    Interior,
    #[default]
    Other,
}

/// Payload of the consultation-request form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub message: String,
}

impl ConsultationSubmission {
    pub fn validate(&self) -> Result<(), LeadError> {
        require(&self.first_name, "firstName")?;
        require(&self.last_name, "lastName")?;
        require(&self.email, "email")?;
        require(&self.message, "message")?;
        Ok(())
    }

    pub fn into_document(self, submitted_at: DateTime<Utc>) -> Value {
        json!({
            "_type": "consultationRequest",
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
            "phone": self.phone.unwrap_or_default(),
            "projectType": self.project_type.unwrap_or_default(),
            "message": self.message,
            "submittedAt": submitted_at.to_rfc3339(),
            "status": INITIAL_STATUS,
        })
    }
}
