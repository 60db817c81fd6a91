use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Offerings a visitor can pick on the contact form. The first variant is
/// the form default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    #[default]
    #[serde(rename = "AI Chat Assistant")]
    AiChatAssistant,
    #[serde(rename = "AI Voice Agent")]
    AiVoiceAgent,
    #[serde(rename = "Strategic Consultancy")]
    StrategicConsultancy,
    #[serde(rename = "Workflow Automation")]
    WorkflowAutomation,
    #[serde(rename = "AI Website Development")]
    AiWebsiteDevelopment,
    #[serde(rename = "Other")]
    Other,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::AiChatAssistant,
        Service::AiVoiceAgent,
        Service::StrategicConsultancy,
        Service::WorkflowAutomation,
        Service::AiWebsiteDevelopment,
        Service::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::AiChatAssistant => "AI Chat Assistant",
            Service::AiVoiceAgent => "AI Voice Agent",
            Service::StrategicConsultancy => "Strategic Consultancy",
            Service::WorkflowAutomation => "Workflow Automation",
            Service::AiWebsiteDevelopment => "AI Website Development",
            Service::Other => "Other",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or_else(|| format!("Unknown service: {s}"))
    }
}

/// The contact form's field set. Serialized with the camel-case names the
/// form and the webhook use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub company_name: String,
    pub problems: String,
    pub additional_info: String,
}

/// Addressable form fields, named as they are posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    CompanyName,
    Problems,
    AdditionalInfo,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "service" => Ok(Field::Service),
            "companyName" => Ok(Field::CompanyName),
            "problems" => Ok(Field::Problems),
            "additionalInfo" => Ok(Field::AdditionalInfo),
            other => Err(format!("Unknown field: {other}")),
        }
    }
}

impl SubmissionRecord {
    /// Overwrite a single field. An unknown service label leaves the record
    /// untouched.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), String> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Service => self.service = value.parse()?,
            Field::CompanyName => self.company_name = value.to_string(),
            Field::Problems => self.problems = value.to_string(),
            Field::AdditionalInfo => self.additional_info = value.to_string(),
        }
        Ok(())
    }

    /// The stored form of `additional_info`: blank becomes SQL NULL.
    pub fn additional_info_column(&self) -> Option<&str> {
        if self.additional_info.is_empty() {
            None
        } else {
            Some(&self.additional_info)
        }
    }
}

/// A row of `contact_submissions`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub company_name: String,
    pub problems: String,
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
}
