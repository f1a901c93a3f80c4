//! Lead form model
//!
//! The form never stores anything server-side: a valid submission becomes a
//! prefilled WhatsApp message to the agency.

use super::contact::WhatsAppLink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    Plots,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Plots,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Plots => "plots",
        }
    }

    /// Parse `as_str` output; anything unknown falls back to the default
    pub fn parse(s: &str) -> Self {
        match s {
            "commercial" => ProjectType::Commercial,
            "plots" => ProjectType::Plots,
            _ => ProjectType::Residential,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Plots => "Plots / Land",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter a valid 10-digit mobile number")]
    InvalidPhone,
}

/// Details captured by the lead form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDetails {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub budget: String,
    pub project_type: ProjectType,
}

impl LeadDetails {
    /// Ten-digit Indian mobile number with spaces, dashes and `+91`/`0` prefixes removed
    pub fn normalized_phone(&self) -> Option<String> {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        let local = match digits.len() {
            10 => digits.as_str(),
            11 if digits.starts_with('0') => &digits[1..],
            12 if digits.starts_with("91") => &digits[2..],
            _ => return None,
        };
        local
            .starts_with(['6', '7', '8', '9'])
            .then(|| local.to_string())
    }

    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingName);
        }
        if self.normalized_phone().is_none() {
            return Err(LeadError::InvalidPhone);
        }
        Ok(())
    }

    /// Message sent to the agency on WhatsApp
    pub fn whatsapp_message(&self) -> String {
        let mut lines = vec![
            "Hi SR Digital! I want more leads for my project.".to_string(),
            format!("Name: {}", self.name.trim()),
            format!(
                "Phone: {}",
                self.normalized_phone()
                    .unwrap_or_else(|| self.phone.trim().to_string())
            ),
            format!("Project: {}", self.project_type.display_name()),
        ];
        if !self.city.trim().is_empty() {
            lines.push(format!("City: {}", self.city.trim()));
        }
        if !self.budget.trim().is_empty() {
            lines.push(format!("Monthly budget: {}", self.budget.trim()));
        }
        lines.join("\n")
    }

    /// Validate and build the WhatsApp link for this lead
    pub fn to_whatsapp_link(&self) -> Result<WhatsAppLink, LeadError> {
        self.validate()?;
        Ok(WhatsAppLink::agency(self.whatsapp_message()))
    }
}
