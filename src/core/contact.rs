//! WhatsApp deep links used for lead capture

/// Agency WhatsApp number in international format, digits only
pub const WHATSAPP_NUMBER: &str = "919211841593";

pub const GENERAL_ENQUIRY: &str =
    "Hi SR Digital! I want to generate more real estate leads. Please share details.";

pub const CUSTOM_CREATIVE_ENQUIRY: &str = "Hi SR Digital! I just saw your AI-generated Ad Visuals. I want you to create similar high-quality content for my real estate project.";

pub const STRATEGY_CALL_ENQUIRY: &str =
    "Hi SR Digital! I'd like to book a free strategy call for my real estate project.";

/// `https://wa.me/<number>?text=<message>` link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppLink {
    pub phone: String,
    pub message: String,
}

impl WhatsAppLink {
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Link to the agency number with a prewritten message
    pub fn agency(message: impl Into<String>) -> Self {
        Self::new(WHATSAPP_NUMBER, message)
    }

    pub fn url(&self) -> String {
        let phone: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if self.message.is_empty() {
            format!("https://wa.me/{}", phone)
        } else {
            format!(
                "https://wa.me/{}?text={}",
                phone,
                urlencoding::encode(&self.message)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_message() {
        let link = WhatsAppLink::agency("Hi SR Digital! 3 BHK & parking?");
        assert_eq!(
            link.url(),
            "https://wa.me/919211841593?text=Hi%20SR%20Digital%21%203%20BHK%20%26%20parking%3F"
        );
    }

    #[test]
    fn test_url_strips_phone_formatting() {
        let link = WhatsAppLink::new("+91 92118-41593", "hello");
        assert_eq!(link.url(), "https://wa.me/919211841593?text=hello");
    }

    #[test]
    fn test_url_without_message() {
        let link = WhatsAppLink::agency("");
        assert_eq!(link.url(), "https://wa.me/919211841593");
    }

    #[test]
    fn test_url_encodes_unicode_and_newlines() {
        let link = WhatsAppLink::agency("Budget: ₹2 Cr\nCity: Noida");
        let url = link.url();
        assert!(url.contains("%E2%82%B9"));
        assert!(url.contains("%0A"));
        assert!(!url.contains(' '));
    }
}
