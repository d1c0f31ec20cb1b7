use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";
pub const DEFAULT_PHONE: &str = "56982422956";
pub const DEFAULT_MESSAGE: &str = "Hola, estoy interesado en agendar una reunión con ustedes.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppContact {
    phone: String,
    message: String,
}

impl Default for WhatsAppContact {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE, DEFAULT_MESSAGE)
    }
}

impl WhatsAppContact {
    // wa.me expects the bare international number
    pub fn new(phone: &str, message: impl Into<String>) -> Self {
        Self {
            phone: phone.chars().filter(char::is_ascii_digit).collect(),
            message: message.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn link(&self) -> String {
        format!(
            "{WHATSAPP_BASE_URL}{}?text={}",
            self.phone,
            utf8_percent_encode(&self.message, NON_ALPHANUMERIC)
        )
    }

    pub fn render_button(&self) -> String {
        format!(
            r#"<a href="{link}" target="_blank" rel="noopener noreferrer" class="whatsapp-button" aria-label="Contactar por WhatsApp">
  <svg class="whatsapp-button__icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="32" height="32" fill="currentColor" aria-hidden="true"><path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/></svg>
  <span class="whatsapp-button__hint">¿Necesitas ayuda?</span>
</a>"#,
            link = self.link()
        )
    }
}
