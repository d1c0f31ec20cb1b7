mod cta;
mod whatsapp;

pub use cta::{cta_section, FORM_ANCHOR};
pub use whatsapp::{WhatsAppContact, DEFAULT_MESSAGE, DEFAULT_PHONE, WHATSAPP_BASE_URL};

const LANDING_TEMPLATE: &str = include_str!("templates/landing.html");

pub fn landing_page(contact: &WhatsAppContact) -> String {
    LANDING_TEMPLATE
        .replace("{{CTA_SECTION}}", cta_section())
        .replace("{{WHATSAPP_BUTTON}}", &contact.render_button())
}
