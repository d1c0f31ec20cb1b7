use std::{collections::HashMap, fmt, fs, str::FromStr, sync::Arc};

use anyhow::{bail, Context};
use mailer::{EmailSender, LogSender, ResendClient, DEFAULT_RESEND_BASE_URL};
use server_api::DeliveryConfig;
use site::{WhatsAppContact, DEFAULT_MESSAGE};
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailProvider {
    Resend,
    Log,
}

impl FromStr for MailProvider {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "resend" => Ok(Self::Resend),
            "log" => Ok(Self::Log),
            other => bail!("unknown mail provider '{other}' (expected 'resend' or 'log')"),
        }
    }
}

impl fmt::Display for MailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resend => f.write_str("resend"),
            Self::Log => f.write_str("log"),
        }
    }
}

#[derive(Clone)]
pub struct Settings {
    pub server_bind: String,
    pub email_from: String,
    pub admin_email: String,
    pub resend_api_key: Option<String>,
    pub resend_base_url: String,
    pub mail_provider: String,
    pub whatsapp_phone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            email_from: "Scale BI Consulting <onboarding@resend.dev>".into(),
            admin_email: "samuel@scalebi.ai".into(),
            resend_api_key: None,
            resend_base_url: DEFAULT_RESEND_BASE_URL.into(),
            mail_provider: "resend".into(),
            whatsapp_phone: site::DEFAULT_PHONE.into(),
        }
    }
}

impl Settings {
    pub fn delivery_config(&self) -> DeliveryConfig {
        DeliveryConfig {
            from: self.email_from.clone(),
            admin_email: self.admin_email.clone(),
            api_key: self.resend_api_key.clone(),
        }
    }

    pub fn provider(&self) -> anyhow::Result<MailProvider> {
        self.mail_provider.parse()
    }

    pub fn build_mailer(&self) -> anyhow::Result<Arc<dyn EmailSender>> {
        let mailer: Arc<dyn EmailSender> = match self.provider()? {
            MailProvider::Resend => Arc::new(
                ResendClient::new(&self.resend_base_url).context("failed to set up Resend")?,
            ),
            MailProvider::Log => Arc::new(LogSender),
        };
        Ok(mailer)
    }

    pub fn whatsapp_contact(&self) -> WhatsAppContact {
        let contact = WhatsAppContact::new(&self.whatsapp_phone, DEFAULT_MESSAGE);
        if contact.phone().is_empty() {
            warn!(
                configured = %self.whatsapp_phone,
                "whatsapp_phone has no digits; the contact button will not reach anyone"
            );
        }
        contact
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

// The API key is only ever taken from the environment.
pub(crate) fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("email_from") {
                settings.email_from = v.clone();
            }
            if let Some(v) = file_cfg.get("admin_email") {
                settings.admin_email = v.clone();
            }
            if let Some(v) = file_cfg.get("resend_base_url") {
                settings.resend_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("mail_provider") {
                settings.mail_provider = v.clone();
            }
            if let Some(v) = file_cfg.get("whatsapp_phone") {
                settings.whatsapp_phone = v.clone();
            }
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("EMAIL_FROM") {
        settings.email_from = v;
    }
    if let Some(v) = env("APP__EMAIL_FROM") {
        settings.email_from = v;
    }

    if let Some(v) = env("ADMIN_EMAIL") {
        settings.admin_email = v;
    }
    if let Some(v) = env("APP__ADMIN_EMAIL") {
        settings.admin_email = v;
    }

    if let Some(v) = env("RESEND_API_KEY") {
        settings.resend_api_key = Some(v);
    }
    if let Some(v) = env("APP__RESEND_API_KEY") {
        settings.resend_api_key = Some(v);
    }
    settings.resend_api_key = settings
        .resend_api_key
        .filter(|key| !key.trim().is_empty());

    if let Some(v) = env("APP__RESEND_BASE_URL") {
        settings.resend_base_url = v;
    }
    if let Some(v) = env("APP__MAIL_PROVIDER") {
        settings.mail_provider = v;
    }
    if let Some(v) = env("APP__WHATSAPP_PHONE") {
        settings.whatsapp_phone = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
