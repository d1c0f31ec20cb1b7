use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let pairs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| pairs.get(key).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = settings_from_sources(None, env_from(&[]));
    assert_eq!(settings.server_bind, "127.0.0.1:3000");
    assert_eq!(settings.admin_email, "samuel@scalebi.ai");
    assert_eq!(settings.resend_base_url, "https://api.resend.com");
    assert_eq!(settings.whatsapp_phone, "56982422956");
    assert!(settings.resend_api_key.is_none());
}

#[test]
fn file_values_override_defaults() {
    let file = r#"
bind_addr = "0.0.0.0:8080"
admin_email = "leads@scalebi.test"
mail_provider = "log"
"#;
    let settings = settings_from_sources(Some(file), env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.admin_email, "leads@scalebi.test");
    assert_eq!(settings.mail_provider, "log");
}

#[test]
fn prefixed_env_wins_over_plain_env_and_file() {
    let file = r#"admin_email = "file@scalebi.test""#;
    let settings = settings_from_sources(
        Some(file),
        env_from(&[
            ("ADMIN_EMAIL", "plain@scalebi.test"),
            ("APP__ADMIN_EMAIL", "prefixed@scalebi.test"),
        ]),
    );
    assert_eq!(settings.admin_email, "prefixed@scalebi.test");
}

#[test]
fn api_key_is_read_from_env_only() {
    let file = r#"resend_api_key = "re_from_file""#;
    let settings = settings_from_sources(Some(file), env_from(&[]));
    assert!(settings.resend_api_key.is_none());

    let settings = settings_from_sources(Some(file), env_from(&[("RESEND_API_KEY", "re_env")]));
    assert_eq!(settings.resend_api_key.as_deref(), Some("re_env"));
}

#[test]
fn blank_api_key_counts_as_unset() {
    let settings = settings_from_sources(None, env_from(&[("RESEND_API_KEY", "  ")]));
    assert!(settings.resend_api_key.is_none());
    assert!(settings.delivery_config().credential().is_err());
}

#[test]
fn unparsable_file_is_ignored() {
    let settings = settings_from_sources(Some("bind_addr = ["), env_from(&[]));
    assert_eq!(settings.server_bind, "127.0.0.1:3000");
}

#[test]
fn mail_provider_parsing() {
    assert_eq!("Resend".parse::<MailProvider>().expect("resend"), MailProvider::Resend);
    assert_eq!(" log ".parse::<MailProvider>().expect("log"), MailProvider::Log);
    assert!("smtp".parse::<MailProvider>().is_err());
}

#[test]
fn build_mailer_rejects_bad_provider_or_url() {
    let settings = Settings {
        mail_provider: "carrier-pigeon".into(),
        ..Settings::default()
    };
    assert!(settings.build_mailer().is_err());

    let settings = Settings {
        resend_base_url: "::not a url".into(),
        ..Settings::default()
    };
    assert!(settings.build_mailer().is_err());

    assert!(Settings::default().build_mailer().is_ok());
}

#[test]
fn provider_is_parsed_from_settings() {
    let settings = settings_from_sources(None, env_from(&[("APP__MAIL_PROVIDER", " LOG ")]));
    let provider = settings.provider().expect("provider");
    assert_eq!(provider, MailProvider::Log);
    assert_eq!(provider.to_string(), "log");
}

#[test]
fn whatsapp_contact_uses_configured_digits() {
    let settings = settings_from_sources(
        None,
        env_from(&[("APP__WHATSAPP_PHONE", "+56 9 1111 2222")]),
    );
    assert_eq!(settings.whatsapp_contact().phone(), "56911112222");
}

#[test]
fn whatsapp_phone_without_digits_yields_empty_contact() {
    let settings = settings_from_sources(None, env_from(&[("APP__WHATSAPP_PHONE", "n/a")]));
    let contact = settings.whatsapp_contact();
    assert!(contact.phone().is_empty());
    assert!(contact.link().starts_with("https://wa.me/?text="));
}
