use serde_json::json;
use wichtel_domain::config::{AppConfig, MailConfig, MailMode, ServerConfig};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4680);
    assert_eq!(server.public_url, "http://localhost:4680");

    let mail = MailConfig::default();
    assert_eq!(mail.mode, MailMode::Capture);
    assert_eq!(mail.sender, "noreply@localhost");

    let cfg = AppConfig::default();
    assert!(cfg.exchange.protect_admin);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080, "public_url": "https://santa.example" },
        "mail": { "mode": "log", "sender": "santa@example.com" },
        "exchange": { "protect_admin": false }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.public_url, "https://santa.example");
    assert_eq!(cfg.mail.mode, MailMode::Log);
    assert!(!cfg.exchange.protect_admin);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let raw = json!({ "server": { "port": 9000 } });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.mail.mode, MailMode::Capture);
    assert!(cfg.exchange.protect_admin);
}
