//! Configuration-driven wiring tests.

use std::sync::Arc;

use domain::User;
use membership_service::audit::AuditEntry;
use membership_service::repository::{InMemoryUserStore, UserRepository};
use membership_service::security::HashingPasswordChecker;
use membership_service::{AuditSink, MembershipConfig, Services};

fn services(config: &MembershipConfig) -> Services {
    let checker: HashingPasswordChecker = HashingPasswordChecker::default();
    let store = InMemoryUserStore::new();
    store
        .create_user(&User::with_password("alice", "pw1", checker.hasher()).unwrap())
        .unwrap();

    Services::from_config(config, Arc::new(store), Arc::new(checker)).unwrap()
}

#[tokio::test]
async fn test_membership_login_reaches_subscribers() {
    let services = services(&MembershipConfig::default());
    let mut rx = services.subscribe();

    assert!(services.membership().try_login(Some("alice"), Some("pw1")).unwrap());

    let event = rx.recv().await.unwrap();
    assert_eq!(event.login, "alice");
}

#[test]
fn test_file_sink_records_both_managers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let config = MembershipConfig {
        audit_sink: AuditSink::File(path.clone()),
        ..MembershipConfig::default()
    };
    let services = services(&config);

    services.login().try_login(Some("alice"), Some("pw1")).unwrap();
    services.membership().try_login(Some("bob"), Some("pw1")).unwrap();

    let entries: Vec<AuditEntry> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let messages: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.login.as_str(), e.message.as_str()))
        .collect();

    assert_eq!(
        messages,
        vec![
            ("alice", "Trying to log in."),
            ("alice", "Logged in."),
            ("bob", "Trying to log in."),
            ("bob", "Failed to log in."),
        ]
    );
}

#[test]
fn test_none_sink_still_logs_in() {
    let config = MembershipConfig {
        audit_sink: AuditSink::None,
        ..MembershipConfig::default()
    };
    let services = services(&config);

    assert!(services.login().try_login(Some("alice"), Some("pw1")).unwrap());
}

#[test]
fn test_tracing_wired_from_loaded_config() {
    let config = MembershipConfig::from_lookup(|key| match key {
        "MEMBERSHIP_LOG_LEVEL" => Some("debug".to_string()),
        "MEMBERSHIP_AUDIT_SINK" => Some("tracing".to_string()),
        _ => None,
    })
    .unwrap();
    common::init_tracing(&config.service);

    let services = services(&config);

    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.audit_sink, AuditSink::Tracing);
    assert!(services.login().try_login(Some("alice"), Some("pw1")).unwrap());
    assert!(!services.login().try_login(Some("alice"), Some("wrong")).unwrap());
}
