//! 설정 및 DI 와이어링 통합 테스트.
//!
//! 설정 파일 → ClientConfig → AppContext 생성 검증.

use mytv_app::context::AppContext;
use mytv_app::controller::AppState;
use mytv_app::sources::{MemoryConfigSource, MemoryNavigation};
use mytv_core::config::ClientConfig;
use mytv_core::config_manager::ConfigManager;
use mytv_core::BUILD_VERSION;
use mytv_ui::document::MemoryDocument;
use serde_json::json;
use std::sync::Arc;

fn bootstrap(config: ClientConfig, remote: &MemoryConfigSource) -> AppContext {
    AppContext::bootstrap(
        config,
        remote,
        Arc::new(MemoryNavigation::new("")),
        Arc::new(MemoryDocument::new()),
    )
}

#[test]
fn config_defaults_are_valid() {
    let config = ClientConfig::default();
    assert!(!config.settings_path.is_empty());
    assert!(!config.build_version.is_empty());
    assert!(config.event_bus_capacity > 0);
}

#[test]
fn default_build_version_matches_remote_equal_version() {
    let remote = MemoryConfigSource::new();
    let ctx = bootstrap(ClientConfig::default(), &remote);

    remote.publish(
        "settings",
        Some(json!({ "force_update": true, "app_version": BUILD_VERSION })),
    );
    assert_eq!(ctx.controller.state(), AppState::User);
    assert_eq!(ctx.controller.gate().build_version(), BUILD_VERSION);
}

#[test]
fn settings_path_comes_from_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "settings_path": "staging/settings", "build_version": "1.0" }"#,
    )
    .unwrap();

    let config = ConfigManager::with_path(config_path).unwrap().get();
    let remote = MemoryConfigSource::new();
    let ctx = bootstrap(config, &remote);
    assert_eq!(ctx.controller.settings().path(), "staging/settings");

    // 다른 경로의 값은 초기화에 영향 없음
    remote.publish("settings", Some(json!({ "app_version": "1.0" })));
    assert_eq!(ctx.controller.state(), AppState::Loading);

    remote.publish(
        "staging/settings",
        Some(json!({ "force_update": true, "app_version": "2.0" })),
    );
    assert_eq!(ctx.controller.state(), AppState::Blocked);
}

#[test]
fn value_published_before_bootstrap_is_delivered() {
    let remote = MemoryConfigSource::new();
    remote.publish("settings", Some(json!({ "app_language": "en" })));

    let ctx = bootstrap(ClientConfig::default(), &remote);
    let view = ctx.controller.latest();
    assert_eq!(view.state, AppState::User);
    assert_eq!(view.locale.code(), "en");
}
