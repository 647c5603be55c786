//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리의 JSON 파일과 `MYTV_*` 환경변수를 계층으로 합쳐
//! [`ClientConfig`]를 만든다.

use crate::config::ClientConfig;
use crate::error::CoreError;
use ::config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 환경변수 접두사
const ENV_PREFIX: &str = "MYTV";

/// 설정 관리자
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 현재 설정
    config: Arc<RwLock<ClientConfig>>,
    /// 설정 파일 경로
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 경로에서 설정 로드
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        Self::with_path(config_path)
    }

    /// 지정된 경로에서 설정 로드. 파일이 없으면 기본값 + 환경변수만 사용한다.
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        let config = Self::load(&config_path)?;
        info!("클라이언트 설정 로드: {}", config_path.display());

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> ClientConfig {
        self.config.read().clone()
    }

    /// 특정 필드만 업데이트하고 파일에 저장
    pub fn update_with<F>(&self, updater: F) -> Result<ClientConfig, CoreError>
    where
        F: FnOnce(&mut ClientConfig),
    {
        let updated = {
            let mut config = self.config.write();
            updater(&mut config);
            config.clone()
        };
        self.save()?;
        Ok(updated)
    }

    /// 현재 설정을 파일에 저장
    pub fn save(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(&*self.config.read())?;
        fs::write(&self.config_path, content).map_err(|e| {
            CoreError::Config(format!(
                "설정 파일 저장 실패: {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        debug!("설정 저장 완료: {}", self.config_path.display());
        Ok(())
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 설정 디렉토리 경로
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("live", "mytv", "mytv")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }

    /// 기본값 → 파일 → 환경변수 순으로 합친다
    fn load(path: &Path) -> Result<ClientConfig, CoreError> {
        let config = Config::builder()
            .add_source(Config::try_from(&ClientConfig::default())?)
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.json")).unwrap();

        let config = manager.get();
        assert_eq!(config.settings_path, "settings");
        assert_eq!(config.event_bus_capacity, 64);
    }

    #[test]
    fn file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{ "build_version": "3.1.4", "settings_path": "staging/settings" }"#,
        )
        .unwrap();

        let config = ConfigManager::with_path(config_path).unwrap().get();
        assert_eq!(config.build_version, "3.1.4");
        assert_eq!(config.settings_path, "staging/settings");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn update_and_persist_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let manager = ConfigManager::with_path(config_path.clone()).unwrap();
        manager
            .update_with(|c| {
                c.build_version = "2.0".to_string();
                c.event_bus_capacity = 8;
            })
            .unwrap();
        assert!(config_path.exists());

        let reloaded = ConfigManager::with_path(config_path).unwrap().get();
        assert_eq!(reloaded.build_version, "2.0");
        assert_eq!(reloaded.event_bus_capacity, 8);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = ConfigManager::with_path(config_path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
