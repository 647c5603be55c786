//! # mytv
//!
//! MyTV 클라이언트 부트스트랩 코어의 헤드리스 실행기.
//! 인프로세스 원격 설정/내비게이션 소스에 이벤트 스크립트를 흘려 넣고
//! 최상위 상태 전이를 JSON 한 줄씩 출력한다.
//!
//! 스크립트 형식 (한 줄에 한 명령):
//!
//! ```text
//! settings {"force_update": true, "app_version": "9.9"}
//! settings null
//! nav #admin
//! // 주석
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use mytv_app::context::AppContext;
use mytv_app::controller::{AppState, AppView};
use mytv_app::sources::{MemoryConfigSource, MemoryNavigation};
use mytv_core::config_manager::ConfigManager;
use mytv_core::ports::document::DocumentSurface;
use mytv_core::ports::navigation::NavigationSource;
use mytv_ui::document::MemoryDocument;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// MyTV 클라이언트 부트스트랩 실행기
#[derive(Parser, Debug)]
#[command(name = "mytv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 클라이언트 설정 파일 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l')]
    log_level: Option<String>,

    /// 비교 기준 빌드 버전 덮어쓰기
    #[arg(long)]
    build_version: Option<String>,

    /// 시작 시 URL 프래그먼트 (예: "#admin")
    #[arg(long, default_value = "")]
    fragment: String,

    /// 이벤트 스크립트 파일 (기본: 표준 입력)
    #[arg(long, short = 's')]
    script: Option<PathBuf>,
}

/// 스크립트 명령
#[derive(Debug, PartialEq)]
enum ScriptCommand {
    /// 원격 설정 알림
    Settings(Option<Value>),
    /// 프래그먼트 변경
    Navigate(String),
}

/// 스크립트 한 줄 해석. 빈 줄과 주석은 `None`.
fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "settings" => {
            let value: Value = serde_json::from_str(rest)
                .with_context(|| format!("설정 JSON 파싱 실패: {rest}"))?;
            Ok(Some(ScriptCommand::Settings(
                (!value.is_null()).then_some(value),
            )))
        }
        "nav" => Ok(Some(ScriptCommand::Navigate(rest.to_string()))),
        other => bail!("알 수 없는 명령: {other}"),
    }
}

fn print_view(view: &AppView) {
    match serde_json::to_string(view) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!("뷰 직렬화 실패: {e}"),
    }
}

async fn run_script(
    ctx: &AppContext,
    remote: &MemoryConfigSource,
    navigation: &MemoryNavigation,
    reader: Box<dyn AsyncBufRead + Unpin>,
) -> Result<()> {
    let mut lines = reader.lines();

    let view = ctx.controller.refresh();
    print_view(&view);
    let mut last_state: AppState = view.state;

    while let Some(line) = lines.next_line().await.context("스크립트 읽기 실패")? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("스크립트 줄 무시: {e:#}");
                continue;
            }
        };

        match command {
            ScriptCommand::Settings(value) => remote.publish(&ctx.config.settings_path, value),
            ScriptCommand::Navigate(fragment) => navigation.set_fragment(&fragment),
        }

        let view = ctx.controller.refresh();
        if view.state != last_state {
            print_view(&view);
            last_state = view.state;
        }
    }

    Ok(())
}

// 단일 논리 스레드에서 두 이벤트 소스를 처리한다
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("클라이언트 설정 로드 실패")?;

    let mut config = manager.get();
    if let Some(version) = &args.build_version {
        config.build_version = version.clone();
    }

    // tracing 초기화
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let log_filter = format!(
        "mytv={},mytv_app={},mytv_core={},mytv_ui={}",
        log_level, log_level, log_level, log_level
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("MyTV 클라이언트 시작");
    info!("설정 파일: {}", manager.config_path().display());

    // ── 어댑터 생성 (DI 와이어링) ──
    let remote = MemoryConfigSource::new();
    let navigation = MemoryNavigation::new(&args.fragment);
    let document = Arc::new(MemoryDocument::new());

    let ctx = AppContext::bootstrap(
        config,
        &remote,
        Arc::new(navigation.clone()),
        document.clone(),
    );
    let controller_task = ctx.spawn();

    let mut events = ctx.event_bus.subscribe();
    let event_logger = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!("이벤트: {event:?}");
        }
    });

    let reader: Box<dyn AsyncBufRead + Unpin> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("스크립트 열기 실패: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    tokio::select! {
        result = run_script(&ctx, &remote, &navigation, reader) => {
            result?;
            info!("스크립트 종료");
        }
        _ = ctx.lifecycle.wait_for_signal() => {}
    }

    ctx.shutdown();
    controller_task
        .await
        .context("컨트롤러 태스크 종료 실패")?;
    event_logger.abort();

    info!(
        "종료: 상태={:?}, 문서 제목={}",
        ctx.controller.latest().state,
        document.title()
    );
    Ok(())
}
