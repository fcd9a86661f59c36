//! `osascript` execution for the automation bridge.

use std::sync::LazyLock;

use tokio::runtime::Runtime;
use tracing::{debug, warn};

use super::errors::BridgeError;
use super::traits::{AutomationBridge, BridgeCallback, BridgeResult};
use super::types::{BridgeValue, Script};
use crate::config::BridgeConfig;

/// Runtime shared by every `OsascriptBridge`, built on first use.
static RUNTIME: LazyLock<Result<Runtime, String>> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("appctl-osascript")
        .enable_all()
        .build()
        .map_err(|e| e.to_string())
});

/// Bridge that runs scripts through `osascript -l <language> -e <script>`.
///
/// Scripts run on a runtime shared by all bridges, so calls work from
/// synchronous code and from any executor. Completion callbacks run on that
/// runtime's blocking pool and may block.
#[derive(Debug, Clone, Default)]
pub struct OsascriptBridge {
    config: BridgeConfig,
}

impl OsascriptBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

impl AutomationBridge for OsascriptBridge {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn execute(&self, script: Script, done: BridgeCallback) {
        let runtime = match &*RUNTIME {
            Ok(runtime) => runtime,
            Err(message) => {
                warn!(
                    event = "core.bridge.runtime_unavailable",
                    error = %message
                );
                done(Err(BridgeError::LaunchFailed {
                    message: format!("Failed to start runtime for osascript: {}", message),
                }));
                return;
            }
        };

        let config = self.config.clone();
        runtime.spawn(async move {
            let result = run_script(config, script).await;
            // Callbacks may block or dispatch again; keep them off the worker.
            let _ = tokio::task::spawn_blocking(move || done(result));
        });
    }
}

/// Execute a script with `osascript` and interpret its stdout.
async fn run_script(config: BridgeConfig, script: Script) -> BridgeResult {
    let program = which::which(&config.program).map_err(|e| BridgeError::Unavailable {
        program: config.program.clone(),
        message: e.to_string(),
    })?;

    debug!(
        event = "core.bridge.osascript_executing",
        program = %program.display(),
        language = config.language,
        script_len = script.as_str().len()
    );

    let mut command = tokio::process::Command::new(&program);
    command
        .arg("-l")
        .arg(&config.language)
        .arg("-e")
        .arg(script.as_str())
        .kill_on_drop(true);

    let output = match config.timeout() {
        Some(limit) => tokio::time::timeout(limit, command.output())
            .await
            .map_err(|_| BridgeError::TimedOut {
                timeout_ms: config.timeout_ms,
            })?,
        None => command.output().await,
    }
    .map_err(|e| BridgeError::LaunchFailed {
        message: format!("Failed to execute {}: {}", program.display(), e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(
            event = "core.bridge.osascript_failed",
            exit_code = ?output.status.code(),
            stderr = %stderr
        );
        return Err(BridgeError::ScriptFailed { stderr });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);

    debug!(
        event = "core.bridge.osascript_completed",
        stdout_len = stdout.len()
    );

    Ok(BridgeValue::from_osascript_output(&stdout))
}
