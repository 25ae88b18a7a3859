use super::CapabilityProbe;
use iced::futures::future::{BoxFuture, FutureExt};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Checks that Calibre's `ebook-convert` can be launched.
pub struct EbookConvertProbe {
    program: String,
}

impl EbookConvertProbe {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

impl CapabilityProbe for EbookConvertProbe {
    fn tool_available(&self) -> BoxFuture<'static, bool> {
        let program = self.program.clone();
        async move {
            let result = Command::new(&program)
                .arg("--version")
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .output()
                .await;
            match result {
                Ok(output) if output.status.success() => {
                    let version = String::from_utf8_lossy(&output.stdout);
                    info!(
                        program,
                        version = version.lines().next().unwrap_or_default(),
                        "Conversion tool detected"
                    );
                    true
                }
                Ok(output) => {
                    debug!(program, status = %output.status, "Conversion tool exited with failure");
                    false
                }
                Err(err) => {
                    debug!(program, "Conversion tool not launchable: {err}");
                    false
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_reported_unavailable() {
        let probe = EbookConvertProbe::new("/nonexistent/ebook-convert".to_string());
        assert!(!probe.tool_available().await);
    }
}
