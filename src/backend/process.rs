//! Annotation backend executed as a child process.
//!
//! Requests go to the child's stdin as a single JSON document. `preview`
//! answers with markup on stdout; `convert` streams one JSON object per line
//! and ends with a `done` or `failed` line.

use super::{JobEvent, JobEventSender, JobRunner, Renderer};
use crate::annotation::{AnnotationConfig, WirePayload};
use crate::feedback::{Severity, WorkMessage};
use anyhow::{Context, Result, anyhow, bail};
use iced::futures::SinkExt;
use iced::futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

pub const EMPTY_SOURCE_ERROR: &str = "Empty book path, please select a book.";

#[derive(Serialize)]
struct PreviewRequest<'a> {
    payload: WirePayload,
    original: &'a str,
}

#[derive(Serialize)]
struct ConvertRequest {
    payload: WirePayload,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "lowercase")]
enum BackendLine {
    Progress { percent: f32 },
    Status { severity: Severity, text: String },
    Done { text: String },
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: String,
    args: Vec<String>,
}

impl ProcessBackend {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn spawn(&self, subcommand: &str) -> Result<Child> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(subcommand)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }
        command.spawn().with_context(|| {
            format!(
                "could not start annotation backend `{}`; is it installed?",
                self.program
            )
        })
    }
}

impl Renderer for ProcessBackend {
    fn render_preview(
        &self,
        config: AnnotationConfig,
        sample: String,
    ) -> BoxFuture<'static, Result<String, String>> {
        let backend = self.clone();
        async move {
            backend
                .preview(&config, &sample)
                .await
                .map_err(|err| format!("{err:#}"))
        }
        .boxed()
    }
}

impl JobRunner for ProcessBackend {
    fn run_job(
        &self,
        config: AnnotationConfig,
        events: JobEventSender,
    ) -> BoxFuture<'static, Result<String, String>> {
        let backend = self.clone();
        async move {
            backend
                .convert(&config, events)
                .await
                .map_err(|err| format!("{err:#}"))
        }
        .boxed()
    }
}

impl ProcessBackend {
    async fn preview(&self, config: &AnnotationConfig, sample: &str) -> Result<String> {
        let request = serde_json::to_string(&PreviewRequest {
            payload: config.to_wire(),
            original: sample,
        })
        .context("encoding preview request")?;
        let mut child = self.spawn("preview")?;
        write_request(&mut child, &request).await?;
        let output = child
            .wait_with_output()
            .await
            .context("waiting for preview output")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("preview failed ({}): {}", output.status, stderr.trim());
        }
        debug!(bytes = output.stdout.len(), "Preview markup received");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn convert(&self, config: &AnnotationConfig, mut events: JobEventSender) -> Result<String> {
        if !config.has_source() {
            bail!(EMPTY_SOURCE_ERROR);
        }
        let request = serde_json::to_string(&ConvertRequest {
            payload: config.to_wire(),
        })
        .context("encoding convert request")?;
        let mut child = self.spawn("convert")?;
        info!(book = config.book_path(), format = %config.format.extension(), "Conversion backend started");
        write_request(&mut child, &request).await?;

        let stderr_task = child.stderr.take().map(|mut stderr| {
            tokio::spawn(async move {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf).await;
                buf
            })
        });
        let stdout = child
            .stdout
            .take()
            .context("backend stdout was not captured")?;
        let mut lines = BufReader::new(stdout).lines();
        let mut outcome: Option<Result<String, String>> = None;

        while let Some(line) = lines.next_line().await.context("reading backend output")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(BackendLine::Progress { percent }) => {
                    let _ = events.send(JobEvent::Progress(percent)).await;
                }
                Ok(BackendLine::Status { severity, text }) => {
                    let _ = events
                        .send(JobEvent::Status(WorkMessage::new(severity, text)))
                        .await;
                }
                Ok(BackendLine::Done { text }) => outcome = Some(Ok(text)),
                Ok(BackendLine::Failed { error }) => outcome = Some(Err(error)),
                Err(err) => warn!(line, "Skipping unreadable backend line: {err:#}"),
            }
        }

        let status = child.wait().await.context("waiting for conversion backend")?;
        let stderr = match stderr_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };
        match outcome {
            Some(Ok(text)) => Ok(text),
            Some(Err(error)) => Err(anyhow!(error)),
            None => bail!(
                "conversion backend exited ({status}) without a result: {}",
                stderr.trim()
            ),
        }
    }
}

async fn write_request(child: &mut Child, request: &str) -> Result<()> {
    let mut stdin = child
        .stdin
        .take()
        .context("backend stdin was not captured")?;
    stdin
        .write_all(request.as_bytes())
        .await
        .context("sending request to backend")?;
    stdin.write_all(b"\n").await.context("sending request to backend")?;
    stdin.shutdown().await.context("closing backend stdin")?;
    Ok(())
}

fn parse_line(line: &str) -> Result<BackendLine> {
    serde_json::from_str(line).map_err(|err| anyhow!("invalid backend line: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_progress_and_terminal_lines() {
        assert_eq!(
            parse_line(r#"{"event":"progress","percent":45.5}"#).expect("progress"),
            BackendLine::Progress { percent: 45.5 }
        );
        assert_eq!(
            parse_line(r#"{"event":"done","text":"book-wordwise.epub save to /books"}"#)
                .expect("done"),
            BackendLine::Done {
                text: "book-wordwise.epub save to /books".to_string()
            }
        );
        assert_eq!(
            parse_line(r#"{"event":"failed","error":"ebook-convert crashed"}"#).expect("failed"),
            BackendLine::Failed {
                error: "ebook-convert crashed".to_string()
            }
        );
    }

    #[test]
    fn parses_status_with_severity() {
        let line = parse_line(
            r#"{"event":"status","severity":"info","text":"Converting HTML back to ebook."}"#,
        )
        .expect("status");
        assert_eq!(
            line,
            BackendLine::Status {
                severity: Severity::Info,
                text: "Converting HTML back to ebook.".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_events() {
        assert!(parse_line(r#"{"event":"cancelled"}"#).is_err());
        assert!(parse_line("not json").is_err());
    }

    #[test]
    fn preview_request_carries_wire_payload_and_sample() {
        let config = AnnotationConfig::default();
        let request = serde_json::to_value(PreviewRequest {
            payload: config.to_wire(),
            original: "sample text",
        })
        .expect("encode");
        assert_eq!(request["original"], "sample text");
        assert_eq!(request["payload"]["format"], "epub");
        assert_eq!(request["payload"]["wordwise_style"], 0);
    }

    #[tokio::test]
    async fn empty_source_fails_before_spawning() {
        let backend = ProcessBackend::new("/nonexistent/wordwise-backend".to_string(), Vec::new());
        let (events, _rx) = iced::futures::channel::mpsc::channel(4);
        let result = backend
            .run_job(AnnotationConfig::default(), events)
            .await;
        assert_eq!(result, Err(EMPTY_SOURCE_ERROR.to_string()));
    }

    #[tokio::test]
    async fn missing_backend_is_a_render_failure() {
        let backend = ProcessBackend::new("/nonexistent/wordwise-backend".to_string(), Vec::new());
        let result = backend
            .render_preview(AnnotationConfig::default(), "sample".to_string())
            .await;
        let err = result.expect_err("missing binary must fail");
        assert!(err.contains("could not start annotation backend"));
    }
}
