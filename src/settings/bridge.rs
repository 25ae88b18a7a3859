use super::{Settings, SettingsStore};
use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("settings store did not answer within {0:?}")]
    Timeout(Duration),
    #[error("settings store is no longer running")]
    Disconnected,
    #[error("settings store failed: {0}")]
    Store(String),
}

enum SettingsRequest {
    Read {
        reply: oneshot::Sender<Result<Settings, String>>,
    },
    Write {
        settings: Settings,
        reply: oneshot::Sender<Result<(), String>>,
    },
}

/// Request/reply channel to a store running on its own thread.
///
/// Each call sends one request carrying a one-shot reply slot and waits for
/// that reply, bounded by `timeout`. When the last handle is dropped the
/// request channel closes and the store thread exits.
#[derive(Clone)]
pub struct SettingsBridge {
    requests: mpsc::UnboundedSender<SettingsRequest>,
    timeout: Duration,
}

impl SettingsBridge {
    pub fn spawn<S>(store: S, timeout: Duration) -> Result<Self>
    where
        S: SettingsStore + Send + 'static,
    {
        let (requests, inbox) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("settings-store".to_string())
            .spawn(move || serve(store, inbox))
            .context("spawning settings store thread")?;
        Ok(Self { requests, timeout })
    }

    pub async fn load(&self) -> Result<Settings, SettingsError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(SettingsRequest::Read { reply })
            .map_err(|_| SettingsError::Disconnected)?;
        self.await_reply(response).await
    }

    pub async fn save(&self, settings: Settings) -> Result<(), SettingsError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(SettingsRequest::Write { settings, reply })
            .map_err(|_| SettingsError::Disconnected)?;
        self.await_reply(response).await
    }

    async fn await_reply<T>(
        &self,
        response: oneshot::Receiver<Result<T, String>>,
    ) -> Result<T, SettingsError> {
        match tokio::time::timeout(self.timeout, response).await {
            Err(_) => Err(SettingsError::Timeout(self.timeout)),
            Ok(Err(_)) => Err(SettingsError::Disconnected),
            Ok(Ok(result)) => result.map_err(SettingsError::Store),
        }
    }
}

fn serve<S: SettingsStore>(mut store: S, mut inbox: mpsc::UnboundedReceiver<SettingsRequest>) {
    while let Some(request) = inbox.blocking_recv() {
        match request {
            SettingsRequest::Read { reply } => {
                let result = store.read().map_err(|err| format!("{err:#}"));
                if let Err(err) = &result {
                    warn!("Settings read failed: {err}");
                }
                let _ = reply.send(result);
            }
            SettingsRequest::Write { settings, reply } => {
                let result = store.write(&settings).map_err(|err| format!("{err:#}"));
                if let Err(err) = &result {
                    warn!(theme = %settings.theme, "Settings write failed: {err}");
                }
                let _ = reply.send(result);
            }
        }
    }
    debug!("Settings store thread exiting");
}
