//! Text-to-speech via an HTTP synthesis endpoint.
//!
//! Each request produces an [`AudioSession`] that exclusively owns the
//! synthesized audio file and the player process. Dropping a session (for
//! example when a newer request supersedes it) stops playback and removes
//! the file; there is no shared "currently playing" state.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::config::SpeechConfig;
use crate::{Error, Result};

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    target_language_code: &'a str,
    speaker: &'a str,
    pace: f64,
    pitch: f64,
    loudness: f64,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct TtsResponse {
    #[serde(default)]
    audios: Vec<String>,
}

/// A single playback in flight: owns the temp file and the player process
#[derive(Debug)]
pub struct AudioSession {
    path: PathBuf,
    child: Option<Child>,
}

impl AudioSession {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Wait for the player to finish, then clean up the file
    pub async fn finish(mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            let status = child.wait().await?;
            if !status.success() {
                warn!(status = %status, "audio player exited with failure");
            }
        }
        Ok(())
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        if let Some(child) = self.child.as_mut() {
            // Superseded before playback ended; stop the player.
            let _ = child.start_kill();
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!(path = %self.path.display(), error = %e, "failed to remove audio file");
            }
        }
    }
}

/// Client for the speech endpoint
#[derive(Debug, Clone)]
pub struct Synthesizer {
    client: reqwest::Client,
    config: SpeechConfig,
    api_key: Option<String>,
    audio_dir: PathBuf,
}

impl Synthesizer {
    pub fn new(config: SpeechConfig, api_key: Option<String>, audio_dir: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            api_key,
            audio_dir,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled && self.api_key.is_some()
    }

    /// Synthesize `text` and start playing it.
    ///
    /// `pace` overrides the configured speaking pace when given. Empty text
    /// is a no-op error the caller is expected to swallow and log.
    pub async fn speak(&self, text: &str, pace: Option<f64>) -> Result<AudioSession> {
        if text.is_empty() {
            return Err(Error::Speech("empty text".into()));
        }
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(Error::Speech("no API key configured".into()));
        };

        let request = TtsRequest {
            text,
            target_language_code: &self.config.language,
            speaker: &self.config.speaker,
            pace: pace.unwrap_or(self.config.pace).clamp(0.3, 1.0),
            pitch: 0.0,
            loudness: 1.0,
            model: &self.config.model,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("api-subscription-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: TtsResponse = response.json().await?;
        let Some(audio_b64) = body.audios.first() else {
            return Err(Error::Speech("no audio in response".into()));
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(audio_b64)
            .map_err(|e| Error::Speech(format!("invalid base64 audio: {e}")))?;

        let path = self.write_audio_file(&bytes)?;
        let child = self.spawn_player(&path)?;

        debug!(text, path = %path.display(), "speaking");
        Ok(AudioSession {
            path,
            child: Some(child),
        })
    }

    fn write_audio_file(&self, bytes: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.audio_dir)?;
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = self.audio_dir.join(format!("speech_{stamp}.wav"));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    fn spawn_player(&self, path: &PathBuf) -> Result<Child> {
        let Some((program, args)) = self.config.player.split_first() else {
            return Err(Error::Speech("no player command configured".into()));
        };
        Command::new(program)
            .args(args)
            .arg(path)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Speech(format!("failed to start player {program}: {e}")))
    }
}
