use anyhow::{anyhow, Result};

use kalike_core::{AppConfig, Synthesizer};

/// Synthesize `text`, play it, and wait for playback to finish
pub async fn run(config: &AppConfig, text: &str, pace: Option<f64>) -> Result<()> {
    let synthesizer = Synthesizer::new(
        config.speech.clone(),
        config.speech_api_key(),
        config.data_dir().join("audio"),
    );

    if !synthesizer.is_enabled() {
        return Err(anyhow!(
            "Speech is not configured.\nSet speech.api_key in {} or export KALIKE_SPEECH_KEY.",
            AppConfig::config_path().display()
        ));
    }

    let session = synthesizer.speak(text, pace).await?;
    session.finish().await?;

    Ok(())
}
