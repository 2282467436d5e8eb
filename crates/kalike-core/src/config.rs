use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub switch: SwitchConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            switch: SwitchConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (score file, cached audio)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Path to a custom content dataset (JSON); embedded dataset when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show transliteration under letter cards
    #[serde(default = "default_true")]
    pub show_transliteration: bool,
    /// Columns in the card grid
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_transliteration: default_true(),
            grid_columns: default_grid_columns(),
        }
    }
}

/// Easing curve for the segmented-switch pill animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No easing, jump at the end
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Cubic ease-in-out (default for the switch pill)
    EaseInOut,
}

/// Segmented-switch animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Animate the selection pill between segments
    #[serde(default = "default_true")]
    pub animation_enabled: bool,
    /// Transition duration in milliseconds
    #[serde(default = "default_switch_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default = "default_switch_easing")]
    pub easing: EasingType,
    /// Horizontal inset shaving the pill smaller than its segment, in columns
    #[serde(default = "default_switch_inset")]
    pub inset: f64,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            animation_enabled: default_true(),
            animation_duration_ms: default_switch_duration(),
            easing: default_switch_easing(),
            inset: default_switch_inset(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Enable text-to-speech
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// TTS endpoint URL
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,
    /// API subscription key; falls back to KALIKE_SPEECH_KEY env var
    #[serde(default)]
    pub api_key: Option<String>,
    /// BCP-47 target language code
    #[serde(default = "default_speech_language")]
    pub language: String,
    /// Speaker voice name
    #[serde(default = "default_speech_speaker")]
    pub speaker: String,
    /// Speaking pace, 0.3 to 1.0
    #[serde(default = "default_speech_pace")]
    pub pace: f64,
    /// TTS model identifier
    #[serde(default = "default_speech_model")]
    pub model: String,
    /// Command used to play synthesized audio; file path is appended
    #[serde(default = "default_speech_player")]
    pub player: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_speech_endpoint(),
            api_key: None,
            language: default_speech_language(),
            speaker: default_speech_speaker(),
            pace: default_speech_pace(),
            model: default_speech_model(),
            player: default_speech_player(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("~/.local/share/kalike")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_grid_columns() -> u16 {
    4
}

fn default_switch_duration() -> u64 {
    400
}

fn default_switch_easing() -> EasingType {
    EasingType::EaseInOut
}

fn default_switch_inset() -> f64 {
    2.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_speech_endpoint() -> String {
    "https://api.sarvam.ai/text-to-speech".to_string()
}

fn default_speech_language() -> String {
    "kn-IN".to_string()
}

fn default_speech_speaker() -> String {
    "anushka".to_string()
}

fn default_speech_pace() -> f64 {
    0.7
}

fn default_speech_model() -> String {
    "bulbul:v2".to_string()
}

fn default_speech_player() -> Vec<String> {
    vec!["aplay".to_string(), "-q".to_string()]
}

/// Expand a leading tilde to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/kalike/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("kalike")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the high-score file path
    pub fn scores_path(&self) -> PathBuf {
        self.data_dir().join("scores.json")
    }

    /// Resolve the speech API key from config or environment
    pub fn speech_api_key(&self) -> Option<String> {
        self.speech
            .api_key
            .clone()
            .or_else(|| std::env::var("KALIKE_SPEECH_KEY").ok())
    }
}
