use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::playback::state::clamp_wpm;
use crate::render::ScalePolicy;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_wpm")]
    pub wpm: u32,
    #[serde(default)]
    pub punct_pause_ms: u64,
    #[serde(default = "default_focal")]
    pub focal: bool,
    #[serde(default = "default_focal_color")]
    pub focal_color: String,
    #[serde(default)]
    pub context: bool,
    #[serde(default)]
    pub scale_reference: ScaleReference,
}

fn default_wpm() -> u32 {
    200
}
fn default_focal() -> bool {
    true
}
fn default_focal_color() -> String {
    "red".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wpm: default_wpm(),
            punct_pause_ms: 0,
            focal: default_focal(),
            focal_color: default_focal_color(),
            context: false,
            scale_reference: ScaleReference::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("speedread")
            .join("config.toml")
    }

    /// Clamp values that came from disk or the command line into range.
    pub fn validate(&mut self) {
        self.wpm = clamp_wpm(self.wpm);
    }

    pub fn focal_color(&self) -> FocalColor {
        FocalColor::from_name(&self.focal_color)
    }
}

/// Which reference word length drives the session-wide glyph scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScaleReference {
    /// The longest word in the document.
    #[default]
    Longest,
    /// A fixed eight-character reference word.
    Fixed,
}

impl ScaleReference {
    pub fn policy(self, longest_word: usize) -> ScalePolicy {
        match self {
            ScaleReference::Longest => ScalePolicy::LongestWord(longest_word),
            ScaleReference::Fixed => ScalePolicy::Fixed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocalColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl FocalColor {
    /// Case-insensitive name lookup; anything unrecognised is red.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => FocalColor::Black,
            "green" => FocalColor::Green,
            "yellow" => FocalColor::Yellow,
            "blue" => FocalColor::Blue,
            "magenta" => FocalColor::Magenta,
            "cyan" => FocalColor::Cyan,
            "white" => FocalColor::White,
            _ => FocalColor::Red,
        }
    }

    pub fn color(self) -> Color {
        match self {
            FocalColor::Black => Color::Black,
            FocalColor::Red => Color::Red,
            FocalColor::Green => Color::Green,
            FocalColor::Yellow => Color::Yellow,
            FocalColor::Blue => Color::Blue,
            FocalColor::Magenta => Color::Magenta,
            FocalColor::Cyan => Color::Cyan,
            FocalColor::White => Color::White,
        }
    }
}
