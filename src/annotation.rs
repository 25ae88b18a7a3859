//! Conversion/annotation options edited on the working screen.
//!
//! `AnnotationConfig` is always well-formed: enumerated options are enums and
//! the hint level is clamped on every write, so a snapshot can be handed to
//! the backend at any moment.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MIN_HINT_LEVEL: i32 = 1;
pub const MAX_HINT_LEVEL: i32 = 5;
pub const DEFAULT_HINT_LEVEL: i32 = 3;

/// Output container produced by the conversion job.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Epub,
    Azw3,
    Mobi,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Epub,
        OutputFormat::Azw3,
        OutputFormat::Mobi,
        OutputFormat::Pdf,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Epub => "epub",
            OutputFormat::Azw3 => "azw3",
            OutputFormat::Mobi => "mobi",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Kindle device formats have no ruby support, so on-top glosses are lost.
    pub fn supports_overlay(self) -> bool {
        !matches!(self, OutputFormat::Azw3 | OutputFormat::Mobi)
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Epub
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OutputFormat::Epub => "EPUB",
            OutputFormat::Azw3 => "AZW3 (Kindle)",
            OutputFormat::Mobi => "MOBI (Kindle)",
            OutputFormat::Pdf => "PDF",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "epub" => Ok(OutputFormat::Epub),
            "azw3" => Ok(OutputFormat::Azw3),
            "mobi" => Ok(OutputFormat::Mobi),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(anyhow!("unsupported output format: {other}")),
        }
    }
}

/// Language of the gloss dictionary.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "cn")]
    Chinese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "cn",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "cn" | "zh" | "chinese" => Ok(Language::Chinese),
            other => Err(anyhow!("unsupported language: {other}")),
        }
    }
}

/// Where glosses are placed relative to the annotated word.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStyle {
    Inline,
    Overlay,
}

impl AnnotationStyle {
    pub const ALL: [AnnotationStyle; 2] = [AnnotationStyle::Inline, AnnotationStyle::Overlay];

    /// Numeric code understood by the annotation backend.
    pub fn wire_code(self) -> i32 {
        match self {
            AnnotationStyle::Inline => 0,
            AnnotationStyle::Overlay => 1,
        }
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        AnnotationStyle::Inline
    }
}

impl std::fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AnnotationStyle::Inline => "Inline",
            AnnotationStyle::Overlay => "On top (ruby)",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for AnnotationStyle {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(AnnotationStyle::Inline),
            "overlay" | "ruby" | "on-top" => Ok(AnnotationStyle::Overlay),
            other => Err(anyhow!("unsupported annotation style: {other}")),
        }
    }
}

/// Full set of options sent with every preview and conversion request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnnotationConfig {
    pub source_path: String,
    pub format: OutputFormat,
    pub language: Language,
    pub style: AnnotationStyle,
    pub hint_level: i32,
    pub allow_long_definition: bool,
    pub show_phoneme: bool,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            format: OutputFormat::default(),
            language: Language::default(),
            style: AnnotationStyle::default(),
            hint_level: DEFAULT_HINT_LEVEL,
            allow_long_definition: false,
            show_phoneme: false,
        }
    }
}

impl AnnotationConfig {
    /// Copy with every field forced back into its domain.
    pub fn sanitized(mut self) -> Self {
        self.hint_level = clamp_hint_level(self.hint_level);
        self.source_path = self.source_path.trim().to_string();
        self
    }

    /// The path as handed to the backend; edits keep their raw text.
    pub fn book_path(&self) -> &str {
        self.source_path.trim()
    }

    pub fn has_source(&self) -> bool {
        !self.book_path().is_empty()
    }

    pub fn to_wire(&self) -> WirePayload {
        WirePayload {
            book: self.book_path().to_string(),
            format: self.format.extension().to_string(),
            language: self.language.code().to_string(),
            hint_level: self.hint_level,
            allow_long: self.allow_long_definition,
            show_phoneme: self.show_phoneme,
            wordwise_style: self.style.wire_code(),
        }
    }
}

/// Shape the annotation backend expects on its stdin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WirePayload {
    pub book: String,
    pub format: String,
    pub language: String,
    pub hint_level: i32,
    pub allow_long: bool,
    pub show_phoneme: bool,
    pub wordwise_style: i32,
}

pub fn clamp_hint_level(level: i32) -> i32 {
    level.clamp(MIN_HINT_LEVEL, MAX_HINT_LEVEL)
}

/// A single-field edit coming from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    SourcePath(String),
    Format(OutputFormat),
    Language(Language),
    Style(AnnotationStyle),
    HintLevel(i32),
    AllowLongDefinition(bool),
    ShowPhoneme(bool),
}

impl FieldChange {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldChange::SourcePath(_) => "source_path",
            FieldChange::Format(_) => "format",
            FieldChange::Language(_) => "language",
            FieldChange::Style(_) => "style",
            FieldChange::HintLevel(_) => "hint_level",
            FieldChange::AllowLongDefinition(_) => "allow_long_definition",
            FieldChange::ShowPhoneme(_) => "show_phoneme",
        }
    }
}

/// Owner of the live configuration. Writes go through `apply`, reads hand
/// out owned snapshots so nothing downstream can observe a half-applied edit.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: AnnotationConfig,
}

impl ConfigStore {
    pub fn new(initial: AnnotationConfig) -> Self {
        Self {
            current: initial.sanitized(),
        }
    }

    pub fn current(&self) -> &AnnotationConfig {
        &self.current
    }

    pub fn snapshot(&self) -> AnnotationConfig {
        self.current.clone()
    }

    pub fn apply(&mut self, change: FieldChange) -> AnnotationConfig {
        match change {
            FieldChange::SourcePath(path) => self.current.source_path = path,
            FieldChange::Format(format) => self.current.format = format,
            FieldChange::Language(language) => self.current.language = language,
            FieldChange::Style(style) => self.current.style = style,
            FieldChange::HintLevel(level) => self.current.hint_level = clamp_hint_level(level),
            FieldChange::AllowLongDefinition(allow) => self.current.allow_long_definition = allow,
            FieldChange::ShowPhoneme(show) => self.current.show_phoneme = show,
        }
        self.snapshot()
    }
}
