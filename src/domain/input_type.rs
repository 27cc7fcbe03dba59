use std::fmt;

pub const SOURCE_LANGUAGE: &str = "es";
pub const TARGET_LANGUAGE: &str = "en";

/// The `tipo` literal a client sends with each request.
///
/// `es` asks for a plain transcription, `en` for a transcription followed by a
/// translation. Any other literal is carried through verbatim: it is stored in
/// history as-is but never engages the translation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    SourceOnly,
    WithTranslation,
    Other(String),
}

impl InputType {
    pub fn parse(literal: Option<&str>) -> Self {
        match literal {
            None | Some(SOURCE_LANGUAGE) => Self::SourceOnly,
            Some(TARGET_LANGUAGE) => Self::WithTranslation,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SourceOnly => SOURCE_LANGUAGE,
            Self::WithTranslation => TARGET_LANGUAGE,
            Self::Other(literal) => literal,
        }
    }

    /// Language code handed to the speech-to-text provider.
    pub fn language_hint(&self) -> &'static str {
        match self {
            Self::SourceOnly => SOURCE_LANGUAGE,
            _ => TARGET_LANGUAGE,
        }
    }

    pub fn requires_translation(&self) -> bool {
        matches!(self, Self::WithTranslation)
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Self::SourceOnly => RecordType::Transcription,
            _ => RecordType::Translation,
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Transcription,
    Translation,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Transcription => "transcripcion",
            RecordType::Translation => "traduccion",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
