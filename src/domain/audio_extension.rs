use std::fmt;
use std::str::FromStr;

/// Audio container types the transcription provider accepts for inline uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioExtension {
    Wav,
    Mp3,
    M4a,
    Ogg,
}

impl AudioExtension {
    pub const ALL: [AudioExtension; 4] = [Self::Wav, Self::Mp3, Self::M4a, Self::Ogg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
        }
    }

    /// Lower-cased text after the last `.`, or the whole name when there is none.
    pub fn raw_from_filename(filename: &str) -> String {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(filename)
            .to_lowercase()
    }
}

impl FromStr for AudioExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wav" => Ok(Self::Wav),
            "mp3" => Ok(Self::Mp3),
            "m4a" => Ok(Self::M4a),
            "ogg" => Ok(Self::Ogg),
            other => Err(format!("unsupported audio type: .{}", other)),
        }
    }
}

impl fmt::Display for AudioExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
