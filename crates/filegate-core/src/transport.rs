use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Transport status codes
///
/// This enum defines the status codes a transport layer reports for a staged
/// upload. It's defined in core because both validation and the upload step
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportCode {
    Ok,
    ExceedsServerLimit,
    ExceedsFormLimit,
    Partial,
    Missing,
    NoTempDir,
    WriteFailure,
    ExtensionBlocked,
    Unknown,
}

impl TransportCode {
    /// Whether the transport layer staged the file successfully
    pub fn is_ok(&self) -> bool {
        matches!(self, TransportCode::Ok)
    }

    /// Human-readable message for a failed transport
    ///
    /// `Ok` shares the fallback message with `Unknown`; callers check
    /// [`is_ok`](Self::is_ok) before reporting a failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            TransportCode::ExceedsServerLimit => "The uploaded file exceeds the size set",
            TransportCode::ExceedsFormLimit => {
                "The uploaded file exceeds the MAX_FILE_SIZE directive that was specified in the HTML form"
            }
            TransportCode::Partial => "The uploaded file was only partially uploaded",
            TransportCode::Missing => "No file was uploaded",
            TransportCode::NoTempDir => "File folder couldn't not be found",
            TransportCode::WriteFailure => "This file couldn't not be save, please try again",
            TransportCode::ExtensionBlocked => "File upload stopped by extension",
            TransportCode::Ok | TransportCode::Unknown => "Unknown upload error",
        }
    }
}

impl FromStr for TransportCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(TransportCode::Ok),
            "exceeds-server-limit" => Ok(TransportCode::ExceedsServerLimit),
            "exceeds-form-limit" => Ok(TransportCode::ExceedsFormLimit),
            "partial" => Ok(TransportCode::Partial),
            "missing" => Ok(TransportCode::Missing),
            "no-temp-dir" => Ok(TransportCode::NoTempDir),
            "write-failure" => Ok(TransportCode::WriteFailure),
            "extension-blocked" => Ok(TransportCode::ExtensionBlocked),
            "unknown" => Ok(TransportCode::Unknown),
            _ => Err(anyhow::anyhow!("Invalid transport code: {}", s)),
        }
    }
}

impl Display for TransportCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TransportCode::Ok => write!(f, "ok"),
            TransportCode::ExceedsServerLimit => write!(f, "exceeds-server-limit"),
            TransportCode::ExceedsFormLimit => write!(f, "exceeds-form-limit"),
            TransportCode::Partial => write!(f, "partial"),
            TransportCode::Missing => write!(f, "missing"),
            TransportCode::NoTempDir => write!(f, "no-temp-dir"),
            TransportCode::WriteFailure => write!(f, "write-failure"),
            TransportCode::ExtensionBlocked => write!(f, "extension-blocked"),
            TransportCode::Unknown => write!(f, "unknown"),
        }
    }
}
