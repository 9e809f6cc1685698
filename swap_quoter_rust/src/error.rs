use error_stack::{AttachmentKind, FrameKind, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type QuoterResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid identifier")]
    InvalidIdentifier,

    #[error("Empty credential pool")]
    EmptyCredentialPool,

    #[error("Reqwest error")]
    ReqwestError,

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Malformed response")]
    MalformedResponse,

    #[error("Parse error")]
    ParseError,
}

pub trait ReportDisplayExt {
    fn format(&self) -> String;
}

impl ReportDisplayExt for Report<Error> {
    /// Renders `context: attachment: attachment…` as a single line, newest
    /// attachment first.
    fn format(&self) -> String {
        let mut output = self.current_context().to_string();

        for frame in self.frames() {
            if let FrameKind::Attachment(AttachmentKind::Printable(attachment)) = frame.kind() {
                output.push_str(&format!(": {attachment}"));
            }
        }

        output
    }
}
