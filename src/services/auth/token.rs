use crate::services::auth::error::VerifyError;

const BEARER_PREFIX: &str = "Bearer";

/// Compact JWT split into its three encoded segments. Nothing is decoded or
/// verified yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> Token<'a> {
    /// Parse the raw value of an `Authorization` header.
    ///
    /// The `Bearer` prefix is optional and case-sensitive. Whitespace is
    /// trimmed around the whole value, never inside a segment.
    pub fn parse(raw: &'a str) -> Result<Self, VerifyError> {
        let trimmed = raw.trim();
        let cleaned = trimmed
            .strip_prefix(BEARER_PREFIX)
            .unwrap_or(trimmed)
            .trim();

        let mut parts = cleaned.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header,
                payload,
                signature,
            }),
            _ => Err(VerifyError::MalformedToken),
        }
    }

    /// `header.payload`, the exact bytes covered by the signature.
    pub fn signing_input(&self) -> String {
        let mut message = String::with_capacity(self.header.len() + 1 + self.payload.len());
        message.push_str(self.header);
        message.push('.');
        message.push_str(self.payload);
        message
    }
}
