use base64::{
    Engine as _, alphabet,
    engine::{
        DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD,
    },
};
use thiserror::Error;

/// Decoder accepting unpadded input with lenient trailing bits, matching what
/// browsers accept from relying parties.
const BASE64URL_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64url text into an owned byte buffer.
///
/// Accepts the canonical unpadded form as well as correctly padded input and
/// the standard `+`/`/` alphabet. Input whose unpadded length is `1 (mod 4)`
/// can never be produced by an encoder and is rejected, as is padding that
/// is longer than two characters or does not complete a 4-character block.
pub fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let unpadded = input.trim_end_matches('=');
    let padding = input.len() - unpadded.len();

    if padding > 0 && (padding > 2 || unpadded.is_empty() || input.len() % 4 != 0) {
        return Err(UtilError::Decode(format!(
            "Invalid base64url padding: {padding} '=' after {} characters",
            unpadded.len()
        )));
    }

    if unpadded.len() % 4 == 1 {
        return Err(UtilError::Decode(format!(
            "Impossible base64url length {} for input of {} characters",
            unpadded.len(),
            input.len()
        )));
    }

    let normalized: String = unpadded
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    BASE64URL_LENIENT
        .decode(normalized.as_bytes())
        .map_err(|e| UtilError::Decode(format!("Failed to decode base64url: {e}")))
}

/// Encode bytes as canonical base64url: URL-safe alphabet, no padding.
pub fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Decode error: {0}")]
    Decode(String),
}
