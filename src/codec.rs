//
// Copyright 2026 The thumbprint-bundle Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text encodings used by bundles and certificate thumbprints.
//!
//! Bundles carry digests as unpadded base64url (`x5t`, `x5t#S256`), while
//! Windows tooling displays the same SHA-1 digest as uppercase hex. The
//! helpers in this module convert between the two.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::errors::{Result, ThumbprintBundleError};

const SHA1_DIGEST_LEN: usize = 20;
const SHA256_DIGEST_LEN: usize = 32;

/// Decodes unpadded base64url text. Padding characters and characters
/// outside of the URL-safe alphabet are rejected.
pub fn decode_url_safe_base64(text: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(text)?)
}

/// Encodes bytes as canonical, unpadded base64url.
pub fn encode_url_safe_base64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Encodes bytes as uppercase hex without separators.
pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decodes hex text, ignoring whitespace and `:` separators.
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    let normalized: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    Ok(hex::decode(normalized)?)
}

/// Converts an `x5t` value into the hex thumbprint shown by Windows
/// certificate tooling.
pub fn x5t_to_windows_thumbprint_hex(x5t: &str) -> Result<String> {
    let digest = decode_digest(x5t, SHA1_DIGEST_LEN, "x5t")?;
    Ok(hex_encode(&digest))
}

/// Converts a Windows hex thumbprint into an `x5t` value.
pub fn windows_thumbprint_hex_to_x5t(hex_value: &str) -> Result<String> {
    let digest = decode_hex_digest(hex_value, SHA1_DIGEST_LEN, "SHA-1 thumbprint")?;
    Ok(encode_url_safe_base64(&digest))
}

/// Converts an `x5t#S256` value into uppercase hex.
pub fn x5t_s256_to_hex(x5t_s256: &str) -> Result<String> {
    let digest = decode_digest(x5t_s256, SHA256_DIGEST_LEN, "x5t#S256")?;
    Ok(hex_encode(&digest))
}

/// Converts a hex SHA-256 thumbprint into an `x5t#S256` value.
pub fn hex_to_x5t_s256(hex_value: &str) -> Result<String> {
    let digest = decode_hex_digest(hex_value, SHA256_DIGEST_LEN, "SHA-256 thumbprint")?;
    Ok(encode_url_safe_base64(&digest))
}

fn decode_digest(value: &str, expected_len: usize, name: &str) -> Result<Vec<u8>> {
    let digest = decode_url_safe_base64(value).map_err(|e| {
        ThumbprintBundleError::MalformedEncoding(format!("invalid {name} value {value:?}: {e}"))
    })?;
    check_digest_len(digest, expected_len, name)
}

fn decode_hex_digest(value: &str, expected_len: usize, name: &str) -> Result<Vec<u8>> {
    let digest = hex_decode(value).map_err(|e| {
        ThumbprintBundleError::MalformedEncoding(format!("invalid {name} {value:?}: {e}"))
    })?;
    check_digest_len(digest, expected_len, name)
}

fn check_digest_len(digest: Vec<u8>, expected_len: usize, name: &str) -> Result<Vec<u8>> {
    if digest.len() != expected_len {
        return Err(ThumbprintBundleError::MalformedEncoding(format!(
            "{name} must be {expected_len} bytes, got {}",
            digest.len()
        )));
    }
    Ok(digest)
}
