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

//! The errors that can be raised by thumbprint-bundle

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThumbprintBundleError>;

/// Every way a bundle verification or a fingerprint computation can fail.
///
/// Each check reports its own variant so that callers can tell an integrity
/// failure (tampering, wrong key) apart from a lifetime failure (clock skew,
/// stale bundle).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThumbprintBundleError {
    #[error("invalid argument: {0} cannot be empty")]
    InvalidArgument(&'static str),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("token signature validation failed: {0}")]
    SignatureInvalid(String),

    #[error("invalid issuer: expected {expected:?}, got {actual:?}")]
    IssuerInvalid { expected: String, actual: String },

    #[error("invalid audience: expected {expected:?}, got {actual:?}")]
    AudienceInvalid { expected: String, actual: String },

    #[error("token expired at {expires_at}, current time is {now}")]
    TokenExpired { expires_at: i64, now: i64 },

    #[error("token is not valid before {not_before}, current time is {now}")]
    TokenNotYetValid { not_before: i64, now: i64 },

    #[error("token was issued in the future at {issued_at}, current time is {now}")]
    IssuedInFuture { issued_at: i64, now: i64 },

    #[error("certificate decoding failed: {0}")]
    CertificateDecodeError(String),
}

impl ThumbprintBundleError {
    /// The token is structurally broken, uses another algorithm, or was not
    /// signed by the supplied key.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            ThumbprintBundleError::MalformedToken(_)
                | ThumbprintBundleError::MalformedEncoding(_)
                | ThumbprintBundleError::UnsupportedAlgorithm(_)
                | ThumbprintBundleError::SignatureInvalid(_)
        )
    }

    /// The token is authentic but outside of its validity window.
    pub fn is_lifetime_failure(&self) -> bool {
        matches!(
            self,
            ThumbprintBundleError::TokenExpired { .. }
                | ThumbprintBundleError::TokenNotYetValid { .. }
                | ThumbprintBundleError::IssuedInFuture { .. }
        )
    }
}

impl From<base64::DecodeError> for ThumbprintBundleError {
    fn from(err: base64::DecodeError) -> Self {
        ThumbprintBundleError::MalformedEncoding(format!("invalid base64url: {err}"))
    }
}

impl From<hex::FromHexError> for ThumbprintBundleError {
    fn from(err: hex::FromHexError) -> Self {
        ThumbprintBundleError::MalformedEncoding(format!("invalid hex: {err}"))
    }
}
