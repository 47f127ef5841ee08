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

//! Matching certificates against the fingerprints of a verified bundle.

use tracing::debug;

use super::models::{FingerprintRecord, VerifiedClaims};
use crate::{crypto::CertificateFingerprint, errors::Result};

impl FingerprintRecord {
    /// Whether this entry designates the certificate with the given
    /// fingerprint.
    ///
    /// Legacy entries are compared without regard to hex case. Dual entries
    /// must match on both digests: a matching `x5t` alone is not enough.
    pub fn matches(&self, fingerprint: &CertificateFingerprint) -> bool {
        match self {
            FingerprintRecord::Legacy(thumbprint) => {
                thumbprint.to_ascii_uppercase() == fingerprint.hex_thumbprint()
            }
            FingerprintRecord::Dual { x5t, x5t_s256 } => {
                *x5t == fingerprint.x5t() && *x5t_s256 == fingerprint.x5t_s256()
            }
        }
    }
}

impl VerifiedClaims {
    /// Whether any listed entry matches `fingerprint`.
    pub fn allows(&self, fingerprint: &CertificateFingerprint) -> bool {
        self.fingerprints
            .iter()
            .any(|record| record.matches(fingerprint))
    }
}

/// Checks whether the DER-encoded certificate is listed in a verified bundle.
///
/// Fails only when the certificate cannot be decoded; an unlisted
/// certificate yields `Ok(false)`.
pub fn is_allowed(certificate_der: &[u8], claims: &VerifiedClaims) -> Result<bool> {
    let fingerprint = CertificateFingerprint::from_der(certificate_der)?;
    let allowed = claims.allows(&fingerprint);
    debug!(
        x5t = %fingerprint.x5t(),
        x5t_s256 = %fingerprint.x5t_s256(),
        allowed,
        "checked certificate against bundle"
    );
    Ok(allowed)
}
