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

use chrono::Utc;
use tracing::debug;

use super::VerifierConfig;
use crate::{
    bundle::{CompactToken, VerifiedClaims},
    crypto::{BundleVerificationKey, Signature},
    errors::{Result, ThumbprintBundleError},
    SUPPORTED_ALGORITHM,
};

/// A synchronous thumbprint bundle verifier.
///
/// The verifier holds no state besides its configuration and can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct BundleVerifier {
    config: VerifierConfig,
}

impl BundleVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verifies `token` against the PEM-encoded `public_key_pem`, using the
    /// current time for the lifetime checks.
    pub fn verify(&self, token: &str, public_key_pem: &str) -> Result<VerifiedClaims> {
        self.verify_at(token, public_key_pem, Utc::now().timestamp())
    }

    /// Verifies `token` as of `now`, in seconds since the epoch.
    pub fn verify_at(&self, token: &str, public_key_pem: &str, now: i64) -> Result<VerifiedClaims> {
        if token.trim().is_empty() {
            return Err(ThumbprintBundleError::InvalidArgument("token"));
        }
        if public_key_pem.trim().is_empty() {
            return Err(ThumbprintBundleError::InvalidArgument("public key PEM"));
        }

        // In order to trust the listed thumbprints, we need to achieve the following:
        //
        // 1) Make sure the token was produced with the only supported algorithm,
        //    before any key material is involved.
        // 2) Verify the signature over the literal `header.payload` text.
        // 3) Check issuer, audience and the validity window of the claims.
        let token = CompactToken::parse(token.trim())?;

        // 1) Algorithm
        let header = token.header()?;
        match header.alg.as_deref() {
            Some(SUPPORTED_ALGORITHM) => debug!("token header declares {SUPPORTED_ALGORITHM}"),
            Some(other) => {
                return Err(ThumbprintBundleError::UnsupportedAlgorithm(other.to_owned()))
            }
            None => {
                return Err(ThumbprintBundleError::UnsupportedAlgorithm(
                    "<missing>".to_owned(),
                ))
            }
        }

        // 2) Signature
        let verification_key = BundleVerificationKey::from_pem(public_key_pem)?;
        verification_key.verify_signature(
            Signature::Base64UrlEncoded(token.signature()),
            token.signing_input().as_bytes(),
        )?;
        debug!("signature corresponds to public key");

        // 3) Policy
        let claims = self.config.policy().check(token.claims()?, now)?;
        debug!(
            version = %claims.version,
            entries = claims.fingerprints.len(),
            "bundle claims conform to policy"
        );

        Ok(VerifiedClaims::new(claims))
    }
}

/// Verifies `token` against `public_key_pem`, expecting the given issuer and
/// audience, with the default clock skew and the current time.
pub fn verify(
    token: &str,
    public_key_pem: &str,
    expected_issuer: &str,
    expected_audience: &str,
) -> Result<VerifiedClaims> {
    let config = VerifierConfig::default()
        .with_issuer(expected_issuer)
        .with_audience(expected_audience);
    BundleVerifier::new(config).verify(token, public_key_pem)
}
