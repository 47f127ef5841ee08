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

//! Verification of signed code-signing thumbprint bundles.
//!
//! A publisher distributes the fingerprints of the certificates it signs its
//! software with as a signed token. Update clients verify the token against
//! a pinned RSA public key and only then consult the listed fingerprints to
//! decide whether a downloaded binary's signing certificate is trusted.
//!
//! # Verifying a bundle
//!
//! ```rust,no_run
//! use thumbprint_bundle::{bundle::BundleVerifier, crypto::certificate_der};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let token = std::fs::read_to_string("thumbprints.bundle.jwt")?;
//! let public_key = std::fs::read_to_string("bundle-signing-public.pem")?;
//!
//! let claims = BundleVerifier::default().verify(&token, &public_key)?;
//!
//! let certificate = certificate_der(&std::fs::read("codesign.crt")?)?;
//! if thumbprint_bundle::bundle::is_allowed(&certificate, &claims)? {
//!     println!("certificate is trusted by bundle {}", claims.version);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every failure is reported as a distinct
//! [`ThumbprintBundleError`](errors::ThumbprintBundleError) variant, so that
//! callers can tell a tampered bundle apart from a stale one.
//!
//! # Fingerprints
//!
//! The [`crypto`] module computes the `x5t`, `x5t#S256` and Windows hex
//! thumbprint of a certificate; [`codec`] converts between these
//! renderings.

pub mod bundle;
pub mod codec;
pub mod crypto;
pub mod errors;

/// Issuer of the bundles published for update clients.
pub const DEFAULT_ISSUER: &str = "https://devolutions.net/productinfo/codesign-thumbprints";

/// Audience of the bundles published for update clients.
pub const DEFAULT_AUDIENCE: &str = "urn:devolutions:update-clients";

/// The only accepted value of the token header's `alg` member.
pub const SUPPORTED_ALGORITHM: &str = "RS256";
