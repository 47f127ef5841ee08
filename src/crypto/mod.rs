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

//! Structures required to verify bundle signatures and to fingerprint
//! certificates.

pub use certificate::certificate_der;
pub use fingerprint::{
    compute_hex_thumbprint, compute_x5t, compute_x5t_s256, sha1_digest_of, sha256_digest_of,
    CertificateFingerprint,
};
pub use verification_key::BundleVerificationKey;

/// A signature produced by the bundle signing key
pub enum Signature<'a> {
    /// Raw signature. There's no need to process the contents
    Raw(&'a [u8]),
    /// A base64url encoded signature, as found in the third token segment
    Base64UrlEncoded(&'a str),
}

pub mod certificate;
pub mod fingerprint;
pub mod verification_key;
