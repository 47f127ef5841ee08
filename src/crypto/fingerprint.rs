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

//! Certificate fingerprints.
//!
//! A fingerprint is a digest of the certificate's DER encoding. Two
//! renderings are in use:
//! * `x5t` / `x5t#S256`: base64url of the SHA-1 / SHA-256 digest
//!   ([RFC 7515](https://www.rfc-editor.org/rfc/rfc7515#section-4.1.7))
//! * the Windows thumbprint: uppercase hex of the SHA-1 digest

use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::certificate::decode_certificate;
use crate::{
    bundle::FingerprintRecord,
    codec::{encode_url_safe_base64, hex_encode},
    errors::Result,
};

/// SHA-1 and SHA-256 digests of a single certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFingerprint {
    sha1: [u8; 20],
    sha256: [u8; 32],
}

impl CertificateFingerprint {
    /// Hashes a DER-encoded certificate. The input must decode as an X.509
    /// certificate.
    pub fn from_der(certificate_der: &[u8]) -> Result<Self> {
        decode_certificate(certificate_der)?;

        Ok(Self {
            sha1: Sha1::digest(certificate_der).into(),
            sha256: Sha256::digest(certificate_der).into(),
        })
    }

    pub fn sha1(&self) -> &[u8; 20] {
        &self.sha1
    }

    pub fn sha256(&self) -> &[u8; 32] {
        &self.sha256
    }

    pub fn x5t(&self) -> String {
        encode_url_safe_base64(&self.sha1)
    }

    pub fn x5t_s256(&self) -> String {
        encode_url_safe_base64(&self.sha256)
    }

    /// Uppercase hex SHA-1 digest, as displayed by Windows.
    pub fn hex_thumbprint(&self) -> String {
        hex_encode(&self.sha1)
    }

    /// The bundle entry that allows this certificate under the current schema.
    pub fn to_record(&self) -> FingerprintRecord {
        FingerprintRecord::Dual {
            x5t: self.x5t(),
            x5t_s256: self.x5t_s256(),
        }
    }
}

pub fn sha1_digest_of(certificate_der: &[u8]) -> Result<[u8; 20]> {
    Ok(*CertificateFingerprint::from_der(certificate_der)?.sha1())
}

pub fn sha256_digest_of(certificate_der: &[u8]) -> Result<[u8; 32]> {
    Ok(*CertificateFingerprint::from_der(certificate_der)?.sha256())
}

/// base64url(SHA-1(DER))
pub fn compute_x5t(certificate_der: &[u8]) -> Result<String> {
    Ok(CertificateFingerprint::from_der(certificate_der)?.x5t())
}

/// base64url(SHA-256(DER))
pub fn compute_x5t_s256(certificate_der: &[u8]) -> Result<String> {
    Ok(CertificateFingerprint::from_der(certificate_der)?.x5t_s256())
}

/// hex(SHA-1(DER)), uppercase
pub fn compute_hex_thumbprint(certificate_der: &[u8]) -> Result<String> {
    Ok(CertificateFingerprint::from_der(certificate_der)?.hex_thumbprint())
}
