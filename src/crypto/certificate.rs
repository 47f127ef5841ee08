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

use x509_cert::{der::Decode, Certificate};

use crate::errors::{Result, ThumbprintBundleError};

const CERTIFICATE_PEM_LABEL: &str = "CERTIFICATE";
const PEM_PREAMBLE: &[u8] = b"-----BEGIN";

/// Decodes DER bytes into an X.509 certificate.
pub(crate) fn decode_certificate(der: &[u8]) -> Result<Certificate> {
    Certificate::from_der(der)
        .map_err(|e| ThumbprintBundleError::CertificateDecodeError(e.to_string()))
}

/// Returns the DER encoding of a certificate given either as DER or as a PEM
/// `CERTIFICATE` block.
///
/// `.crt` files are found in both forms in the wild, while fingerprints are
/// always defined over DER.
pub fn certificate_der(data: &[u8]) -> Result<Vec<u8>> {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());

    let der = if data[start..].starts_with(PEM_PREAMBLE) {
        let cert_pem = pem::parse(data)
            .map_err(|e| ThumbprintBundleError::CertificateDecodeError(e.to_string()))?;
        if cert_pem.tag() != CERTIFICATE_PEM_LABEL {
            return Err(ThumbprintBundleError::CertificateDecodeError(format!(
                "unexpected PEM tag {}",
                cert_pem.tag()
            )));
        }
        cert_pem.into_contents()
    } else {
        data.to_vec()
    };

    decode_certificate(&der)?;
    Ok(der)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::tests::*;

    #[test]
    fn der_input_is_returned_unchanged() {
        assert_eq!(certificate_der(CERT_A).unwrap(), CERT_A);
    }

    #[test]
    fn pem_input_is_converted_to_der() {
        assert_eq!(certificate_der(CERT_A_PEM.as_bytes()).unwrap(), CERT_A);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = certificate_der(b"definitely not a certificate")
            .expect_err("Was expecting an error");
        assert!(matches!(err, ThumbprintBundleError::CertificateDecodeError(_)));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut der = CERT_A.to_vec();
        der.push(0);
        assert!(matches!(
            certificate_der(&der),
            Err(ThumbprintBundleError::CertificateDecodeError(_))
        ));
    }

    #[test]
    fn other_pem_blocks_are_rejected() {
        assert!(matches!(
            certificate_der(PUBLIC_KEY.as_bytes()),
            Err(ThumbprintBundleError::CertificateDecodeError(_))
        ));
    }
}
