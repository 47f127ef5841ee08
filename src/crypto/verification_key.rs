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

use rsa::{pkcs1::DecodeRsaPublicKey, pkcs1v15, pkcs8::DecodePublicKey, RsaPublicKey};
use sha2::Sha256;
use signature::Verifier;
use x509_cert::der::{Decode, Encode};

use super::Signature;
use crate::{
    codec::decode_url_safe_base64,
    errors::{Result, ThumbprintBundleError},
};

const SPKI_PEM_LABEL: &str = "PUBLIC KEY";
const RSA_PUBLIC_KEY_PEM_LABEL: &str = "RSA PUBLIC KEY";
const CERTIFICATE_PEM_LABEL: &str = "CERTIFICATE";

/// The key used to verify bundle signatures.
///
/// Bundles are always signed with RSA, PKCS#1 v1.5 padding and SHA-256
/// (`RS256`); no other scheme is accepted.
#[derive(Debug, Clone)]
pub struct BundleVerificationKey {
    inner: pkcs1v15::VerifyingKey<Sha256>,
}

impl BundleVerificationKey {
    /// Builds a [`BundleVerificationKey`] from PEM-encoded data.
    ///
    /// The following PEM blocks are understood:
    /// * `PUBLIC KEY`: a SubjectPublicKeyInfo holding an RSA key
    /// * `RSA PUBLIC KEY`: a PKCS#1 RSA public key
    /// * `CERTIFICATE`: the RSA key of the certificate's subject
    ///
    /// Any failure is reported as [`ThumbprintBundleError::SignatureInvalid`],
    /// since a token cannot be verified without a usable key.
    pub fn from_pem(pem_data: &str) -> Result<Self> {
        let key_pem = pem::parse(pem_data.trim())
            .map_err(|e| invalid_key(format!("cannot parse PEM: {e}")))?;

        let public_key = match key_pem.tag() {
            SPKI_PEM_LABEL => RsaPublicKey::from_public_key_der(key_pem.contents())
                .map_err(|e| invalid_key(format!("read rsa public key from der failed: {e}")))?,
            RSA_PUBLIC_KEY_PEM_LABEL => RsaPublicKey::from_pkcs1_der(key_pem.contents())
                .map_err(|e| invalid_key(format!("read pkcs1 public key from der failed: {e}")))?,
            CERTIFICATE_PEM_LABEL => {
                let certificate = x509_cert::Certificate::from_der(key_pem.contents())
                    .map_err(|e| invalid_key(format!("cannot decode certificate: {e}")))?;
                let spki = certificate
                    .tbs_certificate
                    .subject_public_key_info
                    .to_der()
                    .map_err(|e| invalid_key(format!("cannot encode public key info: {e}")))?;
                RsaPublicKey::from_public_key_der(&spki).map_err(|e| {
                    invalid_key(format!("certificate does not hold an RSA key: {e}"))
                })?
            }
            tag => return Err(invalid_key(format!("unsupported PEM tag {tag}"))),
        };

        Ok(Self::from(public_key))
    }

    /// Verify the signature provided has been actually generated by the given key
    /// when signing the provided message.
    pub fn verify_signature(&self, signature: Signature, msg: &[u8]) -> Result<()> {
        let sig = match signature {
            Signature::Raw(data) => data.to_owned(),
            Signature::Base64UrlEncoded(data) => decode_url_safe_base64(data).map_err(|e| {
                ThumbprintBundleError::SignatureInvalid(format!("malformed signature: {e}"))
            })?,
        };

        let sig = pkcs1v15::Signature::try_from(sig.as_slice()).map_err(|e| {
            ThumbprintBundleError::SignatureInvalid(format!("malformed signature: {e}"))
        })?;
        self.inner.verify(msg, &sig).map_err(|_| {
            ThumbprintBundleError::SignatureInvalid("signature does not match".to_string())
        })
    }
}

impl From<RsaPublicKey> for BundleVerificationKey {
    fn from(public_key: RsaPublicKey) -> Self {
        Self {
            inner: pkcs1v15::VerifyingKey::new(public_key),
        }
    }
}

fn invalid_key(reason: String) -> ThumbprintBundleError {
    ThumbprintBundleError::SignatureInvalid(format!("invalid RSA public key: {reason}"))
}

#[cfg(test)]
mod tests {
    use rsa::{
        pkcs1v15::SigningKey,
        pkcs8::DecodePrivateKey,
        signature::{SignatureEncoding, Signer},
        RsaPrivateKey,
    };

    use super::*;
    use crate::crypto::tests::*;

    const MESSAGE: &[u8] = b"eyJhbGciOiJSUzI1NiJ9.eyJpc3MiOiJ0ZXN0In0";

    fn sign(msg: &[u8]) -> Vec<u8> {
        let private_key =
            RsaPrivateKey::from_pkcs8_pem(PRIVATE_KEY).expect("Cannot read fixture private key");
        SigningKey::<Sha256>::new(private_key).sign(msg).to_vec()
    }

    #[test]
    fn verify_signature_success() {
        let verification_key =
            BundleVerificationKey::from_pem(PUBLIC_KEY).expect("Cannot create verification key");
        let signature = sign(MESSAGE);

        assert!(verification_key
            .verify_signature(Signature::Raw(&signature), MESSAGE)
            .is_ok());
    }

    #[test]
    fn verify_signature_with_pkcs1_public_key() {
        let verification_key = BundleVerificationKey::from_pem(PUBLIC_KEY_PKCS1)
            .expect("Cannot create verification key");
        let signature = sign(MESSAGE);

        assert!(verification_key
            .verify_signature(Signature::Raw(&signature), MESSAGE)
            .is_ok());
    }

    #[test]
    fn verify_signature_failure_because_wrong_msg() {
        let verification_key =
            BundleVerificationKey::from_pem(PUBLIC_KEY).expect("Cannot create verification key");
        let signature = sign(MESSAGE);

        let err = verification_key
            .verify_signature(Signature::Raw(&signature), b"hello world")
            .expect_err("Was expecting an error");
        assert!(
            matches!(err, ThumbprintBundleError::SignatureInvalid(_)),
            "Didn't get expected error, got {:?} instead",
            err
        );
    }

    #[test]
    fn verify_signature_failure_because_wrong_verification_key() {
        let verification_key = BundleVerificationKey::from_pem(UNRELATED_PUBLIC_KEY)
            .expect("Cannot create verification key");
        let signature = sign(MESSAGE);

        let err = verification_key
            .verify_signature(Signature::Raw(&signature), MESSAGE)
            .expect_err("Was expecting an error");
        assert!(matches!(err, ThumbprintBundleError::SignatureInvalid(_)));
    }

    #[test]
    fn verify_signature_failure_because_signature_is_not_base64url() {
        let verification_key =
            BundleVerificationKey::from_pem(PUBLIC_KEY).expect("Cannot create verification key");

        let err = verification_key
            .verify_signature(Signature::Base64UrlEncoded("this is a signature"), MESSAGE)
            .expect_err("Was expecting an error");
        assert!(matches!(err, ThumbprintBundleError::SignatureInvalid(_)));
    }

    #[test]
    fn verify_base64url_signature() {
        let verification_key =
            BundleVerificationKey::from_pem(PUBLIC_KEY).expect("Cannot create verification key");
        let signature = crate::codec::encode_url_safe_base64(&sign(MESSAGE));

        assert!(verification_key
            .verify_signature(Signature::Base64UrlEncoded(&signature), MESSAGE)
            .is_ok());
    }

    #[test]
    fn key_can_be_read_from_certificate() {
        assert!(BundleVerificationKey::from_pem(CERT_A_PEM).is_ok());
    }

    #[test]
    fn non_rsa_or_garbage_keys_are_rejected() {
        let ec_key = r#"-----BEGIN PUBLIC KEY-----
MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAENptdY/l3nB0yqkXLBWkZWQwo6+cu
OSWS1X9vPavpiQOoTTGC0xX57OojUadxF1cdQmrsiReWg2Wn4FneJfa8xw==
-----END PUBLIC KEY-----"#;
        assert!(matches!(
            BundleVerificationKey::from_pem(ec_key),
            Err(ThumbprintBundleError::SignatureInvalid(_))
        ));
        assert!(matches!(
            BundleVerificationKey::from_pem("not a pem"),
            Err(ThumbprintBundleError::SignatureInvalid(_))
        ));
        assert!(matches!(
            BundleVerificationKey::from_pem(PRIVATE_KEY),
            Err(ThumbprintBundleError::SignatureInvalid(_))
        ));
    }
}
