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

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ThumbprintBundleError};

/// The decoded first segment of a bundle token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHeader {
    /// `None` when the header has no `alg` member or it is not a string.
    pub alg: Option<String>,
    pub typ: Option<String>,
    pub raw: Value,
}

impl TokenHeader {
    pub(crate) fn from_json_slice(json: &[u8]) -> Result<Self> {
        let raw: Value = serde_json::from_slice(json).map_err(|e| {
            ThumbprintBundleError::MalformedToken(format!("header is not valid JSON: {e}"))
        })?;
        if !raw.is_object() {
            return Err(ThumbprintBundleError::MalformedToken(
                "header is not a JSON object".to_string(),
            ));
        }

        let member = |name: &str| raw.get(name).and_then(Value::as_str).map(str::to_owned);
        Ok(Self {
            alg: member("alg"),
            typ: member("typ"),
            raw,
        })
    }
}

/// One trusted certificate, as listed in the `thumbprints` claim.
///
/// The shape of the JSON entry selects the variant: a string is a legacy
/// hex SHA-1 thumbprint, an object carries both `x5t` and `x5t#S256`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FingerprintRecord {
    Legacy(String),
    Dual {
        #[serde(default)]
        x5t: String,
        #[serde(default, rename(serialize = "x5t#S256", deserialize = "x5t#s256"))]
        x5t_s256: String,
    },
}

/// Schema generation of a [`FingerprintRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintSchema {
    /// Uppercase hex SHA-1 thumbprints
    Legacy,
    /// `x5t` + `x5t#S256` pairs
    Dual,
}

impl std::fmt::Display for FingerprintSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FingerprintSchema::Legacy => write!(f, "legacy"),
            FingerprintSchema::Dual => write!(f, "dual"),
        }
    }
}

impl FingerprintRecord {
    pub fn schema(&self) -> FingerprintSchema {
        match self {
            FingerprintRecord::Legacy(_) => FingerprintSchema::Legacy,
            FingerprintRecord::Dual { .. } => FingerprintSchema::Dual,
        }
    }
}

/// The payload of a thumbprint bundle.
///
/// Parsing is lenient: members that are absent take their zero value, so a
/// bundle without `exp` is treated as expired at the epoch rather than
/// rejected during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "aud")]
    pub audience: String,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "nbf")]
    pub not_before: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(rename = "ver")]
    pub version: String,
    #[serde(rename = "thumbprints")]
    pub fingerprints: Vec<FingerprintRecord>,
}

impl Claims {
    /// Parses a payload, matching member names without regard to case.
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        let payload: Value = serde_json::from_slice(json).map_err(|e| {
            ThumbprintBundleError::MalformedToken(format!("payload is not valid JSON: {e}"))
        })?;
        if !payload.is_object() {
            return Err(ThumbprintBundleError::MalformedToken(
                "payload is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(lowercase_keys(payload)).map_err(|e| {
            ThumbprintBundleError::MalformedToken(format!("unexpected payload content: {e}"))
        })
    }

    /// The schema shared by every listed fingerprint, `None` when the list
    /// is empty or mixes both shapes.
    pub fn schema(&self) -> Option<FingerprintSchema> {
        let mut schemas = self.fingerprints.iter().map(FingerprintRecord::schema);
        let first = schemas.next()?;
        schemas.all(|schema| schema == first).then_some(first)
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(name, member)| (name.to_lowercase(), lowercase_keys(member)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

/// [`Claims`] that passed the signature check and every policy check.
///
/// Only the verifier can build this type, which keeps unverified claims away
/// from the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerifiedClaims(Claims);

impl VerifiedClaims {
    pub(crate) fn new(claims: Claims) -> Self {
        Self(claims)
    }

    pub fn claims(&self) -> &Claims {
        &self.0
    }

    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl Deref for VerifiedClaims {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
