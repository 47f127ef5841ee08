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

//! Verifier for thumbprint bundles.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_AUDIENCE, DEFAULT_ISSUER};

pub mod policy;
pub use policy::{check_policy, ClaimsPolicy, DEFAULT_CLOCK_SKEW_SECONDS};

mod verifier;
pub use verifier::{verify, BundleVerifier};

/// Expected values for the policy checks of a [`BundleVerifier`].
///
/// The defaults are the values existing bundles are issued with; every
/// member may be omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub issuer: String,
    pub audience: String,
    pub clock_skew_seconds: u64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            clock_skew_seconds: DEFAULT_CLOCK_SKEW_SECONDS,
        }
    }
}

impl VerifierConfig {
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_clock_skew(mut self, clock_skew_seconds: u64) -> Self {
        self.clock_skew_seconds = clock_skew_seconds;
        self
    }

    pub fn policy(&self) -> ClaimsPolicy<'_> {
        ClaimsPolicy::new(&self.issuer, &self.audience).with_clock_skew(self.clock_skew_seconds)
    }
}
