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

//! Thumbprint bundles: signed lists of trusted code-signing certificates.
//!
//! A bundle is a compact `header.payload.signature` token signed with
//! RSASSA-PKCS1-v1_5 over SHA-256. Its payload lists certificate
//! fingerprints in one of two shapes, see [`FingerprintRecord`].

pub mod allow_list;
pub use allow_list::is_allowed;

pub mod models;
pub use models::{Claims, FingerprintRecord, FingerprintSchema, TokenHeader, VerifiedClaims};

pub mod token;
pub use token::CompactToken;

pub mod verify;
pub use verify::{
    check_policy, verify, BundleVerifier, ClaimsPolicy, VerifierConfig,
    DEFAULT_CLOCK_SKEW_SECONDS,
};
