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

//! Compact `header.payload.signature` tokens.

use super::models::{Claims, TokenHeader};
use crate::{
    codec::decode_url_safe_base64,
    errors::{Result, ThumbprintBundleError},
};

/// A bundle token split into its three base64url segments.
///
/// Nothing in here is trusted: the segments are only borrowed views of the
/// input text until the signature over [`CompactToken::signing_input`] has
/// been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactToken<'a> {
    text: &'a str,
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> CompactToken<'a> {
    pub fn parse(text: &'a str) -> Result<Self> {
        let segments: Vec<&str> = text.split('.').collect();
        let &[header, payload, signature] = segments.as_slice() else {
            return Err(ThumbprintBundleError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        Ok(Self {
            text,
            header,
            payload,
            signature,
        })
    }

    /// The literal `header.payload` text the signature was computed over.
    pub fn signing_input(&self) -> &'a str {
        &self.text[..self.header.len() + 1 + self.payload.len()]
    }

    pub fn signature(&self) -> &'a str {
        self.signature
    }

    pub fn header(&self) -> Result<TokenHeader> {
        let json = decode_url_safe_base64(self.header).map_err(|e| {
            ThumbprintBundleError::MalformedEncoding(format!("token header: {e}"))
        })?;
        TokenHeader::from_json_slice(&json)
    }

    pub fn claims(&self) -> Result<Claims> {
        let json = decode_url_safe_base64(self.payload).map_err(|e| {
            ThumbprintBundleError::MalformedEncoding(format!("token payload: {e}"))
        })?;
        Claims::from_json_slice(&json)
    }
}
