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

//! Issuer, audience and lifetime constraints on bundle claims.

use crate::{
    bundle::Claims,
    errors::{Result, ThumbprintBundleError},
};

/// Tolerance for clock drift between the bundle issuer and the verifier.
pub const DEFAULT_CLOCK_SKEW_SECONDS: u64 = 120;

/// The expectations a bundle's claims must meet.
///
/// Checks run in a fixed order (issuer, audience, expiry, not-before,
/// issued-at) and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimsPolicy<'a> {
    issuer: &'a str,
    audience: &'a str,
    clock_skew_seconds: u64,
}

impl<'a> ClaimsPolicy<'a> {
    pub fn new(issuer: &'a str, audience: &'a str) -> Self {
        Self {
            issuer,
            audience,
            clock_skew_seconds: DEFAULT_CLOCK_SKEW_SECONDS,
        }
    }

    pub fn with_clock_skew(mut self, clock_skew_seconds: u64) -> Self {
        self.clock_skew_seconds = clock_skew_seconds;
        self
    }

    /// Checks `claims` against this policy at `now` (seconds since the
    /// epoch), handing the claims back unchanged on success.
    pub fn check(&self, claims: Claims, now: i64) -> Result<Claims> {
        if claims.issuer != self.issuer {
            return Err(ThumbprintBundleError::IssuerInvalid {
                expected: self.issuer.to_owned(),
                actual: claims.issuer,
            });
        }

        if claims.audience != self.audience {
            return Err(ThumbprintBundleError::AudienceInvalid {
                expected: self.audience.to_owned(),
                actual: claims.audience,
            });
        }

        let skew = i64::try_from(self.clock_skew_seconds).unwrap_or(i64::MAX);
        let earliest = now.saturating_sub(skew);
        let latest = now.saturating_add(skew);

        if claims.expires_at <= earliest {
            return Err(ThumbprintBundleError::TokenExpired {
                expires_at: claims.expires_at,
                now,
            });
        }

        if claims.not_before > latest {
            return Err(ThumbprintBundleError::TokenNotYetValid {
                not_before: claims.not_before,
                now,
            });
        }

        if claims.issued_at > latest {
            return Err(ThumbprintBundleError::IssuedInFuture {
                issued_at: claims.issued_at,
                now,
            });
        }

        Ok(claims)
    }
}

/// Checks `claims` with the default clock skew.
pub fn check_policy(
    claims: Claims,
    expected_issuer: &str,
    expected_audience: &str,
    now: i64,
) -> Result<Claims> {
    ClaimsPolicy::new(expected_issuer, expected_audience).check(claims, now)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ISSUER: &str = "https://issuer.example";
    const AUDIENCE: &str = "urn:example:clients";
    const NOW: i64 = 1_800_000_000;

    fn claims() -> Claims {
        Claims {
            issuer: ISSUER.to_string(),
            audience: AUDIENCE.to_string(),
            issued_at: NOW - 3600,
            not_before: NOW - 3600,
            expires_at: NOW + 3600,
            version: "1.0.0".to_string(),
            fingerprints: vec![],
        }
    }

    #[test]
    fn valid_claims_pass_through_unchanged() {
        assert_eq!(check_policy(claims(), ISSUER, AUDIENCE, NOW).unwrap(), claims());
    }

    #[rstest]
    #[case::expired_long_ago(-121, false)]
    #[case::expired_exactly_at_skew(-120, false)]
    #[case::expired_inside_skew(-119, true)]
    #[case::expires_now(0, true)]
    fn expiry_honours_clock_skew(#[case] offset: i64, #[case] valid: bool) {
        let claims = Claims {
            expires_at: NOW + offset,
            ..claims()
        };
        let result = check_policy(claims, ISSUER, AUDIENCE, NOW);
        if valid {
            assert!(result.is_ok(), "unexpected error {result:?}");
        } else {
            assert_eq!(
                result,
                Err(ThumbprintBundleError::TokenExpired {
                    expires_at: NOW + offset,
                    now: NOW
                })
            );
        }
    }

    #[rstest]
    #[case::inside_skew(120, true)]
    #[case::past_skew(121, false)]
    fn not_before_honours_clock_skew(#[case] offset: i64, #[case] valid: bool) {
        let claims = Claims {
            not_before: NOW + offset,
            ..claims()
        };
        let result = check_policy(claims, ISSUER, AUDIENCE, NOW);
        assert_eq!(result.is_ok(), valid);
        if !valid {
            assert!(matches!(
                result,
                Err(ThumbprintBundleError::TokenNotYetValid { .. })
            ));
        }
    }

    #[rstest]
    #[case::inside_skew(120, true)]
    #[case::past_skew(121, false)]
    fn issued_at_honours_clock_skew(#[case] offset: i64, #[case] valid: bool) {
        let claims = Claims {
            issued_at: NOW + offset,
            ..claims()
        };
        let result = check_policy(claims, ISSUER, AUDIENCE, NOW);
        assert_eq!(result.is_ok(), valid);
        if !valid {
            assert!(matches!(
                result,
                Err(ThumbprintBundleError::IssuedInFuture { .. })
            ));
        }
    }

    #[test]
    fn issuer_and_audience_compare_exactly() {
        let err = check_policy(claims(), &ISSUER.to_uppercase(), AUDIENCE, NOW)
            .expect_err("Was expecting an error");
        assert!(matches!(err, ThumbprintBundleError::IssuerInvalid { .. }));

        let err = check_policy(claims(), ISSUER, "urn:example:clients ", NOW)
            .expect_err("Was expecting an error");
        assert_eq!(
            err,
            ThumbprintBundleError::AudienceInvalid {
                expected: "urn:example:clients ".to_string(),
                actual: AUDIENCE.to_string(),
            }
        );
    }

    #[test]
    fn first_failing_check_is_reported() {
        // every check fails: the issuer wins
        let broken = Claims {
            issuer: "someone else".to_string(),
            audience: "someone else".to_string(),
            issued_at: NOW + 9999,
            not_before: NOW + 9999,
            expires_at: NOW - 9999,
            ..claims()
        };
        assert!(matches!(
            check_policy(broken.clone(), ISSUER, AUDIENCE, NOW),
            Err(ThumbprintBundleError::IssuerInvalid { .. })
        ));

        // expiry is checked before not-before and issued-at
        let broken = Claims {
            issuer: ISSUER.to_string(),
            audience: AUDIENCE.to_string(),
            ..broken
        };
        assert!(matches!(
            check_policy(broken.clone(), ISSUER, AUDIENCE, NOW),
            Err(ThumbprintBundleError::TokenExpired { .. })
        ));

        let broken = Claims {
            expires_at: NOW + 3600,
            ..broken
        };
        assert!(matches!(
            check_policy(broken, ISSUER, AUDIENCE, NOW),
            Err(ThumbprintBundleError::TokenNotYetValid { .. })
        ));
    }

    #[test]
    fn missing_expiry_counts_as_expired() {
        let claims = Claims {
            expires_at: 0,
            ..claims()
        };
        assert!(matches!(
            check_policy(claims, ISSUER, AUDIENCE, NOW),
            Err(ThumbprintBundleError::TokenExpired { expires_at: 0, .. })
        ));
    }

    #[test]
    fn clock_skew_is_configurable() {
        let claims = Claims {
            expires_at: NOW - 30,
            ..claims()
        };
        let strict = ClaimsPolicy::new(ISSUER, AUDIENCE).with_clock_skew(0);
        assert!(strict.check(claims.clone(), NOW).is_err());

        let lenient = ClaimsPolicy::new(ISSUER, AUDIENCE).with_clock_skew(60);
        assert!(lenient.check(claims, NOW).is_ok());
    }

    #[rstest]
    #[case::zero(0, false)]
    #[case::default(DEFAULT_CLOCK_SKEW_SECONDS, true)]
    #[case::beyond_i64(u64::MAX, true)]
    fn skew_only_ever_widens_the_window(#[case] skew: u64, #[case] valid: bool) {
        // expired a minute ago, not valid for another minute
        let claims = Claims {
            issued_at: NOW + 60,
            not_before: NOW + 60,
            expires_at: NOW - 60,
            ..claims()
        };
        let result = ClaimsPolicy::new(ISSUER, AUDIENCE)
            .with_clock_skew(skew)
            .check(claims, NOW);
        assert_eq!(result.is_ok(), valid, "unexpected result {result:?}");
    }

    #[test]
    fn tokens_inside_their_lifetime_pass_without_skew() {
        let claims = Claims {
            issued_at: 0,
            not_before: 0,
            expires_at: 1000,
            ..claims()
        };
        let strict = ClaimsPolicy::new(ISSUER, AUDIENCE).with_clock_skew(0);
        for now in [0, 500, 999] {
            assert!(strict.check(claims.clone(), now).is_ok(), "rejected at {now}");
        }
        assert!(matches!(
            strict.check(claims, 1000),
            Err(ThumbprintBundleError::TokenExpired { .. })
        ));
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let far_future = Claims {
            expires_at: i64::MAX,
            ..claims()
        };
        assert!(check_policy(far_future, ISSUER, AUDIENCE, i64::MAX).is_ok());

        let far_past = Claims {
            issued_at: i64::MIN,
            not_before: i64::MIN,
            expires_at: i64::MIN,
            ..claims()
        };
        assert!(matches!(
            check_policy(far_past, ISSUER, AUDIENCE, i64::MIN),
            Err(ThumbprintBundleError::TokenExpired { .. })
        ));
    }
}
