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

//! thumbprint-bundle CLI - verify thumbprint bundles and fingerprint certificates
//!
//! Set `RUST_LOG=thumbprint_bundle=debug` to trace the verification stages.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thumbprint_bundle::{
    bundle::{
        is_allowed, BundleVerifier, VerifiedClaims, VerifierConfig, DEFAULT_CLOCK_SKEW_SECONDS,
    },
    codec,
    crypto::{certificate_der, CertificateFingerprint},
    DEFAULT_AUDIENCE, DEFAULT_ISSUER,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "thumbprint-bundle")]
#[command(about = "Verify signed code-signing thumbprint bundles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a bundle, then check certificates against it
    Verify {
        #[command(flatten)]
        bundle: BundleArgs,

        /// Fail unless every certificate is allowed
        #[arg(long)]
        require_all: bool,

        /// Certificates to check, DER or PEM encoded
        certificates: Vec<PathBuf>,
    },
    /// Verify a bundle and print its claims as JSON
    Inspect {
        #[command(flatten)]
        bundle: BundleArgs,
    },
    /// Print the fingerprints of a certificate
    Thumbprint {
        /// Certificate, DER or PEM encoded
        certificate: PathBuf,
    },
    /// Convert between thumbprint renderings
    Convert {
        #[arg(value_enum)]
        conversion: Conversion,

        value: String,
    },
}

#[derive(Args)]
struct BundleArgs {
    /// Path to the signed bundle token
    #[arg(long)]
    bundle: PathBuf,

    /// Path to the PEM encoded bundle signing public key
    #[arg(long)]
    public_key: PathBuf,

    /// Expected `iss` claim
    #[arg(long, env = "THUMBPRINT_BUNDLE_ISSUER", default_value = DEFAULT_ISSUER)]
    issuer: String,

    /// Expected `aud` claim
    #[arg(long, env = "THUMBPRINT_BUNDLE_AUDIENCE", default_value = DEFAULT_AUDIENCE)]
    audience: String,

    /// Tolerated clock drift, in seconds
    #[arg(long, env = "THUMBPRINT_BUNDLE_CLOCK_SKEW", default_value_t = DEFAULT_CLOCK_SKEW_SECONDS)]
    clock_skew: u64,
}

impl BundleArgs {
    fn verify(&self) -> Result<VerifiedClaims> {
        let token = fs::read_to_string(&self.bundle)
            .with_context(|| format!("Cannot read bundle {}", self.bundle.display()))?;
        let public_key = fs::read_to_string(&self.public_key)
            .with_context(|| format!("Cannot read public key {}", self.public_key.display()))?;

        let config = VerifierConfig::default()
            .with_issuer(self.issuer.as_str())
            .with_audience(self.audience.as_str())
            .with_clock_skew(self.clock_skew);
        BundleVerifier::new(config)
            .verify(&token, &public_key)
            .with_context(|| format!("Bundle {} rejected", self.bundle.display()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Conversion {
    X5tToHex,
    HexToX5t,
    X5tS256ToHex,
    HexToX5tS256,
}

fn main() -> Result<ExitCode> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify {
            bundle,
            require_all,
            certificates,
        } => verify(&bundle, require_all, &certificates),
        Commands::Inspect { bundle } => {
            let claims = bundle.verify()?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Thumbprint { certificate } => {
            let fingerprint = CertificateFingerprint::from_der(&read_certificate(&certificate)?)?;
            println!("x5t:        {}", fingerprint.x5t());
            println!("x5t#S256:   {}", fingerprint.x5t_s256());
            println!("thumbprint: {}", fingerprint.hex_thumbprint());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Convert { conversion, value } => {
            let converted = match conversion {
                Conversion::X5tToHex => codec::x5t_to_windows_thumbprint_hex(&value),
                Conversion::HexToX5t => codec::windows_thumbprint_hex_to_x5t(&value),
                Conversion::X5tS256ToHex => codec::x5t_s256_to_hex(&value),
                Conversion::HexToX5tS256 => codec::hex_to_x5t_s256(&value),
            }?;
            println!("{converted}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn verify(bundle: &BundleArgs, require_all: bool, certificates: &[PathBuf]) -> Result<ExitCode> {
    let claims = bundle.verify()?;
    println!(
        "Bundle verified. version={}, entries={}",
        claims.version,
        claims.fingerprints.len()
    );

    let mut tally = Tally::default();
    for path in certificates {
        let der = read_certificate(path)?;
        let allowed = is_allowed(&der, &claims)
            .with_context(|| format!("Cannot fingerprint {}", path.display()))?;
        tally.record(allowed);

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        println!("  {}: {}", name, Tally::label(allowed));
    }

    if !tally.passes(require_all) {
        eprintln!(
            "Error: {} of {} certificates are not listed in the bundle",
            tally.blocked,
            tally.allowed + tally.blocked
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Allow-list decisions of a `verify` run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    allowed: usize,
    blocked: usize,
}

impl Tally {
    fn record(&mut self, allowed: bool) {
        if allowed {
            self.allowed += 1;
        } else {
            self.blocked += 1;
        }
    }

    fn label(allowed: bool) -> &'static str {
        if allowed {
            "ALLOWED"
        } else {
            "BLOCKED"
        }
    }

    /// Blocked certificates only fail the run when `--require-all` is given.
    fn passes(&self, require_all: bool) -> bool {
        !require_all || self.blocked == 0
    }
}

fn read_certificate(path: &Path) -> Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("Cannot read certificate {}", path.display()))?;
    certificate_der(&data).with_context(|| format!("Invalid certificate {}", path.display()))
}
