//! Git SSH keypair generation.
//!
//! Generates the per-user SSH keypairs workspaces use to authenticate
//! outbound git operations. The private half is encoded in OpenSSH private
//! key format and the public half in the single-line `authorized_keys`
//! form, so both can be dropped into a workspace unchanged.
//!
//! # Examples
//!
//! ```
//! use workbridge_common::sshkey::{SshKeygenAlgorithm, generate_ssh_keypair};
//!
//! let keypair = generate_ssh_keypair(SshKeygenAlgorithm::Ed25519)
//!     .expect("Failed to generate keypair");
//!
//! assert!(keypair.private_key.contains("OPENSSH PRIVATE KEY"));
//! assert!(keypair.public_key.starts_with("ssh-ed25519 "));
//! ```

use serde::Deserialize;
use ssh_key::{
    Algorithm, EcdsaCurve, LineEnding, PrivateKey,
    private::{EcdsaKeypair, KeypairData, RsaKeypair},
};

use crate::{AppError, AppResult};

/// RSA key size in bits for [`SshKeygenAlgorithm::Rsa4096`].
const RSA_KEY_SIZE: usize = 4096;

/// Signature algorithm used when generating a git SSH keypair.
///
/// Fixed per deployment via [`crate::config::SshKeygenConfig`]; there is
/// no fallback between algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SshKeygenAlgorithm {
    /// Ed25519 (default).
    #[default]
    Ed25519,
    /// ECDSA over NIST P-256.
    Ecdsa,
    /// 4096-bit RSA.
    Rsa4096,
}

/// A freshly generated git SSH keypair.
///
/// Both halves are populated on every successful generation; there is no
/// partially-generated state.
#[derive(Debug, Clone)]
pub struct SshKeypair {
    /// Private key in OpenSSH private key format (PEM).
    pub private_key: String,
    /// Public key in `authorized_keys` format.
    pub public_key: String,
}

/// Generate a new git SSH keypair with the given algorithm.
///
/// # Errors
///
/// Returns [`AppError::KeyGeneration`] if the underlying key generation or
/// OpenSSH encoding fails. The error detail never contains key material.
pub fn generate_ssh_keypair(algorithm: SshKeygenAlgorithm) -> AppResult<SshKeypair> {
    let mut rng = rand::thread_rng();

    let key = match algorithm {
        SshKeygenAlgorithm::Ed25519 => PrivateKey::random(&mut rng, Algorithm::Ed25519)
            .map_err(|e| AppError::KeyGeneration(format!("Failed to generate ed25519 key: {e}")))?,
        SshKeygenAlgorithm::Ecdsa => {
            let keypair = EcdsaKeypair::random(&mut rng, EcdsaCurve::NistP256).map_err(|e| {
                AppError::KeyGeneration(format!("Failed to generate ecdsa key: {e}"))
            })?;
            PrivateKey::new(KeypairData::from(keypair), "").map_err(|e| {
                AppError::KeyGeneration(format!("Failed to assemble ecdsa key: {e}"))
            })?
        }
        SshKeygenAlgorithm::Rsa4096 => {
            let keypair = RsaKeypair::random(&mut rng, RSA_KEY_SIZE).map_err(|e| {
                AppError::KeyGeneration(format!("Failed to generate rsa key: {e}"))
            })?;
            PrivateKey::new(KeypairData::from(keypair), "")
                .map_err(|e| AppError::KeyGeneration(format!("Failed to assemble rsa key: {e}")))?
        }
    };

    let private_key = key
        .to_openssh(LineEnding::LF)
        .map_err(|e| AppError::KeyGeneration(format!("Failed to encode private key: {e}")))?
        .to_string();

    let public_key = key.public_key().to_string();

    Ok(SshKeypair {
        private_key,
        public_key,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ed25519() {
        let keypair = generate_ssh_keypair(SshKeygenAlgorithm::Ed25519).unwrap();

        assert!(keypair.private_key.contains("BEGIN OPENSSH PRIVATE KEY"));
        assert!(keypair.private_key.contains("END OPENSSH PRIVATE KEY"));
        assert!(keypair.public_key.starts_with("ssh-ed25519 "));
    }

    #[test]
    fn test_generate_ecdsa() {
        let keypair = generate_ssh_keypair(SshKeygenAlgorithm::Ecdsa).unwrap();

        assert!(keypair.private_key.contains("BEGIN OPENSSH PRIVATE KEY"));
        assert!(keypair.public_key.starts_with("ecdsa-sha2-nistp256 "));
    }

    #[test]
    #[ignore = "4096-bit RSA generation is slow in debug builds"]
    fn test_generate_rsa4096() {
        let keypair = generate_ssh_keypair(SshKeygenAlgorithm::Rsa4096).unwrap();

        assert!(keypair.private_key.contains("BEGIN OPENSSH PRIVATE KEY"));
        assert!(keypair.public_key.starts_with("ssh-rsa "));
    }

    #[test]
    fn test_generated_keys_are_unique() {
        let a = generate_ssh_keypair(SshKeygenAlgorithm::Ed25519).unwrap();
        let b = generate_ssh_keypair(SshKeygenAlgorithm::Ed25519).unwrap();

        assert_ne!(a.public_key, b.public_key);
        assert_ne!(a.private_key, b.private_key);
    }
}
