#![deny(missing_docs)]

//! # Key Generation
//!
//! Probabilistically-unique display keys for interface nodes.
//!
//! Keys are not stable identities: re-parsing the same document yields
//! fresh keys. Downstream consumers that need stable identity must derive
//! their own from `path` + `method`.

use rand::distributions::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 6;

/// Appends a random alphanumeric suffix to `prefix`.
///
/// e.g. `random_id("user login")` -> `user login-a8Xk2p`
pub fn random_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    format!("{}-{}", prefix, suffix)
}
