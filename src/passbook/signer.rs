//! Keyed message signing for session tokens.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies strings with HMAC-SHA256 under the process secret.
pub struct Signer {
    key: SecretString,
}

impl Signer {
    #[must_use]
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }

    fn mac(&self, data: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .expect("HMAC can accept any key length");
        mac.update(data.as_bytes());
        mac
    }

    /// Upper-case hex HMAC-SHA256 digest of `data`.
    #[must_use]
    pub fn sign(&self, data: &str) -> String {
        hex::encode_upper(self.mac(data).finalize().into_bytes())
    }

    /// Check `signature_hex` against the digest of `data` in constant time.
    ///
    /// The comparison goes through `Mac::verify_slice`, so timing does not
    /// depend on where the first differing byte sits. Hex decoding accepts
    /// either case; input that is not hex at all is an ordinary failure.
    #[must_use]
    pub fn verify(&self, data: &str, signature_hex: &str) -> bool {
        let Ok(signature) = hex::decode(signature_hex) else {
            return false;
        };
        self.mac(data).verify_slice(&signature).is_ok()
    }
}
