use crate::{
    error::{ConfigurationError, Error},
    policy_document::EncodedPolicy,
};

/// A base64-encoded HMAC-SHA1 digest without newlines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedSignature(String);

impl EncodedSignature {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for EncodedSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::convert::From<EncodedSignature> for String {
    fn from(value: EncodedSignature) -> Self {
        value.0
    }
}

/// Signs `encoded_policy` with `secret_access_key`.
///
/// `base64(HMAC-SHA1(secret_access_key, encoded_policy))`
pub fn sign(
    encoded_policy: &EncodedPolicy,
    secret_access_key: &str,
) -> Result<EncodedSignature, Error> {
    if secret_access_key.is_empty() {
        return Err(Error::from(ConfigurationError::SecretAccessKeyNotFound));
    }
    let message_digest = hmac_sha1(
        secret_access_key.as_bytes(),
        encoded_policy.as_str().as_bytes(),
    );
    let encoded = base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        message_digest.as_ref(),
    );
    Ok(EncodedSignature(encoded.replace('\n', "")))
}

fn hmac_sha1(key: &[u8], message: &[u8]) -> ring::hmac::Tag {
    let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    ring::hmac::sign(&key, message)
}
