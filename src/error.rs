/// An error returned by this crate.
///
/// Every failure is either a [`ConfigurationError`] (the process-wide
/// settings are incomplete) or a [`ValidationError`] (a request-scoped value
/// is missing or malformed). `PolicyDocumentSerialization` is an internal
/// failure that no input can cause. Nothing is returned partially on error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("policy document serialization: {0}")]
    PolicyDocumentSerialization(#[source] serde_json::Error),
}

impl Error {
    /// Returns `true` if the error is caused by the configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` if the error is caused by a caller-supplied value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("access key id not found")]
    AccessKeyIdNotFound,
    #[error("no bucket configured")]
    BucketNotFound,
    #[error("config file: {0}")]
    File(#[source] std::io::Error),
    #[error("invalid config json: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("invalid environment variable: {0}")]
    InvalidEnvVar(String),
    #[error("expiration out of range")]
    ExpirationOutOfRange,
    #[error("now out of range")]
    Now,
    #[error("secret access key not found")]
    SecretAccessKeyNotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("accessible_at out of range")]
    AccessibleAtOutOfRange,
    #[error("acl not found")]
    AclNotFound,
    #[error("expiration out of range")]
    ExpirationOutOfRange,
    #[error("field name is empty")]
    FieldNameEmpty,
    #[error("field name starts with `$`: {0}")]
    FieldNameStartsWithDollar(String),
    #[error("content-length-range min is greater than max: {0} > {1}")]
    InvalidContentLengthRange(u64, u64),
    #[error("key not found")]
    KeyNotFound,
    #[error("key `{key}` does not start with `{key_prefix}`")]
    KeyOutsidePrefix { key: String, key_prefix: String },
    #[error("invalid encoded policy")]
    InvalidEncodedPolicy,
    #[error("policy not found")]
    PolicyNotFound,
    #[error("signature not found")]
    SignatureNotFound,
    #[error("success_action_status must be 200, 201 or 204: {0}")]
    SuccessActionStatusInvalid(u16),
    #[error("success_action_status not found")]
    SuccessActionStatusNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impls() {
        fn assert_impls<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impls::<Error>();
        assert_impls::<ConfigurationError>();
        assert_impls::<ValidationError>();
    }

    #[test]
    fn test_category() {
        let error = Error::from(ConfigurationError::BucketNotFound);
        assert!(error.is_configuration());
        assert!(!error.is_validation());
        assert_eq!(error.to_string(), "no bucket configured");

        let error = Error::from(ValidationError::KeyNotFound);
        assert!(error.is_validation());
        assert!(!error.is_configuration());
        assert_eq!(error.to_string(), "key not found");
    }

    #[test]
    fn test_policy_document_serialization_is_neither() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::PolicyDocumentSerialization(source);
        assert!(!error.is_configuration());
        assert!(!error.is_validation());
        assert!(error
            .to_string()
            .starts_with("policy document serialization: "));
    }
}
