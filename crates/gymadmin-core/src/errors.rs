use gymadmin_core_types::RequestId;
use thiserror::Error;

/// Result type alias using GymError
pub type Result<T> = std::result::Result<T, GymError>;

/// Literal message shown to the operator on a rejected login
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas. Pruebe admin/admin";

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    InvalidInput,
    Validation,
    NotFound,
    Unauthorised,

    // Storage
    Io,
    Serialization,
    Persistence,
    CorruptState,
    Config,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::CorruptState => "ERR_CORRUPT_STATE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Storage backends report failures as `ExError`; domain errors convert into
/// it for logging and CLI output.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    collection: Option<String>,
    entity_id: Option<u32>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            collection: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the persisted collection key the error relates to
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_entity_id(mut self, id: u32) -> Self {
        self.entity_id = Some(id);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn entity_id(&self) -> Option<u32> {
        self.entity_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(collection) = &self.collection {
            write!(f, " (collection: {})", collection)?;
        }
        if let Some(entity_id) = self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for gym store, form and session operations
#[derive(Error, Debug, Clone)]
pub enum GymError {
    /// A form field failed validation. Raised by the form layer, never by the store.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Login rejected
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// A persisted collection could not be decoded at hydration time
    #[error("Corrupt persisted state under key {key}: {message}")]
    CorruptState { key: String, message: String },

    /// The in-memory mutation was applied but writing it back failed.
    /// The listed keys stay pending and are retried on the next persist.
    #[error("Failed to persist {keys:?}: {message}")]
    Persistence { keys: Vec<String>, message: String },

    /// The collection already holds `EntityId::MAX`, so max + 1 has no value left
    #[error("No id left to assign in {key}")]
    IdSpaceExhausted { key: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failure reported by a storage backend
    #[error("{0}")]
    Storage(#[from] ExError),
}

impl GymError {
    /// Shorthand used by the validation rules
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GymError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code of the kind this error maps to
    pub fn code(&self) -> &'static str {
        ExError::from(self.clone()).code()
    }
}

impl From<GymError> for ExError {
    fn from(err: GymError) -> Self {
        match err {
            GymError::Validation { field, reason } => ExError::new(ExErrorKind::Validation)
                .with_op("validate")
                .with_message(format!("{}: {}", field, reason)),

            GymError::InvalidCredentials => ExError::new(ExErrorKind::Unauthorised)
                .with_op("login")
                .with_message(INVALID_CREDENTIALS_MESSAGE),

            GymError::CorruptState { key, message } => ExError::new(ExErrorKind::CorruptState)
                .with_op("hydrate")
                .with_collection(key)
                .with_message(message),

            GymError::Persistence { keys, message } => ExError::new(ExErrorKind::Persistence)
                .with_op("persist")
                .with_collection(keys.join(","))
                .with_message(message),

            GymError::IdSpaceExhausted { key } => ExError::new(ExErrorKind::Internal)
                .with_op("assign_id")
                .with_collection(key)
                .with_message("id space exhausted"),

            GymError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            GymError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            GymError::Storage(inner) => inner,
        }
    }
}

impl From<serde_json::Error> for GymError {
    fn from(err: serde_json::Error) -> Self {
        GymError::Serialization {
            message: err.to_string(),
        }
    }
}
