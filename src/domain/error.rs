use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Request cancelled: {message}")]
    Cancelled { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("record store unreachable");
        assert_eq!(error.to_string(), "Storage error: record store unreachable");
    }

    #[test]
    fn test_serialization_error() {
        let error = DomainError::serialization("malformed header payload");
        assert_eq!(
            error.to_string(),
            "Serialization error: malformed header payload"
        );
    }

    #[test]
    fn test_transport_error() {
        let error = DomainError::transport("connection refused");
        assert_eq!(error.to_string(), "Transport error: connection refused");
    }
}
