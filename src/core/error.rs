//! Error types for the telemetry core

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A sink rejected a formatted record
    #[error("Sink '{sink}' failed to write record: {message}")]
    SinkWrite {
        sink: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Configuration source could not be read or parsed
    #[error("Failed to load configuration from '{path}': {message}")]
    ConfigLoad { path: String, message: String },
}

impl TelemetryError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        TelemetryError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        TelemetryError::SinkWrite {
            sink: sink.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        TelemetryError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a configuration load error
    pub fn config_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        TelemetryError::ConfigLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}
