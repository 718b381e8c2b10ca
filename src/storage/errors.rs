//! Storage-specific error types.
//!
//! These represent failures in the record store, separate from validation
//! and registry errors. The registry relies on the distinction: a temporary
//! store fault must never read as "record not found".

/// Errors that can occur during record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No employee with the given id exists.
    #[error("Employee not found: id {id}")]
    EmployeeNotFound { id: i32 },

    /// An employee with the given id already exists (unique-index violation).
    #[error("Employee already exists: id {id}")]
    EmployeeAlreadyExists { id: i32 },

    /// No project with the given name exists.
    #[error("Project not found: '{name}'")]
    ProjectNotFound { name: String },

    /// A project with the given name already exists.
    #[error("Project already exists: '{name}'")]
    ProjectAlreadyExists { name: String },

    /// The backend is temporarily unreachable; the operation may succeed
    /// on retry.
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// Generic internal storage error.
    #[error("Internal store error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StorageError {
    /// Create an EmployeeNotFound error.
    pub fn employee_not_found(id: i32) -> Self {
        Self::EmployeeNotFound { id }
    }

    /// Create an EmployeeAlreadyExists error.
    pub fn employee_already_exists(id: i32) -> Self {
        Self::EmployeeAlreadyExists { id }
    }

    /// Create a ProjectNotFound error.
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    /// Create a ProjectAlreadyExists error.
    pub fn project_already_exists(name: impl Into<String>) -> Self {
        Self::ProjectAlreadyExists { name: name.into() }
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Check if this error indicates a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound { .. } | Self::ProjectNotFound { .. }
        )
    }

    /// Check if this error indicates a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmployeeAlreadyExists { .. } | Self::ProjectAlreadyExists { .. }
        )
    }

    /// Check if this error is a temporary failure that might succeed on retry.
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
