use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid product query: {0}")]
    InvalidQuery(String),
}

/// Failures surfaced by the serving layers. Resolution itself never fails;
/// these cover request validation and catalog ingestion.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("integration failure: {0}")]
    Integration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::ServiceUnavailable { .. } => {
                "The service is temporarily unavailable. Please retry shortly."
            }
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::ServiceUnavailable { correlation_id, .. } => correlation_id,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::ServiceUnavailable { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(DomainError::InvalidQuery(message)) => {
                Self::BadRequest { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Integration(message) => {
                Self::ServiceUnavailable { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn invalid_query_maps_to_bad_request_with_detail() {
        let interface = ApplicationError::from(DomainError::InvalidQuery(
            "productTitle must not be empty".to_owned(),
        ))
        .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest { ref message, ref correlation_id }
                if correlation_id == "req-1" && message.contains("productTitle")
        ));
        assert_eq!(
            interface.user_message(),
            "The request could not be processed. Check inputs and try again."
        );
    }

    #[test]
    fn integration_failure_maps_to_service_unavailable() {
        let interface = ApplicationError::Integration("vector search disabled".to_owned())
            .into_interface("req-2");

        assert!(matches!(interface, InterfaceError::ServiceUnavailable { .. }));
        assert_eq!(interface.correlation_id(), "req-2");
        assert_eq!(
            interface.user_message(),
            "The service is temporarily unavailable. Please retry shortly."
        );
    }

    #[test]
    fn unassigned_correlation_id_is_replaced() {
        let interface: InterfaceError =
            ApplicationError::Integration("rejected".to_owned()).into();
        assert_eq!(interface.correlation_id(), "unassigned");

        let assigned = ApplicationError::Integration("rejected".to_owned()).into_interface("req-3");
        assert_eq!(assigned.correlation_id(), "req-3");
    }
}
