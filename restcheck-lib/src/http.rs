use reqwest::{Response, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Error in http transport layer")]
    TransportError {
        #[from]
        source: reqwest::Error,
    },
    #[error("Server responded with error status => {0:?}")]
    ServerResponseErr(StatusCode),
}

impl ClientError {
    // Status the server answered with, if the call got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::TransportError { .. } => None,
            ClientError::ServerResponseErr(status) => Some(*status),
        }
    }
}

pub(crate) fn check_status(response: Response) -> Result<Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::ServerResponseErr(response.status()))
    }
}
