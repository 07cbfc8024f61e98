use crate::{api::ApiAction, maud_conveniences::error_banner};
use axum::response::{Html, IntoResponse, Response};
use reqwest::StatusCode;
use snafu::Snafu;
use std::num::ParseIntError;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum DirectoryError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse `{}` as a number of seconds", name))]
    ParseTimeout {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Invalid students API url {:?}: {}", provided, reason))]
    InvalidApiUrl { provided: String, reason: String },
    #[snafu(display("Invalid locale {:?}", provided))]
    InvalidLocale {
        source: icu::locale::ParseError,
        provided: String,
    },
    #[snafu(display("Invalid calendar {:?}", provided))]
    InvalidCalendarAlgorithm { provided: String },
    #[snafu(display("Unable to build date formatter"))]
    BadDateTimeFormatter {
        source: icu::datetime::DateTimeFormatterLoadError,
    },
    #[snafu(display("Unable to build HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Failed to {}: the student service could not be reached", action))]
    Transport {
        source: reqwest::Error,
        action: ApiAction,
    },
    #[snafu(display("{}", message))]
    Rejected {
        action: ApiAction,
        status: StatusCode,
        message: String,
    },
    #[snafu(display("Failed to {}", action))]
    Unsuccessful {
        action: ApiAction,
        status: StatusCode,
    },
    #[snafu(display("Failed to {}: unexpected response from the student service", action))]
    DecodeResponse {
        source: reqwest::Error,
        action: ApiAction,
    },
}

impl DirectoryError {
    /// HTTP status the student service answered with, if it answered at all.
    pub fn remote_status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } | Self::Unsuccessful { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        error!(?self, "Error rendering response");

        let status_code = match &self {
            Self::Transport { .. } | Self::Unsuccessful { .. } | Self::DecodeResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::Rejected { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, Html(error_banner(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_render_as_a_banner() {
        let response = DirectoryError::InvalidCalendarAlgorithm {
            provided: "lunar-ish".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = DirectoryError::Rejected {
            action: ApiAction::GetOne,
            status: StatusCode::NOT_FOUND,
            message: "Student 9 not found".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
