use actix_web::error::{JsonPayloadError, QueryPayloadError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("The payment queue is at capacity.")]
	TooManyPayments,
	#[display("Request data is invalid.")]
	BadClientDataError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::TooManyPayments => "Too Many Requests".to_string(),
			ApiError::BadClientDataError => "Bad request".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::TooManyPayments => StatusCode::TOO_MANY_REQUESTS,
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
		}
	}
}

/// Maps malformed request bodies onto the gateway's JSON error shape.
/// Registered via `web::JsonConfig` at server build time.
pub fn json_error_handler(
	err: JsonPayloadError,
	_req: &HttpRequest,
) -> actix_web::Error {
	error::InternalError::from_response(
		err,
		ApiError::BadClientDataError.error_response(),
	)
	.into()
}

/// Same mapping for unparseable query strings, e.g. a summary window
/// bound that is not an RFC 3339 timestamp.
pub fn query_error_handler(
	err: QueryPayloadError,
	_req: &HttpRequest,
) -> actix_web::Error {
	error::InternalError::from_response(
		err,
		ApiError::BadClientDataError.error_response(),
	)
	.into()
}
