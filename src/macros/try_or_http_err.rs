/// Unwraps `Ok`, or logs the error and returns `500` with a `CommonResponse`.
#[macro_export]
macro_rules! try_or_http_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => {
                tracing::error!(error = %err, "request failed");
                return actix_web::HttpResponse::InternalServerError()
                    .json($crate::utils::response::CommonResponse::error(err.to_string()));
            }
        }
    };
}

/// Unwraps `Ok`, or returns `400` with the error's text. For business-rule rejections.
#[macro_export]
macro_rules! reject_or_http_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => {
                tracing::info!(reason = %err, "request rejected");
                return actix_web::HttpResponse::BadRequest()
                    .json($crate::utils::response::CommonResponse::error(err.to_string()));
            }
        }
    };
}
