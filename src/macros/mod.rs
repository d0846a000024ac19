mod extract_or_http_err;
mod try_or_http_err;
mod unwrap_or_http_err;
