/// Unwraps `Some`, or returns `404` with `$str`.
#[macro_export]
macro_rules! unwrap_or_http_err_with_opt_msg {
    ($expr:expr, $str:expr) => {
        match $expr {
            Some(val) => val,
            None => {
                return actix_web::HttpResponse::NotFound()
                    .json($crate::utils::response::CommonResponse::error($str))
            }
        }
    };
}
