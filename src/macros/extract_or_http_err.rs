/// Storage lookup that must both succeed and find something.
#[macro_export]
macro_rules! extract_or_http_err_with_opt_msg {
    ($expr:expr, $str:expr) => {
        $crate::unwrap_or_http_err_with_opt_msg!($crate::try_or_http_err!($expr), $str)
    };
}
