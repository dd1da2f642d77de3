#[macro_export]
macro_rules! map_to_api_error {
    ($call: expr, $code: expr) => {{
        $call.map_err(|e| {
            tracing::error!(code = $code, "{:#}", e);
            $crate::api::error::ApiError::database_error($code)
        })
    }};
}
