/// Log a handler entry point
#[macro_export]
macro_rules! log_handler_entry {
    ($ctx:expr, $handler:expr) => {
        log::debug!("{} -> {}", $ctx.log_prefix(), $handler);
    };
}

/// Log a handler exit with its response status and duration
#[macro_export]
macro_rules! log_handler_exit {
    ($ctx:expr, $handler:expr, $response:expr) => {
        match &$response {
            $crate::BridgeResponse::Error { code, message, .. } => log::warn!(
                "{} <- {} ERR {}: {} ({}ms)",
                $ctx.log_prefix(),
                $handler,
                code,
                message,
                $ctx.elapsed_ms()
            ),
            other => log::info!(
                "{} <- {} {} ({}ms)",
                $ctx.log_prefix(),
                $handler,
                other.status(),
                $ctx.elapsed_ms()
            ),
        }
    };
}
