// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Info-level diagnostic: `diag_info!(diags, "fmt", args…)`
#[macro_export]
macro_rules! diag_info {
    ($diags:expr, $($arg:tt)*) => {
        $diags.info(format!($($arg)*))
    };
}

/// Warn-level diagnostic (field missing / malformed, record dropped)
#[macro_export]
macro_rules! diag_warn {
    ($diags:expr, $($arg:tt)*) => {
        $diags.warn(format!($($arg)*))
    };
}

/// Error-level diagnostic (run is about to abort)
#[macro_export]
macro_rules! diag_error {
    ($diags:expr, $($arg:tt)*) => {
        $diags.error(format!($($arg)*))
    };
}
