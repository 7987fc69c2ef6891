//! Call-site capture macros
//!
//! The original surface auto-captured file, line, column, and function
//! name at every call. These macros do the same with `file!()`, `line!()`,
//! `column!()`, and a type-name based function capture, then delegate to
//! the matching per-severity method. Explicit `emit` with a hand-built
//! `SourceLocation` is equally supported.
//!
//! # Example
//!
//! ```
//! use glyphlog_core::{log_e, log_w, LogConfig, Logger};
//!
//! let logger = Logger::new(LogConfig::default());
//! log_e!(logger, "boom");
//! log_w!(logger, "retrying ({} left)", 2);
//! ```

/// Capture the name of the enclosing function
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        match name.rfind("::") {
            Some(idx) => &name[idx + 2..],
            None => name,
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __here {
    () => {
        $crate::SourceLocation::new(file!(), line!(), column!(), $crate::__function_name!())
    };
}

/// Log an error message with auto-captured call site
#[macro_export]
macro_rules! log_e {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*), &$crate::__here!())
    };
}

/// Log an info message with auto-captured call site
#[macro_export]
macro_rules! log_i {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*), &$crate::__here!())
    };
}

/// Log a debug message with auto-captured call site
#[macro_export]
macro_rules! log_d {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*), &$crate::__here!())
    };
}

/// Log a verbose message with auto-captured call site
#[macro_export]
macro_rules! log_v {
    ($logger:expr, $($arg:tt)*) => {
        $logger.verbose(format_args!($($arg)*), &$crate::__here!())
    };
}

/// Log a warning with auto-captured call site
#[macro_export]
macro_rules! log_w {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*), &$crate::__here!())
    };
}

/// Log a severe event with auto-captured call site
#[macro_export]
macro_rules! log_s {
    ($logger:expr, $($arg:tt)*) => {
        $logger.severe(format_args!($($arg)*), &$crate::__here!())
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_function_name_capture() {
        let name = crate::__function_name!();
        assert_eq!(name, "test_function_name_capture");
    }

    #[test]
    fn test_here_captures_this_file() {
        let loc = crate::__here!();
        assert_eq!(loc.short_file_name(), "macros.rs");
        assert!(loc.line() > 0);
    }
}
