/// Print an informational message
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        let msg = format!("{}", format_args!($($arg)*));
        $crate::print::print_term(&msg, $crate::print::LogType::Info);
        $crate::print::print_to_file(&msg, $crate::print::LogType::Info);
    }};
}

/// Print an error message
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {{
        let msg = format!("{}", format_args!($($arg)*));
        $crate::print::print_term(&msg, $crate::print::LogType::Error);
        $crate::print::print_to_file(&msg, $crate::print::LogType::Error);
    }};
}

/// Print a point message, i.e. a small step in some process
#[macro_export]
macro_rules! pt {
    ($($arg:tt)*) => {{
        let msg = format!("{}", format_args!($($arg)*));
        $crate::print::print_term(&msg, $crate::print::LogType::Point);
        $crate::print::print_to_file(&msg, $crate::print::LogType::Point);
    }};
}
