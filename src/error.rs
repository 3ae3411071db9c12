// Copyright (C) 2020-2026 Andy Kurnia.

// Fatal errors: malformed snapshots, racks, words, configs.
// Per-candidate legality failures are legality::Illegality instead.
pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new<S: Into<String>>(s: S) -> MyError {
    MyError { s: s.into() }
}

pub type BoxAnyError = Box<dyn std::error::Error + Send + Sync>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($($arg:tt)*) => {
        return Err($crate::error::new(format!($($arg)*)).into())
    };
}
