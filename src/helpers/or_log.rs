/// Logs and otherwise ignores an error. Notification steps are best-effort by contract, so
/// their failures end here instead of propagating.
pub trait OrLog {
    fn or_log_error(&self, context: &str);
}

impl<T, U> OrLog for Result<T, U>
where
    U: std::fmt::Display,
{
    fn or_log_error(&self, context: &str) {
        if let Err(e) = self {
            error!("{}: {}", context, e);
        }
    }
}
