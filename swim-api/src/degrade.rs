use crate::error::ApiError;

/// Turn a failed read into its empty/default value so the UI stays usable.
///
/// The failure is logged with the name of the source that degraded.
pub trait Degrade<T> {
    fn or_degrade(self, source: &str) -> T
    where
        T: Default;

    fn or_degrade_with(self, source: &str, fallback: impl FnOnce() -> T) -> T;
}

impl<T> Degrade<T> for Result<T, ApiError> {
    fn or_degrade(self, source: &str) -> T
    where
        T: Default,
    {
        self.or_degrade_with(source, T::default)
    }

    fn or_degrade_with(self, source: &str, fallback: impl FnOnce() -> T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to fetch {}, using default: {}", source, e);
                fallback()
            }
        }
    }
}
