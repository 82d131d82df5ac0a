pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails with [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence)
/// when `items` has no elements.
#[macro_export]
macro_rules! verify_non_empty {
    ($operation:expr, $items:expr) => {{
        let items = $items;
        $crate::result::verify_non_empty(!items.is_empty(), $operation)?;
    }};
}

#[inline]
pub fn verify_non_empty(predicate: bool, operation: &'static str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        empty_sequence(operation)
    }
}

#[cold]
pub fn empty_sequence(operation: &'static str) -> Result<()> {
    Err(crate::error::Error::empty_sequence(operation))
}

/// Records a rejected call of a checked operation.
#[cold]
pub(crate) fn log_rejected(_e: &crate::error::Error) {
    #[cfg(feature = "log")]
    log::debug!("rejected input: {_e}");
}
