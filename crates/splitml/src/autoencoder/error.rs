/// Errors reported by the checked autoencoder entry points.
///
/// The unchecked `forward`, `embed` and `decode` never return these; a mismatched input
/// panics inside the first linear stage instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AutoencoderError {
    /// A layer width is zero.
    #[error("The {name} dimension must be positive")]
    ZeroDimension {
        /// Name of the offending dimension.
        name: &'static str,
    },

    /// The dimensions don't narrow down to a bottleneck.
    #[error("Expected H <= M <= t_input, got t_input = {t_input}, M = {m}, H = {h}")]
    NotABottleneck {
        /// Signal length.
        t_input: usize,
        /// Width of the linear stage.
        m: usize,
        /// Width of the hidden stage.
        h: usize,
    },

    /// The trailing dimension of an input doesn't match the stage it is fed to.
    #[error("Expected a trailing dimension of {expected}, got {actual}")]
    InputLength {
        /// Width expected by the stage.
        expected: usize,
        /// Width of the given input.
        actual: usize,
    },
}

pub(crate) fn check_trailing<const D: usize>(
    dims: [usize; D],
    expected: usize,
) -> Result<(), AutoencoderError> {
    let actual = dims.last().copied().unwrap_or_default();

    if actual != expected {
        return Err(AutoencoderError::InputLength { expected, actual });
    }

    Ok(())
}
