use std::error;
use std::fmt;

/// An Error during the construction of a network.
#[derive(Debug)]
pub enum ConsError {
    /// Hidden stacks only support relu and tanh, and tokens must name a known activation.
    UnsupportedActivation(String),
    UnknownLoss(String),
    UnknownOptimizer(String),
    /// A layer (or the input when `index` is None) has a width of zero.
    ZeroWidth { index: Option<usize> },
    /// Counting the parameters of layer `index`, or of the network up to it, overflows.
    TooManyParameters { index: usize },
    /// Drop rates must lie in `[0, 1)`.
    DropRate { index: usize, rate: f32 },
    /// Early stopping needs to wait at least one epoch.
    Patience,
    /// A layer is incompatible with the previous one
    Incompatible {
        index: usize,
        received_input: usize,
        expected_input: usize,
    },
    /// The network was built before an optimizer and loss were chosen.
    Uncompiled,
    Empty,
    /// Error raised by the backend constructing the network.
    Backend(Box<dyn error::Error + Send + Sync>),
}

impl ConsError {
    /// Wraps an error raised by a backend.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        ConsError::Backend(err.into())
    }

    /// True for every error caused by the requested configuration rather than the backend.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, ConsError::Backend(_))
    }
}

impl error::Error for ConsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConsError::Backend(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for ConsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsError::UnsupportedActivation(token) => {
                write!(f, "Unsupported activation '{}'.", token)
            }
            ConsError::UnknownLoss(token) => write!(f, "Unknown loss '{}'.", token),
            ConsError::UnknownOptimizer(token) => write!(f, "Unknown optimizer '{}'.", token),
            ConsError::ZeroWidth { index: None } => {
                f.write_str("The network input must have a width of at least 1.")
            }
            ConsError::ZeroWidth { index: Some(i) } => {
                write!(f, "Layer {} must have a width of at least 1.", i)
            }
            ConsError::DropRate { index, rate } => write!(
                f,
                "Layer {} has a drop rate of {}, expected a value in [0, 1).",
                index, rate
            ),
            ConsError::TooManyParameters { index } => write!(
                f,
                "Layer {} has more parameters than can be counted.",
                index
            ),
            ConsError::Patience => f.write_str("Early stopping patience must be at least 1."),
            ConsError::Incompatible {
                index: 0,
                received_input,
                expected_input,
            } => write!(
                f,
                "Layer 0 is incompatible with the network input:\n\tExpected input length of {} but received {}.",
                expected_input, received_input,
            ),
            ConsError::Incompatible {
                index,
                received_input,
                expected_input,
            } => write!(
                f,
                "Layer {} is incompatible with layer {}:\n\tExpected input length of {} but received {}.",
                index,
                index - 1,
                expected_input,
                received_input,
            ),
            ConsError::Uncompiled => {
                f.write_str("The network must be compiled with an optimizer and a loss before it is built.")
            }
            ConsError::Empty => {
                f.write_str("The network must have at least a single layer, but it was empty.")
            }
            ConsError::Backend(e) => write!(f, "Backend failed to construct the network: {}", e),
        }
    }
}
