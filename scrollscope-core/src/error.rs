//! Core error type

use scrollscope_display::DisplayError;

/// Errors raised while setting up or running the oscillograph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScopeError {
    /// Display reported zero width or height
    EmptyDisplay,
    /// Display wider than the sample buffers can hold
    WidthTooLarge { width: u16, max: u16 },
    /// Ring buffer length outside its fixed capacity
    CapacityExceeded { requested: usize, capacity: usize },
    /// Underlying display failure
    Display(DisplayError),
}

impl From<DisplayError> for ScopeError {
    fn from(e: DisplayError) -> Self {
        ScopeError::Display(e)
    }
}
