//! Focus ring over the form controls.

use crate::analyzer::FormField;

/// The control that currently receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    /// The product name input.
    #[default]
    ProductName,
    /// The review text area.
    ReviewText,
    /// The "Analyze Review" control.
    SubmitButton,
}

impl FormFocus {
    /// Returns the next control, wrapping from the button to the first field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ProductName => Self::ReviewText,
            Self::ReviewText => Self::SubmitButton,
            Self::SubmitButton => Self::ProductName,
        }
    }

    /// Returns the previous control, wrapping from the first field to the
    /// button.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::ProductName => Self::SubmitButton,
            Self::ReviewText => Self::ProductName,
            Self::SubmitButton => Self::ReviewText,
        }
    }

    /// Returns the editable field under focus, if any.
    #[must_use]
    pub const fn field(self) -> Option<FormField> {
        match self {
            Self::ProductName => Some(FormField::ProductName),
            Self::ReviewText => Some(FormField::ReviewText),
            Self::SubmitButton => None,
        }
    }
}
