use thiserror::Error;

/// Rejected `/update` input. The message is shown to the user prefixed with `Error: `.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("{label} must be an integer.")]
    NotInteger { label: &'static str },

    #[error("{label} must be at least {min}.")]
    TooSmall { label: &'static str, min: i64 },

    #[error("{label} must be at most {max}.")]
    TooLarge { label: &'static str, max: i64 },

    #[error("{label} must be in yyyy-mm-dd format.")]
    DateFormat { label: &'static str },

    #[error("{label} is not a valid date.")]
    InvalidDate { label: &'static str },

    #[error("{label} cannot be before Helldivers 2 release date on 2024-02-08.")]
    BeforeRelease { label: &'static str },
}
