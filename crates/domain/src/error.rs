use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidFontSize(u32),
    InvalidColor(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFontSize(value) => {
                write!(f, "font size must be a positive integer, got {value}")
            }
            Self::InvalidColor(value) => write!(f, "color must be #rrggbb, got {value:?}"),
        }
    }
}

impl std::error::Error for DomainError {}
