use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// An opaque sRGB color, parsed from and formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);

    pub fn from_hex(value: &str) -> Result<Self, DomainError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| DomainError::InvalidColor(value.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColor(value.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| DomainError::InvalidColor(value.to_string()))
        };
        Ok(Self(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
