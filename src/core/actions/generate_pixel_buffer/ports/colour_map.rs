use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<Colour, Self::Failure>;
}

/// Member pixels in one colour, escaping pixels in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipColours {
    pub member: Colour,
    pub outside: Colour,
}

impl Default for MembershipColours {
    fn default() -> Self {
        Self {
            member: Colour::BLACK,
            outside: Colour::WHITE,
        }
    }
}

impl ColourMap for MembershipColours {
    type T = bool;
    type Failure = std::convert::Infallible;

    fn map(&self, value: bool) -> Result<Colour, Self::Failure> {
        Ok(if value { self.member } else { self.outside })
    }
}
