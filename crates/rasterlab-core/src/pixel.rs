//! Pixel - one RGB(+alpha) color sample
//!
//! A [`Pixel`] is a plain value object: three 8-bit color channels plus an
//! alpha byte that is carried along but not consumed by any transformation.
//! Constructors validate the channel range so that an in-range invariant
//! holds everywhere downstream.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// The lowercase name used by command scripts and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    /// Parse a channel selector.
    ///
    /// Exactly `"red"`, `"green"`, and `"blue"` are recognized; anything
    /// else fails with [`Error::InvalidChannel`].
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(Error::InvalidChannel(other.to_string())),
        }
    }
}

/// One RGB color sample with an alpha byte reserved for later use.
///
/// Pixels are `Copy` value objects: two pixels with the same channel values
/// are interchangeable. Channel values are always in [0, 255]; fallible
/// constructors take `i32` so that out-of-range arithmetic results are
/// rejected rather than silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
    alpha: u8,
}

impl Pixel {
    /// Create a pixel from three channel values.
    ///
    /// The alpha byte is initialized to 0; no transformation reads it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if any channel is outside [0, 255].
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Pixel {
            r: checked_channel(r)?,
            g: checked_channel(g)?,
            b: checked_channel(b)?,
            alpha: 0,
        })
    }

    /// Get the red channel value.
    #[inline]
    pub fn red(&self) -> u8 {
        self.r
    }

    /// Get the green channel value.
    #[inline]
    pub fn green(&self) -> u8 {
        self.g
    }

    /// Get the blue channel value.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Get the alpha value.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Get the value of the selected channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Return a copy with one channel replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `value` is outside [0, 255].
    pub fn with_channel(&self, channel: Channel, value: i32) -> Result<Self> {
        let value = checked_channel(value)?;
        let mut pixel = *self;
        match channel {
            Channel::Red => pixel.r = value,
            Channel::Green => pixel.g = value,
            Channel::Blue => pixel.b = value,
        }
        Ok(pixel)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

#[inline]
fn checked_channel(value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::OutOfRange { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_trips_channels() {
        let pixel = Pixel::new(12, 200, 255).unwrap();
        assert_eq!(pixel.red(), 12);
        assert_eq!(pixel.green(), 200);
        assert_eq!(pixel.blue(), 255);
        assert_eq!(pixel.alpha(), 0);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Pixel::new(-1, 0, 0),
            Err(Error::OutOfRange { value: -1 })
        );
        assert_eq!(
            Pixel::new(0, 256, 0),
            Err(Error::OutOfRange { value: 256 })
        );
        assert_eq!(
            Pixel::new(0, 0, 1000),
            Err(Error::OutOfRange { value: 1000 })
        );
    }

    #[test]
    fn test_boundary_values() {
        assert!(Pixel::new(0, 0, 0).is_ok());
        assert!(Pixel::new(255, 255, 255).is_ok());
    }

    #[test]
    fn test_with_channel() {
        let pixel = Pixel::new(10, 20, 30).unwrap();
        let red = pixel.with_channel(Channel::Red, 99).unwrap();
        assert_eq!(red.red(), 99);
        assert_eq!(red.green(), 20);
        assert_eq!(red.blue(), 30);

        assert!(pixel.with_channel(Channel::Green, 300).is_err());
        // original value untouched
        assert_eq!(pixel.green(), 20);
    }

    #[test]
    fn test_channel_selector() {
        let pixel = Pixel::new(1, 2, 3).unwrap();
        assert_eq!(pixel.channel(Channel::Red), 1);
        assert_eq!(pixel.channel(Channel::Green), 2);
        assert_eq!(pixel.channel(Channel::Blue), 3);
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("red".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!("green".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!("blue".parse::<Channel>().unwrap(), Channel::Blue);
        assert!(matches!(
            "cyan".parse::<Channel>(),
            Err(Error::InvalidChannel(s)) if s == "cyan"
        ));
        // case-sensitive, like the command language
        assert!("Red".parse::<Channel>().is_err());
    }

    #[test]
    fn test_channel_names_round_trip() {
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn test_display_is_ppm_style() {
        let pixel = Pixel::new(1, 2, 3).unwrap();
        assert_eq!(pixel.to_string(), "1 2 3");
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Pixel::default(), Pixel::new(0, 0, 0).unwrap());
    }
}
