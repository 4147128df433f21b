use crate::LayoutError;
use std::str::FromStr;

/// A fill colour for text, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// CMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the grey space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    fn from_hex(hex: &str) -> Option<Colour> {
        let digits: Vec<u8> = hex
            .chars()
            .map(|ch| ch.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;
        match digits.as_slice() {
            [r, g, b] => Some(Colour::new_rgb_bytes(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Some(Colour::new_rgb_bytes(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
            )),
            _ => None,
        }
    }
}

/// Parses the colour notations that text styles commonly carry: a handful of named
/// colours, `#rgb`, and `#rrggbb`
impl FromStr for Colour {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let colour = match s.to_ascii_lowercase().as_str() {
            "black" => Some(colours::BLACK),
            "white" => Some(colours::WHITE),
            "grey" | "gray" => Some(colours::GREY),
            "red" => Some(colours::RED),
            "green" => Some(colours::GREEN),
            "blue" => Some(colours::BLUE),
            "cyan" => Some(colours::CYAN),
            "magenta" => Some(colours::MAGENTA),
            "yellow" => Some(colours::YELLOW),
            other => other.strip_prefix('#').and_then(Colour::from_hex),
        };
        colour.ok_or_else(|| LayoutError::InvalidColour(s.to_string()))
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const GREY: Colour = Colour::Grey { g: 0.5 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    pub const CYAN: Colour = Colour::CMYK {
        c: 1.0,
        m: 0.0,
        y: 0.0,
        k: 0.0,
    };
    pub const MAGENTA: Colour = Colour::CMYK {
        c: 0.0,
        m: 1.0,
        y: 0.0,
        k: 0.0,
    };
    pub const YELLOW: Colour = Colour::CMYK {
        c: 0.0,
        m: 0.0,
        y: 1.0,
        k: 0.0,
    };

    /// Box outline of the debug overlay
    pub(crate) const DEBUG_BOX: Colour = Colour::RGB {
        r: 0x31 as f32 / 255.0,
        g: 0x20 as f32 / 255.0,
        b: 0xE0 as f32 / 255.0,
    };
    /// Horizontal anchor line of the debug overlay
    pub(crate) const DEBUG_ANCHOR: Colour = Colour::RGB {
        r: 0x59 as f32 / 255.0,
        g: 0xCE as f32 / 255.0,
        b: 0x8F as f32 / 255.0,
    };
    /// Vertical reference line of the debug overlay
    pub(crate) const DEBUG_BASELINE: Colour = Colour::RGB {
        r: 0xB9 as f32 / 255.0,
        g: 0x00 as f32 / 255.0,
        b: 0x5B as f32 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colours() {
        assert_eq!("black".parse::<Colour>().unwrap(), colours::BLACK);
        assert_eq!(" Red ".parse::<Colour>().unwrap(), colours::RED);
        assert_eq!(
            "#fff".parse::<Colour>().unwrap(),
            Colour::new_rgb(1.0, 1.0, 1.0)
        );
        assert_eq!(
            "#ff0080".parse::<Colour>().unwrap(),
            Colour::new_rgb_bytes(255, 0, 128)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "#12".parse::<Colour>(),
            Err(LayoutError::InvalidColour(_))
        ));
        assert!("chartreuse-ish".parse::<Colour>().is_err());
    }
}
