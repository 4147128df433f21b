use crate::units::*;

/// A rectangle on the drawing surface, specified by its top-left corner and its size.
/// The y axis grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: Px,
    /// The y-coordinate of the top edge.
    pub y: Px,
    /// Horizontal extent; layouts treat a non-positive width as empty.
    pub width: Px,
    /// Vertical extent; layouts treat a non-positive height as empty.
    pub height: Px,
}

impl Rect {
    pub fn new<X, Y, W, H>(x: X, y: Y, width: W, height: H) -> Rect
    where
        X: Into<Px>,
        Y: Into<Px>,
        W: Into<Px>,
        H: Into<Px>,
    {
        Rect {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// The x-coordinate of the right edge
    pub fn x2(&self) -> Px {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge
    pub fn y2(&self) -> Px {
        self.y + self.height
    }

    /// The point at the centre of the rectangle
    pub fn centre(&self) -> (Px, Px) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if both dimensions are strictly positive
    pub fn has_area(&self) -> bool {
        self.width.is_positive() && self.height.is_positive()
    }

    /// Converts the rectangle into PDF space, where the y axis grows upwards from the
    /// bottom of a page `page_height` tall.
    pub fn to_pdf(&self, page_height: Px) -> pdf_writer::Rect {
        pdf_writer::Rect {
            x1: self.x.into(),
            y1: (page_height - self.y2()).into(),
            x2: self.x2().into(),
            y2: (page_height - self.y).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_into_pdf_space() {
        let rect = Rect::new(10, 20, 100, 50);
        let pdf = rect.to_pdf(Px(200.0));
        assert_eq!(pdf.x1, 10.0);
        assert_eq!(pdf.x2, 110.0);
        assert_eq!(pdf.y1, 130.0);
        assert_eq!(pdf.y2, 180.0);
    }

    #[test]
    fn zero_width_has_no_area() {
        assert!(!Rect::new(0, 0, 0, 10).has_area());
        assert!(!Rect::new(0, 0, 10, -1).has_area());
        assert!(Rect::new(0, 0, 1, 1).has_area());
    }
}
