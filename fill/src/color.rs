///
/// A colour read from an SVG document
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    /// Red, green, blue and alpha components, each between 0 and 1
    Rgba(f32, f32, f32, f32),

    /// An opaque colour (used for `stop-color` values with no `stop-opacity`)
    Rgb(f32, f32, f32),
}

///
/// A colour along with whether or not it contained any transparency
///
/// Reading a colour this way lets the caller decide how a fill should be composited without
/// the reader having to track that state itself.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TranslucentColor {
    pub color:              Color,
    pub was_translucent:    bool,
}

impl Color {
    ///
    /// Returns this colour as RGBA components
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a),
            Color::Rgb(r, g, b)     => (*r, *g, *b, 1.0),
        }
    }

    ///
    /// The alpha component of this colour
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        self.to_rgba_components().3
    }

    ///
    /// Returns a copy of this colour with a different alpha value
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        let (r, g, b, _) = self.to_rgba_components();
        Color::Rgba(r, g, b, new_alpha)
    }

    ///
    /// True if this colour is not fully opaque
    ///
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.alpha_component() != 1.0
    }

    ///
    /// Reads this colour, tagging it with whether or not it's translucent
    ///
    #[inline]
    pub fn read_translucent(&self) -> TranslucentColor {
        TranslucentColor {
            color:              *self,
            was_translucent:    self.is_translucent(),
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::Rgba(1.0, 1.0, 1.0, 1.0)
    }
}
