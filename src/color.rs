use palette::{IntoColor, Lab, LinSrgb, Srgb};

/// An opaque 8-bit RGB color.
///
/// Equality, hashing and ordering are component-wise, so two colors are the
/// same entity iff red, green and blue all match. The derived ordering
/// (red, then green, then blue) is the canonical order used for tie-breaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Euclidean distance in RGB space.
    ///
    /// Component differences are taken in `i32` before squaring, so no
    /// combination of inputs can wrap.
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = self.red as i32 - other.red as i32;
        let dg = self.green as i32 - other.green as i32;
        let db = self.blue as i32 - other.blue as i32;
        ((dr * dr + dg * dg + db * db) as f64).sqrt()
    }

    /// Uppercase `RRGGBB` hex string, no leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// CIE L*a*b* coordinates (D65) of this color.
    pub fn to_lab(&self) -> Lab {
        let linear: LinSrgb<f32> = Srgb::<u8>::from(*self).into_linear();
        linear.into_color()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(c: Color) -> Self {
        Srgb::new(c.red, c.green, c.blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}

/// Metric used to weight the edges of the complete color graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Euclidean distance over the raw RGB components.
    #[default]
    Rgb,
    /// CIE76: Euclidean distance in CIE L*a*b*.
    Lab,
}

impl DistanceMetric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Lab => "lab",
        }
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "lab" | "cie76" => Ok(Self::Lab),
            other => anyhow::bail!("Unknown distance metric: {other}"),
        }
    }
}

/// Euclidean distance between two Lab points, widened to `f64`.
pub(crate) fn lab_distance(a: &Lab, b: &Lab) -> f64 {
    let dl = a.l as f64 - b.l as f64;
    let da = a.a as f64 - b.a as f64;
    let db = a.b as f64 - b.b as f64;
    (dl * dl + da * da + db * db).sqrt()
}
