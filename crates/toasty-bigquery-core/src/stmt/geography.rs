use std::fmt;

/// A geography value in well-known-text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geography {
    wkt: String,
}

impl Geography {
    pub fn from_wkt(wkt: impl Into<String>) -> Geography {
        Geography { wkt: wkt.into() }
    }

    pub fn point(x: f64, y: f64) -> Geography {
        Geography::from_wkt(format!("POINT({x:?} {y:?})"))
    }

    pub fn as_wkt(&self) -> &str {
        &self.wkt
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wkt)
    }
}
