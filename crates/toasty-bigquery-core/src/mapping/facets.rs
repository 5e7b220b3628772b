/// Parameters that refine a base store type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Facets {
    /// Total number of significant digits (`NUMERIC(P, S)`)
    pub precision: Option<u32>,

    /// Digits after the decimal point
    pub scale: Option<u32>,

    /// Maximum length of `STRING(L)` and `BYTES(L)`
    pub size: Option<u32>,

    pub nullable: bool,
}

impl Facets {
    pub fn precision(precision: u32, scale: Option<u32>) -> Facets {
        Facets {
            precision: Some(precision),
            scale,
            ..Facets::default()
        }
    }

    pub fn size(size: u32) -> Facets {
        Facets {
            size: Some(size),
            ..Facets::default()
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Facets {
        self.nullable = nullable;
        self
    }

    /// Returns `true` if no facet affects the store type name.
    pub fn is_unparameterized(&self) -> bool {
        self.precision.is_none() && self.scale.is_none() && self.size.is_none()
    }
}
