use std::fmt;

/// The product under construction: a plain record of house attributes.
///
/// Every field starts at its zero value; builders fill fields in one step at a
/// time. The record has no identity beyond its attribute values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct House {
    pub walls: String,
    pub door: String,
    pub windows: u32,
    pub roof: String,
    pub has_pool: bool,
    pub has_garden: bool,
    pub has_solar_panels: bool,
}

impl fmt::Display for House {
    /// Fixed-order, comma-separated `Field: value` listing of every attribute.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Walls: {}, Door: {}, Windows: {}, Roof: {}, Swimming Pool: {}, Garden: {}, Solar Panels: {}",
            self.walls,
            self.door,
            self.windows,
            self.roof,
            self.has_pool,
            self.has_garden,
            self.has_solar_panels
        )
    }
}
