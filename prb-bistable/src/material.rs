use crate::Error;

/// A named Young's modulus preset.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Display name
    pub name: &'static str,
    /// Young's modulus (Pa)
    pub e: f64,
}

/// Catalog of common flexure materials.
pub const MATERIALS: &[Material] = &[
    Material { name: "Polypropylene", e: 1.4e9 },
    Material { name: "HDPE", e: 1.1e9 },
    Material { name: "Nylon 6/6", e: 2.8e9 },
    Material { name: "ABS", e: 2.3e9 },
    Material { name: "PLA", e: 3.5e9 },
    Material { name: "Polycarbonate", e: 2.4e9 },
    Material { name: "Aluminum 7075", e: 71.7e9 },
    Material { name: "Titanium Ti-6Al-4V", e: 113.8e9 },
    Material { name: "Spring Steel", e: 207e9 },
];

impl Material {
    /// Find a material by name, ignoring case.
    pub fn find(name: &str) -> Result<Self, Error> {
        MATERIALS
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| Error::UnknownMaterial(name.to_string()))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:.1} GPa)", self.name, self.e * 1e-9)
    }
}
