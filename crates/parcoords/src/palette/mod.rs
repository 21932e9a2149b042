//! Color scales: continuous scale names and qualitative palettes by size.

mod brewer;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ParcoordsError, Result};

/// Fallback scale when no qualitative palette applies.
pub const DEFAULT_COLOR_SCALE: &str = "Jet";

/// Named continuous scales understood by the rendering layer.
pub const CONTINUOUS_COLOR_SCALES: &[&str] = &[
    "Greys", "YlGnBu", "Greens", "YlOrRd", "Bluered", "RdBu", "Reds", "Blues", "Picnic",
    "Rainbow", "Portland", "Jet", "Hot", "Blackbody", "Earth", "Electric", "Viridis", "Cividis",
];

/// A color scale as handed to the rendering layer.
///
/// Serializes either as a bare name (`"Jet"`) or as a list of
/// `[position, color]` stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorScale {
    /// A scale the renderer resolves by name.
    Named(String),
    /// Explicit stops with positions spread evenly over `[0, 1]`.
    Discrete(Vec<(f64, String)>),
}

impl ColorScale {
    /// Spread colors evenly over `[0, 1]`.
    pub fn from_colors(colors: &[String]) -> Self {
        let stops = match colors {
            [] => Vec::new(),
            [only] => vec![(0.0, only.clone()), (1.0, only.clone())],
            _ => {
                let last = (colors.len() - 1) as f64;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i as f64 / last, c.clone()))
                    .collect()
            }
        };
        ColorScale::Discrete(stops)
    }

    /// The scale name, for named scales.
    pub fn name(&self) -> Option<&str> {
        match self {
            ColorScale::Named(name) => Some(name),
            ColorScale::Discrete(_) => None,
        }
    }
}

/// Qualitative palettes keyed by number of colors, then by name.
///
/// Registration order is kept: the first name registered for a size is that
/// size's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteRegistry {
    palettes: IndexMap<usize, IndexMap<String, Vec<String>>>,
}

impl PaletteRegistry {
    /// A registry with no palettes.
    pub fn empty() -> Self {
        Self {
            palettes: IndexMap::new(),
        }
    }

    /// The ColorBrewer qualitative palettes for every size they support.
    pub fn brewer() -> Self {
        let mut registry = Self::empty();
        let largest = brewer::QUALITATIVE
            .iter()
            .map(|(_, colors)| colors.len())
            .max()
            .unwrap_or(0);

        for n in brewer::MIN_COLORS..=largest {
            for (name, colors) in brewer::QUALITATIVE {
                if colors.len() >= n {
                    let colors = colors[..n].iter().map(|c| c.to_string()).collect();
                    registry.insert(n, name, colors);
                }
            }
        }
        registry
    }

    /// Load a registry from JSON of the form `{"3": {"Set1": [...]}, ...}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Check that every palette is filed under its own number of colors.
    pub fn validate(&self) -> Result<()> {
        for (n, palettes) in &self.palettes {
            for (name, colors) in palettes {
                if colors.len() != *n {
                    return Err(ParcoordsError::Config(format!(
                        "palette '{}' is listed under {} colors but has {}",
                        name,
                        n,
                        colors.len()
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Register a palette under its number of colors.
    pub fn register(&mut self, name: impl Into<String>, colors: Vec<String>) -> Result<()> {
        let name = name.into();
        if colors.is_empty() {
            return Err(ParcoordsError::Config(format!("palette '{}' has no colors", name)));
        }
        self.insert(colors.len(), &name, colors);
        Ok(())
    }

    fn insert(&mut self, n: usize, name: &str, colors: Vec<String>) {
        self.palettes
            .entry(n)
            .or_default()
            .insert(name.to_string(), colors);
    }

    /// Colors of the named palette with exactly `n` colors.
    pub fn get(&self, n: usize, name: &str) -> Option<&[String]> {
        self.palettes.get(&n)?.get(name).map(Vec::as_slice)
    }

    /// Palette names available with exactly `n` colors, in registration order.
    pub fn names_for(&self, n: usize) -> Vec<&str> {
        self.palettes
            .get(&n)
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The default palette for `n` colors.
    pub fn first_name_for(&self, n: usize) -> Option<&str> {
        self.palettes.get(&n)?.keys().next().map(String::as_str)
    }

    /// Sizes that have at least one palette.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.palettes.keys().copied()
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::brewer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brewer_sizes() {
        let registry = PaletteRegistry::brewer();
        assert_eq!(registry.sizes().collect::<Vec<_>>(), (3..=12).collect::<Vec<_>>());
        assert_eq!(registry.names_for(3).len(), 8);
        assert_eq!(registry.names_for(9), vec!["Paired", "Pastel1", "Set1", "Set3"]);
        assert_eq!(registry.names_for(12), vec!["Paired", "Set3"]);
        assert!(registry.names_for(2).is_empty());
        assert!(registry.names_for(13).is_empty());
    }

    #[test]
    fn test_first_name() {
        let registry = PaletteRegistry::brewer();
        assert_eq!(registry.first_name_for(3), Some("Accent"));
        assert_eq!(registry.first_name_for(10), Some("Paired"));
        assert_eq!(registry.first_name_for(40), None);
    }

    #[test]
    fn test_get_truncates_to_size() {
        let registry = PaletteRegistry::brewer();
        let set1 = registry.get(3, "Set1").unwrap();
        assert_eq!(set1, &["rgb(228,26,28)", "rgb(55,126,184)", "rgb(77,175,74)"]);
        assert!(registry.get(10, "Set1").is_none());
    }

    #[test]
    fn test_discrete_stops() {
        let colors: Vec<String> = vec!["red".into(), "green".into(), "blue".into()];
        let scale = ColorScale::from_colors(&colors);
        assert_eq!(
            scale,
            ColorScale::Discrete(vec![
                (0.0, "red".into()),
                (0.5, "green".into()),
                (1.0, "blue".into()),
            ])
        );
        assert_eq!(scale.name(), None);
    }

    #[test]
    fn test_color_scale_json() {
        let named = serde_json::to_string(&ColorScale::Named("Jet".into())).unwrap();
        assert_eq!(named, "\"Jet\"");

        let discrete = serde_json::to_string(&ColorScale::from_colors(&["red".to_string()])).unwrap();
        assert_eq!(discrete, "[[0.0,\"red\"],[1.0,\"red\"]]");
    }

    #[test]
    fn test_json_roundtrip_and_validation() {
        let mut registry = PaletteRegistry::empty();
        registry
            .register("mono", vec!["black".into(), "white".into()])
            .unwrap();
        let json = registry.to_json().unwrap();
        assert_eq!(PaletteRegistry::from_json(&json).unwrap(), registry);

        let bad = r#"{"3": {"short": ["red"]}}"#;
        assert!(matches!(PaletteRegistry::from_json(bad), Err(ParcoordsError::Config(_))));
    }

    #[test]
    fn test_register_rejects_empty() {
        let mut registry = PaletteRegistry::empty();
        assert!(registry.register("none", vec![]).is_err());
    }
}
