//! Material selection for the aggregate calculator

use serde::{Deserialize, Serialize};

use super::estimator::resolve_density;
use crate::model::{Density, Material};

/// A material the aggregate calculator can offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsableMaterial {
    pub id: String,
    pub name: String,
    /// Resolved bulk density, always positive
    pub lb_per_ft3: f64,
    /// Density as stored in the record, before resolution
    pub source_density: Density,
    pub category: String,
}

/// Result of picking a material from the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialSelection<'a> {
    Selected(&'a UsableMaterial),
    /// No active material has a usable density
    NoMaterialAvailable,
}

impl<'a> MaterialSelection<'a> {
    pub fn material(&self) -> Option<&'a UsableMaterial> {
        match self {
            MaterialSelection::Selected(m) => Some(m),
            MaterialSelection::NoMaterialAvailable => None,
        }
    }

    pub fn lb_per_ft3(&self) -> Option<f64> {
        self.material().map(|m| m.lb_per_ft3)
    }
}

/// Active materials with a resolved density, in content order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalog {
    items: Vec<UsableMaterial>,
}

impl MaterialCatalog {
    /// Filter and resolve a raw material list
    ///
    /// Inactive entries are dropped first; ids and display names missing from
    /// the record fall back to the position within the active list. Entries
    /// without a usable density are then discarded.
    pub fn from_materials(materials: &[Material]) -> Self {
        let items = materials
            .iter()
            .filter(|m| m.is_active())
            .enumerate()
            .filter_map(|(i, m)| {
                let lb_per_ft3 = resolve_density(m)?;
                let source_density = m.density()?;
                let id = m.id.clone().unwrap_or_else(|| i.to_string());
                let name = m
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Material {}", i + 1));
                let category = m
                    .category
                    .clone()
                    .unwrap_or_else(|| "aggregate".to_string());
                Some(UsableMaterial {
                    id,
                    name,
                    lb_per_ft3,
                    source_density,
                    category,
                })
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[UsableMaterial] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&UsableMaterial> {
        self.items.iter().find(|m| m.id == id)
    }

    /// The calculator's initial selection
    pub fn default_selection(&self) -> MaterialSelection<'_> {
        match self.items.first() {
            Some(m) => MaterialSelection::Selected(m),
            None => MaterialSelection::NoMaterialAvailable,
        }
    }

    /// Select by id, falling back to the first material for unknown ids
    pub fn select(&self, id: Option<&str>) -> MaterialSelection<'_> {
        match id.and_then(|id| self.get(id)) {
            Some(m) => MaterialSelection::Selected(m),
            None => self.default_selection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_materials() -> Vec<Material> {
        vec![
            Material {
                id: Some("a".to_string()),
                active: Some(true),
                density_lb_per_ft3: Some(120.0),
                ..Default::default()
            },
            Material {
                id: Some("b".to_string()),
                active: Some(false),
                density_lb_per_ft3: Some(100.0),
                ..Default::default()
            },
            Material {
                id: Some("c".to_string()),
                active: Some(true),
                density_tons_per_cy: Some(1.5),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_filtering_keeps_active_resolved_in_order() {
        let catalog = MaterialCatalog::from_materials(&mixed_materials());
        assert_eq!(catalog.len(), 2);
        let items = catalog.items();
        assert_eq!(items[0].id, "a");
        assert!((items[0].lb_per_ft3 - 120.0).abs() < f64::EPSILON);
        assert_eq!(items[1].id, "c");
        assert!((items[1].lb_per_ft3 - 111.11).abs() < 0.01);
        assert_eq!(items[1].source_density, Density::TonsPerCubicYard(1.5));
    }

    #[test]
    fn test_materials_without_density_are_dropped() {
        let materials = vec![
            Material {
                name: Some("No density".to_string()),
                ..Default::default()
            },
            Material::with_lb_per_ft3("ok", "Sand", 99.0),
        ];
        let catalog = MaterialCatalog::from_materials(&materials);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].id, "ok");
    }

    #[test]
    fn test_fallback_id_name_category() {
        let materials = vec![
            Material {
                active: Some(false),
                density_lb_per_ft3: Some(90.0),
                ..Default::default()
            },
            Material {
                name: Some("  River Rock  ".to_string()),
                density_lb_per_ft3: Some(100.0),
                ..Default::default()
            },
            Material {
                name: Some("   ".to_string()),
                density_lb_per_ft3: Some(110.0),
                category: Some("base".to_string()),
                ..Default::default()
            },
        ];
        let catalog = MaterialCatalog::from_materials(&materials);
        let items = catalog.items();
        // positions count within the active list
        assert_eq!(items[0].id, "0");
        assert_eq!(items[0].name, "River Rock");
        assert_eq!(items[0].category, "aggregate");
        assert_eq!(items[1].id, "1");
        assert_eq!(items[1].name, "Material 2");
        assert_eq!(items[1].category, "base");
    }

    #[test]
    fn test_empty_catalog_signals_no_material() {
        let catalog = MaterialCatalog::from_materials(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.default_selection(), MaterialSelection::NoMaterialAvailable);
        assert_eq!(catalog.select(Some("a")), MaterialSelection::NoMaterialAvailable);
        assert_eq!(catalog.select(None).lb_per_ft3(), None);
    }

    #[test]
    fn test_all_inactive_signals_no_material() {
        let mut m = Material::with_lb_per_ft3("x", "Gravel", 100.0);
        m.active = Some(false);
        let catalog = MaterialCatalog::from_materials(&[m]);
        assert_eq!(catalog.default_selection(), MaterialSelection::NoMaterialAvailable);
    }

    #[test]
    fn test_select_by_id_and_fallback() {
        let catalog = MaterialCatalog::from_materials(&mixed_materials());
        assert_eq!(catalog.select(Some("c")).material().map(|m| m.id.as_str()), Some("c"));
        assert_eq!(catalog.select(Some("zzz")).material().map(|m| m.id.as_str()), Some("a"));
        assert_eq!(catalog.select(None).material().map(|m| m.id.as_str()), Some("a"));
        // inactive ids are not selectable
        assert_eq!(catalog.select(Some("b")).material().map(|m| m.id.as_str()), Some("a"));
    }
}
