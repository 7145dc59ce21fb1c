//! Estimate use cases for the aggregate and concrete calculators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yardstick_domain::repository::ContentRepository;
use yardstick_domain::service::{estimate_aggregate, estimate_concrete, MaterialCatalog, UsableMaterial};
use yardstick_domain::{
    AggregateEstimate, CalculatorSettings, ConcreteEstimate, DepthUnit, Material, ProjectDimensions,
};
use yardstick_types::Result;

/// Raw aggregate calculator input, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct AggregateRequest {
    pub length: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
    pub depth_unit: DepthUnit,
    pub material_id: Option<String>,
    /// `None` uses the calculator default
    pub waste: Option<String>,
}

/// Raw concrete calculator input
#[derive(Debug, Clone, Default)]
pub struct ConcreteRequest {
    pub length: Option<String>,
    pub width: Option<String>,
    pub thickness_in: Option<String>,
    pub waste: Option<String>,
}

/// Aggregate estimate together with the inputs it was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateQuote {
    /// Selected material; `None` when no material is available
    pub material: Option<UsableMaterial>,
    pub dimensions: ProjectDimensions,
    pub depth_unit: DepthUnit,
    pub estimate: AggregateEstimate,
    pub input_complete: bool,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteQuote {
    pub dimensions: ProjectDimensions,
    pub estimate: ConcreteEstimate,
    pub input_complete: bool,
    pub generated_at: DateTime<Utc>,
}

impl AggregateQuote {
    pub fn material_available(&self) -> bool {
        self.material.is_some()
    }
}

/// Runs the calculators against one snapshot of site content
#[derive(Debug, Clone)]
pub struct EstimateService {
    catalog: MaterialCatalog,
    aggregate_waste_pct: f64,
    concrete_waste_pct: f64,
}

impl EstimateService {
    pub fn new(materials: &[Material], settings: &CalculatorSettings) -> Self {
        let catalog = MaterialCatalog::from_materials(materials);
        tracing::debug!(
            total = materials.len(),
            usable = catalog.len(),
            "built material catalog"
        );
        if catalog.is_empty() {
            tracing::warn!("no active material with a usable density");
        }
        Self {
            catalog,
            aggregate_waste_pct: settings.aggregate_waste_percent(),
            concrete_waste_pct: settings.concrete_waste_percent(),
        }
    }

    pub fn from_repository<R: ContentRepository>(repo: &R) -> Result<Self> {
        let materials = repo.find_materials()?;
        let settings = repo.calculator_settings()?;
        Ok(Self::new(&materials, &settings))
    }

    /// Replace the content defaults with locally configured waste allowances
    pub fn with_waste_overrides(mut self, aggregate: Option<f64>, concrete: Option<f64>) -> Self {
        if let Some(pct) = aggregate {
            self.aggregate_waste_pct = pct;
        }
        if let Some(pct) = concrete {
            self.concrete_waste_pct = pct;
        }
        self
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn aggregate_waste_percent(&self) -> f64 {
        self.aggregate_waste_pct
    }

    pub fn concrete_waste_percent(&self) -> f64 {
        self.concrete_waste_pct
    }

    /// Aggregate tonnage for the selected (or first) material
    pub fn aggregate(&self, request: &AggregateRequest) -> AggregateQuote {
        let dimensions = ProjectDimensions::from_raw(
            request.length.as_deref(),
            request.width.as_deref(),
            request.depth.as_deref(),
            request.waste.as_deref(),
            self.aggregate_waste_pct,
        );
        let selection = self.catalog.select(request.material_id.as_deref());
        let estimate = estimate_aggregate(&dimensions, request.depth_unit, selection.lb_per_ft3());

        if let (Some(id), Some(selected)) = (request.material_id.as_deref(), selection.material()) {
            if selected.id != id {
                tracing::warn!(requested = id, using = %selected.id, "unknown material id; using first material");
            }
        }

        AggregateQuote {
            material: selection.material().cloned(),
            dimensions,
            depth_unit: request.depth_unit,
            estimate,
            input_complete: dimensions.is_complete(),
            generated_at: Utc::now(),
        }
    }

    /// Concrete cubic yards
    pub fn concrete(&self, request: &ConcreteRequest) -> ConcreteQuote {
        let dimensions = ProjectDimensions::from_raw(
            request.length.as_deref(),
            request.width.as_deref(),
            request.thickness_in.as_deref(),
            request.waste.as_deref(),
            self.concrete_waste_pct,
        );
        let estimate = estimate_concrete(&dimensions);

        ConcreteQuote {
            dimensions,
            estimate,
            input_complete: dimensions.is_complete(),
            generated_at: Utc::now(),
        }
    }
}
