//! Catalog API Handlers
//!
//! Catalog entries carry the prices the calculators would charge right now,
//! i.e. built-in defaults with the rule snapshot applied.

use axum::extract::State;
use serde::Serialize;
use shared::models::{
    ANTI_SLIP, COLOR_MIXING_FEE, Color, ColorId, CrackCondition, FLOOR_MATERIALS, Finish,
    FloorQuality, MIN_SERVICE_FEE, MaterialId, PricingRule, RuleCategory, SELF_LEVELING,
    SURFACE_PROTECTION, ServiceType, SurfaceOption,
};

use crate::core::ServerState;
use crate::pricing::{RuleTable, resolve_base_price};
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Serialize)]
pub struct EpoxyCatalog {
    pub materials: Vec<MaterialEntry>,
    pub floor_qualities: Vec<ConditionEntry<FloorQuality>>,
    pub crack_conditions: Vec<ConditionEntry<CrackCondition>>,
    pub options: Vec<OptionEntry>,
    pub color_mixing_fee: f64,
    pub min_service_fee: f64,
}

#[derive(Debug, Serialize)]
pub struct MaterialEntry {
    pub id: MaterialId,
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_m2: f64,
    pub finishes: Vec<&'static Finish>,
    pub colors: Vec<&'static Color>,
    /// Colors that do not incur the color-mixing fee
    pub base_colors: Vec<ColorId>,
}

#[derive(Debug, Serialize)]
pub struct ConditionEntry<T> {
    pub id: T,
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_m2: f64,
}

#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_m2: f64,
}

/// GET /api/catalog/epoxy
pub async fn epoxy(State(state): State<ServerState>) -> AppResult<ApiResponse<EpoxyCatalog>> {
    let rules = state.pricing_rules();
    Ok(ApiResponse::success(build_epoxy_catalog(&rules)))
}

fn build_epoxy_catalog(rules: &[PricingRule]) -> EpoxyCatalog {
    let table = RuleTable::new(Some(rules), ServiceType::Epoxy);
    let price = |key: &str, default: f64| {
        table.value(RuleCategory::Option, key).unwrap_or(default)
    };

    let materials = FLOOR_MATERIALS
        .iter()
        .map(|m| MaterialEntry {
            id: m.id,
            name: m.name,
            description: m.description,
            // Catalog materials ignore the area, any value works
            price_per_m2: resolve_base_price(m.id, 0.0, Some(rules)),
            finishes: m.finishes(),
            colors: m.colors(),
            base_colors: if m.base_colors.is_empty() {
                m.allowed_colors.to_vec()
            } else {
                m.base_colors.to_vec()
            },
        })
        .collect();

    let floor_qualities = FloorQuality::ALL
        .into_iter()
        .map(|q| {
            let info = q.info();
            let price_per_m2 = match q {
                FloorQuality::Poor => price("quality_poor", info.price_per_m2),
                _ => info.price_per_m2,
            };
            ConditionEntry {
                id: q,
                name: info.name,
                description: info.description,
                price_per_m2,
            }
        })
        .collect();

    let crack_conditions = CrackCondition::ALL
        .into_iter()
        .map(|c| {
            let info = c.info();
            let price_per_m2 = match c {
                CrackCondition::Severe => price("crack_severe", info.price_per_m2),
                _ => info.price_per_m2,
            };
            ConditionEntry {
                id: c,
                name: info.name,
                description: info.description,
                price_per_m2,
            }
        })
        .collect();

    let options = [ANTI_SLIP, SURFACE_PROTECTION, SELF_LEVELING]
        .into_iter()
        .map(|o: SurfaceOption| OptionEntry {
            id: o.id,
            name: o.name,
            description: o.description,
            price_per_m2: price(o.id, o.price_per_m2),
        })
        .collect();

    EpoxyCatalog {
        materials,
        floor_qualities,
        crack_conditions,
        options,
        color_mixing_fee: price("color_mixing", COLOR_MIXING_FEE),
        min_service_fee: price("min_fee", MIN_SERVICE_FEE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults() {
        let catalog = build_epoxy_catalog(&[]);
        assert_eq!(catalog.materials.len(), FLOOR_MATERIALS.len());
        assert_eq!(catalog.materials[1].id, MaterialId::SolidEpoxy);
        assert_eq!(catalog.materials[1].price_per_m2, 45_000.0);
        assert_eq!(catalog.materials[1].base_colors, vec![ColorId::Gray, ColorId::Green]);
        assert_eq!(catalog.min_service_fee, 300_000.0);
        assert_eq!(catalog.options.len(), 3);
    }

    #[test]
    fn test_catalog_reflects_overrides() {
        let rules = vec![
            PricingRule::new(ServiceType::Epoxy, RuleCategory::MaterialBase, "solid_epoxy", 48_000.0),
            PricingRule::new(ServiceType::Epoxy, RuleCategory::Option, "anti_slip", 9_999.0),
            PricingRule::new(ServiceType::Epoxy, RuleCategory::Option, "quality_poor", 20_000.0),
        ];
        let catalog = build_epoxy_catalog(&rules);
        assert_eq!(catalog.materials[1].price_per_m2, 48_000.0);
        let anti_slip = catalog.options.iter().find(|o| o.id == "anti_slip").unwrap();
        assert_eq!(anti_slip.price_per_m2, 9_999.0);
        let poor = catalog
            .floor_qualities
            .iter()
            .find(|q| q.id == FloorQuality::Poor)
            .unwrap();
        assert_eq!(poor.price_per_m2, 20_000.0);
    }
}
