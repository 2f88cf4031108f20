//! Vehicle catalog — the hand-authored colors and options for one vehicle.
//!
//! RULE: A catalog is immutable once loaded.
//! Every vehicle page shares this one schema; per-vehicle data lives
//! in data/vehicles/*.json, never inline in code.

use crate::{
    error::{DealerError, DealerResult},
    types::{VehicleId, Yen},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category used for options that declare none.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name:          String,
    pub monthly_delta: Yen,
    pub swatch:        String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleOption {
    pub name:          String,
    pub monthly_delta: Yen,
    #[serde(default)]
    pub is_default_selected: bool,
    #[serde(default)]
    pub category: Option<String>,
    /// Options evicted when this one is toggled on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incompatible_with: Vec<String>,
}

impl VehicleOption {
    pub fn category_or_other(&self) -> &str {
        self.category.as_deref().unwrap_or(OTHER_CATEGORY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub vehicle_id: VehicleId,
    pub label:      String,
    pub base_price: Yen,
    pub colors:     Vec<ColorOption>,
    #[serde(default)]
    pub options:    Vec<VehicleOption>,
}

impl Catalog {
    pub fn color(&self, name: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.name == name)
    }

    pub fn option(&self, name: &str) -> Option<&VehicleOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// The color a fresh selection starts from.
    pub fn default_color(&self) -> Option<&ColorOption> {
        self.colors.first()
    }

    pub fn default_option_names(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.is_default_selected)
            .map(|o| o.name.as_str())
    }

    /// Check the structural rules every catalog must satisfy:
    /// at least one color, unique color and option names, incompatibility
    /// lists that only name other known options, and a most expensive
    /// selection whose total still fits in `Yen`.
    pub fn validate(&self) -> DealerResult<()> {
        if self.colors.is_empty() {
            return Err(self.invalid("catalog has no colors".into()));
        }

        let mut seen = HashSet::new();
        for color in &self.colors {
            if !seen.insert(color.name.as_str()) {
                return Err(self.invalid(format!("duplicate color '{}'", color.name)));
            }
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.name.as_str()) {
                return Err(self.invalid(format!("duplicate option '{}'", option.name)));
            }
        }

        for option in &self.options {
            for other in &option.incompatible_with {
                if *other == option.name {
                    return Err(self.invalid(format!(
                        "option '{}' lists itself as incompatible",
                        option.name
                    )));
                }
                if !seen.contains(other.as_str()) {
                    return Err(self.invalid(format!(
                        "option '{}' is incompatible with unknown option '{other}'",
                        option.name
                    )));
                }
            }
        }

        if self.max_total().is_none() {
            return Err(self.invalid("maximum monthly total overflows".into()));
        }

        Ok(())
    }

    /// Base price plus the dearest color plus every option, or None on overflow.
    pub fn max_total(&self) -> Option<Yen> {
        let max_color = self.colors.iter().map(|c| c.monthly_delta).max().unwrap_or(0);
        self.options
            .iter()
            .try_fold(self.base_price.checked_add(max_color)?, |acc, o| {
                acc.checked_add(o.monthly_delta)
            })
    }

    fn invalid(&self, reason: String) -> DealerError {
        DealerError::InvalidCatalog {
            vehicle_id: self.vehicle_id.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str) -> VehicleOption {
        VehicleOption {
            name:                name.into(),
            monthly_delta:       1000,
            is_default_selected: false,
            category:            None,
            incompatible_with:   vec![],
        }
    }

    fn catalog(options: Vec<VehicleOption>) -> Catalog {
        Catalog {
            vehicle_id: "unit".into(),
            label:      "Unit".into(),
            base_price: 20_000,
            colors: vec![ColorOption {
                name:          "White".into(),
                monthly_delta: 0,
                swatch:        "#ffffff".into(),
            }],
            options,
        }
    }

    #[test]
    fn missing_category_falls_back_to_other() {
        assert_eq!(option("Mat").category_or_other(), OTHER_CATEGORY);
    }

    #[test]
    fn duplicate_option_names_rejected() {
        let c = catalog(vec![option("Nav"), option("Nav")]);
        assert!(matches!(c.validate(), Err(DealerError::InvalidCatalog { .. })));
    }

    #[test]
    fn unknown_incompatible_name_rejected() {
        let mut a = option("A");
        a.incompatible_with = vec!["Ghost".into()];
        assert!(catalog(vec![a]).validate().is_err());
    }

    #[test]
    fn self_incompatibility_rejected() {
        let mut a = option("A");
        a.incompatible_with = vec!["A".into()];
        assert!(catalog(vec![a]).validate().is_err());
    }

    #[test]
    fn overflowing_maximum_total_rejected() {
        let mut c = catalog(vec![option("Nav")]);
        c.base_price = Yen::MAX - 10;
        assert_eq!(c.max_total(), None);
        assert!(matches!(c.validate(), Err(DealerError::InvalidCatalog { .. })));

        c.base_price = Yen::MAX - 1000;
        assert_eq!(c.max_total(), Some(Yen::MAX));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_colors_rejected() {
        let mut c = catalog(vec![]);
        c.colors.clear();
        assert!(c.validate().is_err());
    }
}
