//! Price engine — (catalog, selection) -> monthly total.
//!
//! Pure and referentially transparent: safe to call on every render.
//! Names with no catalog match contribute zero rather than failing.

use crate::{catalog::Catalog, selection::SelectionState, types::Yen};
use serde::{Deserialize, Serialize};

/// Total monthly price for the given selection.
pub fn compute_total(catalog: &Catalog, selection: &SelectionState) -> Yen {
    let color_delta = catalog
        .color(&selection.selected_color)
        .map(|c| c.monthly_delta)
        .unwrap_or(0);

    // Validated catalogs never reach the cap; unvalidated ones saturate
    // instead of wrapping.
    selection
        .selected_options
        .iter()
        .filter_map(|name| catalog.option(name))
        .fold(catalog.base_price.saturating_add(color_delta), |acc, o| {
            acc.saturating_add(o.monthly_delta)
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Base,
    Color,
    Option,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind:          LineKind,
    pub label:         String,
    pub monthly_delta: Yen,
}

/// Itemized price for display. `total` always equals compute_total().
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub vehicle_id: String,
    pub lines:      Vec<LineItem>,
    pub total:      Yen,
    /// True when the selection costs more than the base price.
    pub has_extras: bool,
}

/// Build an itemized quote. Option lines follow catalog order,
/// not selection order, so the breakdown reads like the page.
pub fn quote(catalog: &Catalog, selection: &SelectionState) -> PriceQuote {
    let mut lines = vec![LineItem {
        kind:          LineKind::Base,
        label:         catalog.label.clone(),
        monthly_delta: catalog.base_price,
    }];

    if let Some(color) = catalog.color(&selection.selected_color) {
        lines.push(LineItem {
            kind:          LineKind::Color,
            label:         color.name.clone(),
            monthly_delta: color.monthly_delta,
        });
    }

    lines.extend(
        catalog
            .options
            .iter()
            .filter(|o| selection.is_selected(&o.name))
            .map(|o| LineItem {
                kind:          LineKind::Option,
                label:         o.name.clone(),
                monthly_delta: o.monthly_delta,
            }),
    );

    let total = compute_total(catalog, selection);

    PriceQuote {
        vehicle_id: catalog.vehicle_id.clone(),
        lines,
        total,
        has_extras: total > catalog.base_price,
    }
}
