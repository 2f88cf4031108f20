//! Configurator session. One page instance's catalog and selection.
//!
//! RULES:
//!   - A session owns its selection exclusively; nothing is shared.
//!   - State is discarded with the session. Nothing is persisted.
//!   - Every command runs to completion synchronously.

use crate::{
    catalog::Catalog,
    command::ConfiguratorCommand,
    error::DealerResult,
    event::ConfiguratorEvent,
    grouping::group_by_category,
    price_engine::{self, PriceQuote},
    selection::{self, SelectionState},
    types::Yen,
};
use serde::Serialize;

pub struct ConfiguratorSession {
    catalog:   Catalog,
    selection: SelectionState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorSwatchView {
    pub name:          String,
    pub swatch:        String,
    pub monthly_delta: Yen,
    pub selected:      bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionCardView {
    pub name:          String,
    pub monthly_delta: Yen,
    pub selected:      bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionGroupView {
    pub category: String,
    pub options:  Vec<OptionCardView>,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ConfiguratorView {
    pub vehicle_id: String,
    pub label:      String,
    pub colors:     Vec<ColorSwatchView>,
    pub groups:     Vec<OptionGroupView>,
    pub quote:      PriceQuote,
}

impl ConfiguratorSession {
    /// Start a session on a validated catalog.
    pub fn new(catalog: Catalog) -> DealerResult<Self> {
        catalog.validate()?;
        let selection = SelectionState::initial(&catalog);
        log::debug!(
            "configurator: session opened for {} ({} colors, {} options, {} default-on)",
            catalog.vehicle_id,
            catalog.colors.len(),
            catalog.options.len(),
            selection.selected_options.len()
        );
        Ok(Self { catalog, selection })
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn selection(&self) -> &SelectionState { &self.selection }

    pub fn total(&self) -> Yen {
        price_engine::compute_total(&self.catalog, &self.selection)
    }

    pub fn quote(&self) -> PriceQuote {
        price_engine::quote(&self.catalog, &self.selection)
    }

    /// Apply one user command and report what changed.
    pub fn apply(&mut self, command: ConfiguratorCommand) -> Vec<ConfiguratorEvent> {
        let vehicle = &self.catalog.vehicle_id;

        match command {
            ConfiguratorCommand::SelectColor { color } => {
                if self.catalog.color(&color).is_none() {
                    let reason = format!("Unknown color: {color}");
                    log::warn!("configurator: {vehicle}: {reason}");
                    return vec![rejected("select_color", reason)];
                }
                self.selection = selection::select_color(&self.selection, &self.catalog, &color);
                let total = self.total();
                log::info!("configurator: {vehicle} color -> {color} (total ¥{total})");
                vec![ConfiguratorEvent::ColorSelected { color, total }]
            }

            ConfiguratorCommand::ToggleOption { option } => {
                if self.catalog.option(&option).is_none() {
                    let reason = format!("Unknown option: {option}");
                    log::warn!("configurator: {vehicle}: {reason}");
                    return vec![rejected("toggle_option", reason)];
                }
                let evicted = selection::evictions(&self.selection, &self.catalog, &option);
                self.selection = selection::toggle_option(&self.selection, &self.catalog, &option);
                let selected = self.selection.is_selected(&option);
                let total = self.total();
                if evicted.is_empty() {
                    log::info!("configurator: {vehicle} {option} selected={selected} (total ¥{total})");
                } else {
                    log::info!(
                        "configurator: {vehicle} {option} selected, evicted {:?} (total ¥{total})",
                        evicted
                    );
                }
                vec![ConfiguratorEvent::OptionToggled { option, selected, evicted, total }]
            }

            ConfiguratorCommand::Reset => {
                self.selection = SelectionState::initial(&self.catalog);
                let total = self.total();
                log::info!("configurator: {vehicle} selection reset (total ¥{total})");
                vec![ConfiguratorEvent::SelectionReset { total }]
            }
        }
    }

    pub fn view(&self) -> ConfiguratorView {
        let colors = self
            .catalog
            .colors
            .iter()
            .map(|c| ColorSwatchView {
                name:          c.name.clone(),
                swatch:        c.swatch.clone(),
                monthly_delta: c.monthly_delta,
                selected:      c.name == self.selection.selected_color,
            })
            .collect();

        let groups = group_by_category(&self.catalog.options)
            .into_iter()
            .map(|g| OptionGroupView {
                category: g.category.to_string(),
                options: g
                    .options
                    .into_iter()
                    .map(|o| OptionCardView {
                        name:          o.name.clone(),
                        monthly_delta: o.monthly_delta,
                        selected:      self.selection.is_selected(&o.name),
                    })
                    .collect(),
            })
            .collect();

        ConfiguratorView {
            vehicle_id: self.catalog.vehicle_id.clone(),
            label:      self.catalog.label.clone(),
            colors,
            groups,
            quote:      self.quote(),
        }
    }
}

fn rejected(command_type: &str, reason: String) -> ConfiguratorEvent {
    ConfiguratorEvent::CommandRejected {
        command_type: command_type.to_string(),
        reason,
    }
}
