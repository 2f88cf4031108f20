use crate::{
    catalog::{Catalog, ColorOption, VehicleOption},
    error::{DealerError, DealerResult},
    types::VehicleId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Contact / mail provider ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Transactional-email API endpoint that accepts a JSON message.
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub from_address: String,
    /// Showroom inbox that receives every submission.
    pub to_address: String,
    pub subject_prefix: String,
    pub timeout_ms: u64,
    pub messages: ContactMessages,
}

/// User-facing messages. Shown verbatim on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessages {
    pub failure: String,
    pub invalid: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            failure: "送信に失敗しました。時間をおいて再度お試しください。".into(),
            invalid: "お名前・メールアドレス・お問い合わせ内容をご確認ください。".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContactConfigFile {
    endpoint: String,
    api_key_env: String,
    from_address: String,
    to_address: String,
    subject_prefix: String,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
    #[serde(default)]
    messages: ContactMessages,
}

fn default_timeout_ms() -> u64 { 10_000 }

// ── Site config ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub vehicles: BTreeMap<VehicleId, Catalog>,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Load from the data/ directory.
    /// In tests, use SiteConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let vehicles_dir = format!("{data_dir}/vehicles");
        let mut paths: Vec<_> = std::fs::read_dir(&vehicles_dir)
            .map_err(|e| anyhow::anyhow!("Cannot read {vehicles_dir}: {e}"))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut vehicles = BTreeMap::new();
        for path in paths {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
            let catalog: Catalog = serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
            catalog.validate()?;
            if vehicles.contains_key(&catalog.vehicle_id) {
                anyhow::bail!("Duplicate vehicle_id '{}' in {}", catalog.vehicle_id, path.display());
            }
            log::debug!("config: loaded catalog {} from {}", catalog.vehicle_id, path.display());
            vehicles.insert(catalog.vehicle_id.clone(), catalog);
        }

        let contact_path = format!("{data_dir}/contact/contact_config.json");
        let contact_content = std::fs::read_to_string(&contact_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {contact_path}: {e}"))?;
        let contact_file: ContactConfigFile = serde_json::from_str(&contact_content)?;

        log::info!("config: {} vehicle catalogs loaded from {data_dir}", vehicles.len());

        Ok(Self {
            vehicles,
            contact: ContactConfig {
                endpoint:       contact_file.endpoint,
                api_key_env:    contact_file.api_key_env,
                from_address:   contact_file.from_address,
                to_address:     contact_file.to_address,
                subject_prefix: contact_file.subject_prefix,
                timeout_ms:     contact_file.timeout_ms,
                messages:       contact_file.messages,
            },
        })
    }

    pub fn vehicle(&self, vehicle_id: &str) -> DealerResult<&Catalog> {
        self.vehicles
            .get(vehicle_id)
            .ok_or_else(|| DealerError::VehicleNotFound { vehicle_id: vehicle_id.to_string() })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        let compact = Catalog {
            vehicle_id: "compact".into(),
            label:      "Compact Hatch".into(),
            base_price: 22_000,
            colors: vec![
                ColorOption { name: "Pearl White".into(), monthly_delta: 0,   swatch: "#f4f4f2".into() },
                ColorOption { name: "Ruby Red".into(),    monthly_delta: 550, swatch: "#9b111e".into() },
            ],
            options: vec![
                VehicleOption {
                    name:                "Floor Mat".into(),
                    monthly_delta:       0,
                    is_default_selected: true,
                    category:            Some("Interior".into()),
                    incompatible_with:   vec![],
                },
                VehicleOption {
                    name:                "Navigation".into(),
                    monthly_delta:       3_500,
                    is_default_selected: false,
                    category:            Some("Interior".into()),
                    incompatible_with:   vec![],
                },
                VehicleOption {
                    name:                "Roof Rails".into(),
                    monthly_delta:       1_100,
                    is_default_selected: false,
                    category:            Some("Exterior".into()),
                    incompatible_with:   vec![],
                },
                VehicleOption {
                    name:                "Dashcam".into(),
                    monthly_delta:       800,
                    is_default_selected: false,
                    category:            None,
                    incompatible_with:   vec![],
                },
            ],
        };

        let minivan = Catalog {
            vehicle_id: "minivan".into(),
            label:      "Family Minivan".into(),
            base_price: 31_000,
            colors: vec![
                ColorOption { name: "Silver".into(), monthly_delta: 0, swatch: "#c0c0c0".into() },
            ],
            options: vec![
                VehicleOption {
                    name:                "Bench Seat".into(),
                    monthly_delta:       0,
                    is_default_selected: true,
                    category:            Some("Seating".into()),
                    incompatible_with:   vec![],
                },
                VehicleOption {
                    name:                "Captain Seats".into(),
                    monthly_delta:       2_200,
                    is_default_selected: false,
                    category:            Some("Seating".into()),
                    incompatible_with:   vec!["Bench Seat".into()],
                },
            ],
        };

        Self {
            vehicles: [
                (compact.vehicle_id.clone(), compact),
                (minivan.vehicle_id.clone(), minivan),
            ]
            .into(),
            contact: ContactConfig {
                endpoint:       "http://127.0.0.1:9/emails".into(),
                api_key_env:    "DEALER_TEST_MAIL_KEY".into(),
                from_address:   "noreply@example.test".into(),
                to_address:     "showroom@example.test".into(),
                subject_prefix: "[Test]".into(),
                timeout_ms:     1_000,
                messages:       ContactMessages::default(),
            },
        }
    }
}
