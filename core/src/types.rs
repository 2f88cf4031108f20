//! Shared primitive types used across the configurator and lead desk.

/// A monthly price amount in yen. Yen has no subunits in practice,
/// and every delta is non-negative, so an unsigned integer suffices.
pub type Yen = u64;

/// Stable identifier for a vehicle catalog (e.g. "compact-hatch").
pub type VehicleId = String;

/// Identifier for a recorded lead.
pub type LeadId = String;
