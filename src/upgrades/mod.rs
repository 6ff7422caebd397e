//! Beacon-style upgrade machinery.
//!
//! Two moving parts: [`Beacon`], the swappable implementation pointer
//! shared by every dependent instance, and [`UpgradeCoordinator`], the
//! owner-gated policy layer that governs the system's two beacons (one
//! for pools, one for the registry).

mod beacon;
mod coordinator;

pub use beacon::Beacon;
pub use coordinator::UpgradeCoordinator;
