//! # Beacon AMM
//!
//! Constant-product exchange core with beacon-style upgradeability:
//! pools and the pair registry are persistent state bound to
//! hot-swappable implementations, so one upgrade retargets every
//! instance at once.
//!
//! The crate provides:
//!
//! - **Pools** — constant-product (x·y = k) markets with a basis-point
//!   swap fee, time-weighted price accumulators, and an optional
//!   protocol fee on liquidity growth.
//! - **Registry** — one pool per unordered asset pair, plus the
//!   owner-gated system-wide fee policy every pool reads live.
//! - **Upgrades** — a [`Beacon`](upgrades::Beacon) per component class
//!   and an [`UpgradeCoordinator`](upgrades::UpgradeCoordinator)
//!   governing both.
//! - **Ledger seam** — balances, transfers, and share issuance go
//!   through the [`TokenLedger`](traits::TokenLedger) trait; the crate
//!   ships an in-memory implementation for tests and demos.
//!
//! # Quick Start
//!
//! Bootstrap the system, open a market, and provide liquidity:
//!
//! ```rust
//! use std::sync::Arc;
//! use beacon_amm::domain::{AccountId, Amount, AssetId, BasisPoints, Timestamp};
//! use beacon_amm::ledger::InMemoryLedger;
//! use beacon_amm::pool::ConstantProductPool;
//! use beacon_amm::registry::{PairRegistry, Registry, RegistryState};
//! use beacon_amm::traits::{PoolImplementation, RegistryImplementation, TokenLedger};
//! use beacon_amm::upgrades::{Beacon, UpgradeCoordinator};
//!
//! // 1. Identities
//! let admin = AccountId::from_bytes([1u8; 32]);
//! let coordinator_account = AccountId::from_bytes([2u8; 32]);
//! let registry_account = AccountId::from_bytes([3u8; 32]);
//! let lp = AccountId::from_bytes([4u8; 32]);
//! let gold = AssetId::from_bytes([10u8; 32]);
//! let silver = AssetId::from_bytes([11u8; 32]);
//!
//! // 2. One beacon per component class, governed by the coordinator
//! let pool_beacon: Arc<Beacon<dyn PoolImplementation>> =
//!     Arc::new(Beacon::new(admin, Arc::new(ConstantProductPool)));
//! let registry_beacon: Arc<Beacon<dyn RegistryImplementation>> =
//!     Arc::new(Beacon::new(admin, Arc::new(PairRegistry)));
//! let mut coordinator = UpgradeCoordinator::new(admin, coordinator_account);
//! coordinator
//!     .set_beacons(admin, Arc::clone(&registry_beacon), Arc::clone(&pool_beacon))
//!     .expect("beacons bound");
//! pool_beacon
//!     .transfer_ownership(admin, coordinator_account)
//!     .expect("ownership transferred");
//! registry_beacon
//!     .transfer_ownership(admin, coordinator_account)
//!     .expect("ownership transferred");
//!
//! // 3. A registry with a 0.30% swap fee and no protocol fee
//! let state = RegistryState::new(
//!     registry_account,
//!     admin,
//!     BasisPoints::new(30),
//!     AccountId::NULL,
//!     Arc::clone(&pool_beacon),
//! )
//! .expect("valid fee rate");
//! let mut registry = Registry::new(state, registry_beacon);
//! coordinator
//!     .set_current_registry(admin, registry_account)
//!     .expect("registry recorded");
//!
//! // 4. Open the gold/silver market and seed it
//! let id = registry.create_pair(gold, silver).expect("pair created");
//! let mut ledger = InMemoryLedger::new();
//! let pool = registry.pool_mut(id).expect("pool exists");
//! ledger
//!     .mint(pool.account(), gold, Amount::new(1_000_000))
//!     .expect("funded");
//! ledger
//!     .mint(pool.account(), silver, Amount::new(1_000_000))
//!     .expect("funded");
//! let shares = pool.mint(&mut ledger, lp, Timestamp::new(100)).expect("minted");
//!
//! // sqrt(10^6 · 10^6) minus the permanently locked 1000.
//! assert_eq!(shares, Amount::new(999_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ UpgradeCoordinator │  owner-gated upgrade policy
//! └───────┬──────────┘
//!         │ upgrade_to(…)
//!         ▼
//! ┌──────────────────┐
//! │      Beacons      │  dyn PoolImplementation / dyn RegistryImplementation
//! └───────┬──────────┘
//!         │ implementation()  (resolved per call, never cached)
//!         ▼
//! ┌──────────────────┐
//! │ Registry & Pools  │  persistent state, behavior-free
//! └───────┬──────────┘
//!         │ balances, transfers, share issuance
//!         ▼
//! ┌──────────────────┐
//! │    TokenLedger    │  external fungible-asset ledger
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetPair`](domain::AssetPair), [`BasisPoints`](domain::BasisPoints), etc. |
//! | [`traits`] | Core seams: [`TokenLedger`](traits::TokenLedger), [`PoolImplementation`](traits::PoolImplementation), [`RegistryImplementation`](traits::RegistryImplementation) |
//! | [`pool`] | [`PoolState`](pool::PoolState), [`ConstantProductPool`](pool::ConstantProductPool), and the [`Pool`](pool::Pool) instance wrapper |
//! | [`registry`] | [`RegistryState`](registry::RegistryState), [`PairRegistry`](registry::PairRegistry), [`Registry`](registry::Registry) |
//! | [`upgrades`] | [`Beacon`](upgrades::Beacon) and [`UpgradeCoordinator`](upgrades::UpgradeCoordinator) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) test/demo ledger |
//! | [`math`] | Integer square root, UQ64.64 price encoding |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod traits;
pub mod upgrades;
