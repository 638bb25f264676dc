//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!            ┌──────────────────────────┐
//!  CLI ────▶ │  MarineTrackingsQuery    │
//!            │  (application service)   │
//!            └────────────┬─────────────┘
//!                         │
//!      ┌──────────────────┼──────────────────┐
//!      ▼                  ▼                  ▼
//! ┌──────────┐    ┌───────────────┐   ┌────────────┐
//! │  Orders  │    │ Tracking feed │   │ Shipments  │
//! └──────────┘    └───────────────┘   └────────────┘
//! ```

pub mod inbound;
pub mod outbound;
