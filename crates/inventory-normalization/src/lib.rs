//! Network inventory normalization crate.
//!
//! One pure, deterministic transform per field family. Each transform
//! canonicalizes its raw value, reports validity or confidence, records the
//! steps it applied and emits issues for malformed input. None of them fail:
//! every input, however broken, produces a complete result.
//!
//! # Example
//!
//! ```
//! use inventory_model::{InputColumn, RawRow};
//! use inventory_normalization::normalize_row;
//!
//! let row = RawRow::default()
//!     .with(InputColumn::Ip, "192.168.010.005")
//!     .with(InputColumn::Fqdn, "srv-1.example.com");
//! let outcome = normalize_row(&row);
//! assert_eq!(outcome.record.ip, "192.168.10.5");
//! assert_eq!(outcome.record.hostname, "srv-1");
//! assert!(outcome.anomaly.is_none());
//! ```

pub mod normalization;
mod pipeline;
mod recommendations;

pub use normalization::{
    DeviceClassification, IpNormalization, MacNormalization, NameNormalization, OwnerParse,
    SiteNormalization, classify_device, normalize_ip, normalize_mac, normalize_names,
    normalize_site, parse_owner, reverse_pointer,
};
pub use pipeline::{NormalizedInventory, RowOutcome, normalize_row, normalize_rows};
pub use recommendations::{recommended_action, recommendations_for};
