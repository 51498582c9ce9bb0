//! Data layer: rental records, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!     data.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse + stable sort by date → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  DateRange → contiguous &[RentalRecord]
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate │  totals, category means, hourly means
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
