//! Cross-module tests for the calculator engines
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked examples with known answers
//! - `properties` - Invariants checked across the whole return table
//! - `round_trips` - One engine's output fed back into another

mod properties;
