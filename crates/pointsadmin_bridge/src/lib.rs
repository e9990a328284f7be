//! Host-facing bridge for the admin summary engine.

pub mod api;

pub use api::{
    core_version, fieldset_summaries, fieldset_summary, init_logging, load_catalog, ping,
    SummariesResponse, SummaryItem, SummaryResponse,
};
