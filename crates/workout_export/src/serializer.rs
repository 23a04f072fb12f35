//! Canonical JSON encoding and artifact naming for export documents.

use serde_json::Value;

use crate::error::ExportResult;
use crate::model::WorkoutExport;

/// Encode an export document and derive its artifact name.
///
/// The document is encoded through a `serde_json::Value` first: serde_json's
/// default object map is ordered by key, so every object comes out with
/// lexicographically sorted keys and re-encoding the same document is
/// byte-for-byte reproducible. Timestamps are RFC3339 via chrono's serde.
/// The filename is `workout-{type}-{yyyy-MM-dd}.json` from the normalized
/// kind tag and the workout's start day.
pub fn serialize(export: &WorkoutExport) -> ExportResult<(Vec<u8>, String)> {
    let value: Value = serde_json::to_value(export)?;
    let bytes = serde_json::to_vec_pretty(&value)?;
    let filename = format!(
        "workout-{}-{}.json",
        export.workout.kind.tag(),
        export.workout.start_date.format("%Y-%m-%d"),
    );
    Ok((bytes, filename))
}
