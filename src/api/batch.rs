use crate::api::decode::decode_polyline;
use crate::core::precision::Precision;
use crate::error::PolylineError;
use geo_types::LineString;
use rayon::prelude::*;

/// Decodes many polylines in parallel, one result per input in input order.
///
/// A malformed entry fails on its own without affecting the others.
pub fn decode_batch<S>(
    encoded: &[S],
    precision: Precision,
) -> Vec<Result<LineString<f64>, PolylineError>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<_> = encoded
        .par_iter()
        .map(|s| decode_polyline(s.as_ref(), precision))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(count = results.len(), failed, "batch decode had failures");
    }

    results
}
