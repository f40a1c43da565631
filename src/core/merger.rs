use crate::models::SignalMap;

/// Minimum confidence a signal needs to be stored at all. Callers are
/// expected to pre-filter extraction output to this floor; the merger still
/// drops anything below it.
pub const MIN_STORED_CONFIDENCE: f64 = 0.70;

/// Merge a batch of freshly extracted signals into a user's stored set.
///
/// Rules, per field:
/// - present only in `incoming`: inserted unconditionally;
/// - present in both: replaced only when the incoming confidence is
///   *strictly* greater — equal confidence keeps the existing record, so a
///   re-inferred restatement of a known fact never churns storage;
/// - incoming entries with a null value or confidence below
///   [`MIN_STORED_CONFIDENCE`] are ignored, never an error.
///
/// Pure snapshot-in/snapshot-out: the caller owns the read-modify-write
/// transaction against storage. Deterministic for identical inputs and safe
/// to call concurrently.
pub fn merge_signals(existing: &SignalMap, incoming: &SignalMap) -> SignalMap {
    let mut merged = existing.clone();

    for (field, signal) in incoming {
        if signal.value.is_null() || signal.confidence < MIN_STORED_CONFIDENCE {
            continue;
        }

        match merged.get(field) {
            Some(current) if signal.confidence <= current.confidence => {}
            _ => {
                merged.insert(field.clone(), signal.clone());
            }
        }
    }

    merged
}
