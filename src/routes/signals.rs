use actix_web::{web, HttpResponse, Responder};

use crate::core::merge_signals;
use crate::models::{MergeSignalsRequest, MergeSignalsResponse};

/// Configure signal-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/signals/merge", web::post().to(merge));
}

/// Merge a freshly extracted signal batch into a stored snapshot
///
/// POST /api/v1/signals/merge
///
/// The caller supplies the stored snapshot and the new batch, and persists
/// the returned map itself — the engine holds no state.
///
/// Request body:
/// ```json
/// {
///   "existing": { "work_style": { "value": "Startup", "confidence": 0.85, "source": "inferred" } },
///   "incoming": { "work_style": { "value": "Corporate", "confidence": 0.95, "source": "explicit" } }
/// }
/// ```
async fn merge(req: web::Json<MergeSignalsRequest>) -> impl Responder {
    let merged = merge_signals(&req.existing, &req.incoming);

    tracing::debug!(
        "Merged {} incoming into {} existing signals -> {} fields",
        req.incoming.len(),
        req.existing.len(),
        merged.len()
    );

    let field_count = merged.len();
    HttpResponse::Ok().json(MergeSignalsResponse {
        merged,
        field_count,
    })
}
