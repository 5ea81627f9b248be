use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::PortalError;
use crate::filter::{Listing, ListingQuery};
use crate::models::ListingKind;
use crate::state::ListingView;
use crate::store::Dataset;
use crate::summary::*;

/// What a listing page would render for a query: the visible records, the
/// dropdown options and the page's summary cards.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub listing: ListingKind,
    pub query: ListingQuery,
    pub total: usize,
    pub visible: usize,
    pub options: BTreeMap<String, Vec<String>>,
    pub records: Vec<Value>,
    pub summary: Value,
}

pub fn render_snapshot(
    dataset: &Dataset,
    listing: ListingKind,
    query: &ListingQuery,
) -> Result<Snapshot, PortalError> {
    let d = dataset;
    match listing {
        ListingKind::Jobs => snapshot_of(&d.jobs, query, summarize_jobs(&d.jobs)),
        ListingKind::Companies => {
            snapshot_of(&d.companies, query, summarize_companies(&d.companies))
        }
        ListingKind::Events => snapshot_of(
            &d.events,
            query,
            json!({
                "board": summarize_events(&d.events),
                "employer": summarize_employer_events(&d.events),
            }),
        ),
        ListingKind::Courses => snapshot_of(&d.courses, query, summarize_courses(&d.courses)),
        ListingKind::Candidates => {
            snapshot_of(&d.candidates, query, summarize_candidates(&d.candidates))
        }
        ListingKind::Users => snapshot_of(
            &d.users,
            query,
            json!({
                "users": summarize_users(&d.users),
                "analytics": analytics_table(&d.analytics),
            }),
        ),
        ListingKind::Appointments => snapshot_of(
            &d.appointments,
            query,
            json!({
                "appointments": summarize_appointments(&d.appointments),
                "availability": summarize_availability(&d.availability),
            }),
        ),
        ListingKind::Consultations => snapshot_of(
            &d.consultations,
            query,
            summarize_consultations(&d.consultations),
        ),
        ListingKind::Postings => snapshot_of(&d.postings, query, summarize_postings(&d.postings)),
        ListingKind::Contents => snapshot_of(&d.contents, query, summarize_content(&d.contents)),
        ListingKind::Students => snapshot_of(&d.students, query, summarize_students(&d.students)),
    }
}

fn snapshot_of<R>(
    records: &[R],
    query: &ListingQuery,
    summary: impl Serialize,
) -> Result<Snapshot, PortalError>
where
    R: Listing + Clone + Serialize,
{
    let config = R::filter_config();
    config.validate(query)?;

    let mut view = ListingView::with_config(records.to_vec(), config);
    view.replace_query(query.clone());

    let visible = view.visible();
    info!(
        "{} listing: {} of {} records visible",
        R::KIND,
        visible.len(),
        records.len()
    );

    let options = view
        .config()
        .category_fields()
        .map(|field| (field.to_string(), view.options(field)))
        .collect();

    Ok(Snapshot {
        listing: R::KIND,
        query: view.query().clone(),
        total: records.len(),
        visible: visible.len(),
        options,
        records: visible
            .iter()
            .map(|r| serde_json::to_value(r))
            .collect::<Result<_, _>>()?,
        summary: serde_json::to_value(summary)?,
    })
}
