/// An admissions list screen over decoded JSON, the shape a list endpoint
/// typically delivers: search by patient name, filter by status, sort by
/// admission date, page through the result.
///
/// Run with RUST_LOG=trace to see the per-recompute summary.
use recordview::{Accessor, CollectionView, SortDirection, ValueKind, ViewState};
use serde_json::{json, Value as JsonValue};

fn fetch_admissions() -> Vec<JsonValue> {
    // Stands in for the JSON body of GET /api/admissions
    (0..23)
        .map(|i| {
            let (status, day) = if i < 12 {
                ("ADMITTED", format!("2024-03-{:02}", i + 1))
            } else {
                ("DISCHARGED", format!("2024-02-{:02}", i - 11))
            };
            json!({
                "id": i,
                "patient": { "firstName": format!("First{i}"), "lastName": format!("Last{i}") },
                "status": status,
                "admissionDate": day,
            })
        })
        .collect()
}

fn print_page(label: &str, result: &recordview::ViewResult<'_, JsonValue>) {
    match result.item_range() {
        Some((start, end)) => println!(
            "{label}: page {}/{}, showing {}-{} of {}",
            result.current_page, result.total_pages, start, end, result.total_items
        ),
        None => println!("{label}: no results found"),
    }
    for record in &result.page_records {
        println!(
            "  #{} {} {} [{}] {}",
            record["id"],
            record["patient"]["firstName"],
            record["patient"]["lastName"],
            record["status"],
            record["admissionDate"]
        );
    }
}

fn main() {
    env_logger::init();
    let records = fetch_admissions();

    let view = CollectionView::new(10)
        .unwrap()
        .search_field(Accessor::json_path(ValueKind::Text, "patient.firstName"))
        .search_field(Accessor::json_path(ValueKind::Text, "patient.lastName"))
        .filter("status", Accessor::json_path(ValueKind::Text, "status"))
        .sort(
            "admissionDate",
            Accessor::json_path(ValueKind::Date, "admissionDate"),
        );

    // Unfiltered list, last page
    let state = ViewState::new().on_page(3);
    print_page("all admissions", &view.compute(&records, &state).unwrap());

    // User picks a status filter: the transition derives a page-1 reset, so
    // the stale page 3 from the larger set cannot leak into the smaller one.
    let state = state.with_filter("status", "ADMITTED");
    let state = state.with_sort("admissionDate", SortDirection::Descending);
    print_page("admitted, latest first", &view.compute(&records, &state).unwrap());

    // User types in the search box
    let state = state.with_search_term("last1");
    print_page("search 'last1'", &view.compute(&records, &state).unwrap());
}
