/// Basic list view over typed records: search, sort, and page through a
/// small staff roster.
use recordview::{Accessor, CollectionView, SortDirection, ViewState};

struct StaffMember {
    name: &'static str,
    role: &'static str,
    years_of_service: f64,
}

fn main() {
    let staff = vec![
        StaffMember { name: "Alice Smith", role: "NURSE", years_of_service: 7.0 },
        StaffMember { name: "Bob Jones", role: "DOCTOR", years_of_service: 12.0 },
        StaffMember { name: "Carol White", role: "NURSE", years_of_service: 3.0 },
        StaffMember { name: "Dan Brown", role: "TECHNICIAN", years_of_service: 5.0 },
        StaffMember { name: "Erin Davis", role: "NURSE", years_of_service: 9.0 },
    ];

    let view = CollectionView::new(2)
        .unwrap()
        .search_field(Accessor::text(|s: &StaffMember| Some(s.name.to_string())))
        .filter("role", Accessor::text(|s: &StaffMember| Some(s.role.to_string())))
        .sort(
            "seniority",
            Accessor::number(|s: &StaffMember| Some(s.years_of_service)),
        );

    // Nurses by seniority, most senior first
    let state = ViewState::new()
        .with_filter("role", "NURSE")
        .with_sort("seniority", SortDirection::Descending);

    let result = view.compute(&staff, &state).unwrap();
    let (start, end) = result.item_range().unwrap();
    println!(
        "Nurses, page {}/{} (showing {}-{} of {}):",
        result.current_page, result.total_pages, start, end, result.total_items
    );
    for member in &result.page_records {
        println!("  {} ({} years)", member.name, member.years_of_service);
    }

    // Next page
    let result = view.compute(&staff, &state.on_page(2)).unwrap();
    let (start, end) = result.item_range().unwrap();
    println!("Page {} (showing {}-{}):", result.current_page, start, end);
    for member in &result.page_records {
        println!("  {} ({} years)", member.name, member.years_of_service);
    }
}
