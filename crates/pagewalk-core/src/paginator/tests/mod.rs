
use crate::{
    config::PagerConfig, error::PaginationError, page::PageNumber, paginator::Paginator,
};

fn century() -> Vec<u32> {
    (0..100).collect()
}

#[test]
fn build_rejects_zero_entries_per_page() {
    let err = Paginator::from_total(10)
        .entries_per_page(0)
        .build()
        .expect_err("zero page size must not build");

    assert!(matches!(err, PaginationError::ZeroEntriesPerPage));
}

#[test]
fn build_normalizes_signed_inputs_to_magnitude() {
    let items = century();
    let pager = Paginator::over(&items)
        .entries_per_page(-10)
        .current_page(-3)
        .pageset_range(-2)
        .build()
        .expect("negative inputs normalize and build");

    assert_eq!(pager.entries_per_page(), 10);
    assert_eq!(pager.current_page(), PageNumber::new(3));
    assert_eq!(pager.pageset_range(), 2);
}

#[test]
fn changeset_range_keeps_its_sign() {
    let pager = Paginator::from_total(100)
        .changeset_range(-10)
        .build()
        .expect("signed jump distance builds");

    assert_eq!(pager.changeset_range(), -10);
    // a jump whose target leaves the book stays put, in either direction
    assert_eq!(pager.jump_forward(), pager.current_page());
    assert_eq!(pager.jump_back(), pager.current_page());
}

#[test]
fn builder_accepts_a_whole_config() {
    let config = PagerConfig {
        entries_per_page: 20,
        pageset_range: 3,
        changeset_range: 5,
    };
    let pager = Paginator::from_total(100)
        .config(config)
        .build()
        .expect("config-driven builder builds");

    assert_eq!(pager.entries_per_page(), 20);
    assert_eq!(pager.pageset_range(), 3);
    assert_eq!(pager.changeset_range(), 5);
    assert_eq!(pager.last_page(), PageNumber::new(5));
}

#[test]
fn first_page_navigation() {
    let items = century();
    let pager = Paginator::over(&items)
        .build()
        .expect("stock paginator builds");

    assert_eq!(pager.last_page(), PageNumber::new(10));
    assert_eq!(pager.previous_page(), PageNumber::new(1));
    assert_eq!(pager.next_page(), PageNumber::new(2));
    assert_eq!(pager.page_items(), &items[..10]);
}

#[test]
fn last_page_navigation_clamps_forward() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(10)
        .build()
        .expect("last-page paginator builds");

    assert_eq!(pager.next_page(), PageNumber::new(10));
    assert_eq!(pager.previous_page(), PageNumber::new(9));
    assert_eq!(pager.page_items(), &items[90..]);
}

#[test]
fn out_of_range_current_page_degrades() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(15)
        .build()
        .expect("out-of-range current page builds");

    // no clamp down to the last page; slicing degrades to empty
    assert_eq!(pager.next_page(), PageNumber::new(15));
    assert_eq!(pager.previous_page(), PageNumber::new(14));
    assert!(pager.page_items().is_empty());
}

#[test]
fn final_partial_page_is_short() {
    let items: Vec<u32> = (0..95).collect();
    let pager = Paginator::over(&items)
        .current_page(10)
        .build()
        .expect("partial-page paginator builds");

    assert_eq!(pager.last_page(), PageNumber::new(10));
    assert_eq!(pager.page_items(), &items[90..]);
    assert_eq!(pager.page_items().len(), 5);
}

#[test]
fn count_only_paginator_slices_nothing() {
    let pager = Paginator::from_total(100)
        .current_page(3)
        .build()
        .expect("count-only paginator builds");

    assert_eq!(pager.last_page(), PageNumber::new(10));
    assert_eq!(pager.total_entries(), 100);
    assert!(pager.page_items().is_empty());
}

#[test]
fn empty_collection_has_no_pages() {
    let items: Vec<u32> = Vec::new();
    let pager = Paginator::over(&items)
        .build()
        .expect("empty-source paginator builds");

    assert_eq!(pager.last_page(), PageNumber::new(0));
    assert!(pager.pages().is_empty());
    assert!(pager.window().is_empty());
    assert_eq!(pager.next_page(), PageNumber::new(1));
    assert_eq!(pager.previous_page(), PageNumber::new(1));
    assert!(pager.page_items().is_empty());
}

#[test]
fn zero_current_page_clamps_slice_to_head() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(0)
        .build()
        .expect("zero current page builds");

    assert_eq!(pager.current_page(), PageNumber::new(0));
    assert_eq!(pager.previous_page(), PageNumber::new(0));
    assert_eq!(pager.page_items(), &items[..10]);
}

#[test]
fn jumps_stay_put_when_the_target_leaves_the_book() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(5)
        .build()
        .expect("mid-book paginator builds");

    // 5 + 10 and 5 - 10 both land outside [1, 10]
    assert_eq!(pager.jump_forward(), PageNumber::new(5));
    assert_eq!(pager.jump_back(), PageNumber::new(5));
}

#[test]
fn jumps_move_when_the_target_lands_inside() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(8)
        .changeset_range(5)
        .build()
        .expect("mid-book paginator builds");

    assert_eq!(pager.jump_back(), PageNumber::new(3));
    assert_eq!(pager.jump_forward(), PageNumber::new(8));
}

#[test]
fn goto_accepts_only_in_range_targets() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(4)
        .build()
        .expect("mid-book paginator builds");

    assert_eq!(pager.goto("7"), PageNumber::new(7));
    assert_eq!(pager.goto(" 3 "), PageNumber::new(3));
    assert_eq!(pager.goto(7u32), PageNumber::new(7));
    assert_eq!(pager.goto(7.9f64), PageNumber::new(7));
    assert_eq!(pager.goto("abc"), PageNumber::new(4));
    assert_eq!(pager.goto(0), PageNumber::new(4));
    assert_eq!(pager.goto(-2), PageNumber::new(4));
    assert_eq!(pager.goto(99), PageNumber::new(4));
    assert_eq!(pager.goto(f64::NAN), PageNumber::new(4));
}

#[test]
fn goto_round_trips_every_page() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(4)
        .build()
        .expect("mid-book paginator builds");

    for page in pager.pages() {
        assert_eq!(pager.goto(page), page);
    }
}

#[test]
fn concatenated_pages_reproduce_the_source() {
    let items: Vec<u32> = (0..95).collect();
    let mut rebuilt: Vec<u32> = Vec::new();
    let pages = Paginator::over(&items)
        .build()
        .expect("stock paginator builds")
        .pages();

    for page in pages {
        let pager = Paginator::over(&items)
            .current_page(page.get() as i64)
            .build()
            .expect("per-page paginator builds");
        rebuilt.extend_from_slice(pager.page_items());
    }

    assert_eq!(rebuilt, items);
}

#[test]
fn view_snapshots_every_navigation_fact() {
    let items = century();
    let pager = Paginator::over(&items)
        .current_page(5)
        .pageset_range(2)
        .changeset_range(3)
        .build()
        .expect("mid-book paginator builds");
    let view = pager.view();

    assert_eq!(view.first_page, PageNumber::new(1));
    assert_eq!(view.last_page, PageNumber::new(10));
    assert_eq!(view.current_page, PageNumber::new(5));
    assert_eq!(view.previous_page, PageNumber::new(4));
    assert_eq!(view.next_page, PageNumber::new(6));
    assert_eq!(view.jump_back, PageNumber::new(2));
    assert_eq!(view.jump_forward, PageNumber::new(8));
    assert_eq!(
        view.window,
        vec![
            PageNumber::new(3),
            PageNumber::new(4),
            PageNumber::new(5),
            PageNumber::new(6),
            PageNumber::new(7),
        ]
    );
    assert_eq!(view.total_entries, 100);
    assert_eq!(view.entries_per_page, 10);
}

#[test]
fn view_round_trips_through_serde() {
    let items = century();
    let view = Paginator::over(&items)
        .current_page(5)
        .build()
        .expect("mid-book paginator builds")
        .view();
    let encoded = serde_json::to_string(&view).expect("view serializes");
    let decoded: crate::view::PageView =
        serde_json::from_str(&encoded).expect("view deserializes");

    assert_eq!(decoded, view);
}
