//! Cart ledger behaviour across browsing surfaces.
//!
//! Covers the scenarios a category screen, a search screen and the cart view produce when they
//! all edit the same ledger, plus invariants that must hold after any sequence of edits.

use rustc_hash::FxHashSet;
use testresult::TestResult;

use orderup::prelude::*;

fn burger() -> MenuItem {
    MenuItem::new("Burger", 50)
}

fn fries() -> MenuItem {
    MenuItem::new("Fries", 25)
}

fn lines<O: CartObserver>(ledger: &CartLedger<O>) -> Vec<(String, u64, u32)> {
    ledger
        .lines()
        .iter()
        .map(|line| {
            (
                line.item_name().to_string(),
                *line.unit_price(),
                line.quantity(),
            )
        })
        .collect()
}

fn line(name: &str, price: u64, quantity: u32) -> (String, u64, u32) {
    (name.to_string(), price, quantity)
}

fn assert_invariants<O: CartObserver>(ledger: &CartLedger<O>) {
    let names: Vec<&str> = ledger.lines().iter().map(CartLine::item_name).collect();
    let mut unique = names.clone();
    unique.sort_unstable();
    unique.dedup();

    assert_eq!(names.len(), unique.len(), "duplicate lines in {names:?}");

    assert!(
        ledger.lines().iter().all(|line| line.quantity() >= 1),
        "zero-quantity line present"
    );

    let expected_total: u64 = ledger
        .lines()
        .iter()
        .map(|line| *line.unit_price() * u64::from(line.quantity()))
        .sum();

    assert_eq!(*ledger.total_price(), expected_total);
    assert_eq!(ledger.total_price(), ledger.total_price());

    let expected_count: u64 = ledger
        .lines()
        .iter()
        .map(|line| u64::from(line.quantity()))
        .sum();

    assert_eq!(ledger.item_count(), expected_count);
}

#[test]
fn scenario_a_two_items() {
    let mut ledger = CartLedger::new();

    ledger.set_quantity(&burger(), 2);
    ledger.set_quantity(&fries(), 1);

    assert_eq!(
        lines(&ledger),
        [line("Burger", 50, 2), line("Fries", 25, 1)]
    );
    assert_eq!(ledger.total_price(), Price::new(125));
    assert_eq!(ledger.item_count(), 3);
}

#[test]
fn scenario_b_zero_removes() {
    let mut ledger = CartLedger::new();

    ledger.set_quantity(&burger(), 2);
    ledger.set_quantity(&fries(), 1);
    ledger.set_quantity(&burger(), 0);

    assert_eq!(lines(&ledger), [line("Fries", 25, 1)]);
    assert_eq!(ledger.total_price(), Price::new(25));
    assert_eq!(ledger.quantity_of("Burger"), 0);
}

#[test]
fn scenario_c_repeated_quantity_is_idempotent() {
    let mut ledger = CartLedger::new();

    ledger.set_quantity(&burger(), 2);
    let before = lines(&ledger);

    ledger.set_quantity(&burger(), 2);

    assert_eq!(lines(&ledger), before);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn scenario_d_search_finds_both_colas_once() {
    let catalog = Catalog::cafeteria();

    for query in ["cola", "COLA", "cola"] {
        let names: Vec<&str> = catalog
            .search(query)
            .into_iter()
            .map(MenuItem::name)
            .collect();

        for cola in ["Coca-cola 500ml", "Coca-cola 2l"] {
            assert_eq!(names.iter().filter(|&&name| name == cola).count(), 1);
        }

        let unique: FxHashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }
}

#[test]
fn scenario_e_remove_unknown_is_noop() {
    let mut ledger = CartLedger::new();

    ledger.set_quantity(&burger(), 1);
    let before = lines(&ledger);

    assert_eq!(ledger.remove_line("Fries"), None);
    assert_eq!(lines(&ledger), before);
}

#[test]
fn quantity_is_shared_between_screens() -> TestResult {
    let catalog = Catalog::cafeteria();
    let mut ledger = CartLedger::new();

    // Category screen
    let kota = catalog
        .category("Main Meals")
        .iter()
        .find(|item| item.name() == "Kota")
        .ok_or("Kota missing from Main Meals")?;
    ledger.set_quantity(kota, 1);

    // Search screen seeds its selector from the ledger, then bumps it
    let result = catalog
        .search("kota")
        .into_iter()
        .next()
        .ok_or("Kota missing from search")?;
    assert_eq!(ledger.quantity_of(result.name()), 1);
    ledger.increment(result);

    // Cart view
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.quantity_of("Kota"), 2);
    assert_eq!(ledger.total_price(), Price::new(60));
    assert_eq!(ledger.badge(), Some(2));

    Ok(())
}

#[test]
fn clear_empties_any_cart() {
    let catalog = Catalog::cafeteria();
    let mut ledger = CartLedger::new();

    for (quantity, item) in (1..).zip(catalog.items()) {
        ledger.set_quantity(item, quantity);
    }

    assert_eq!(ledger.len(), catalog.items().count());

    ledger.clear();

    assert!(ledger.lines().is_empty());
    assert_eq!(ledger.total_price(), Price::ZERO);
    assert_eq!(ledger.badge(), None);
}

#[test]
fn invariants_hold_over_edit_sequences() {
    let catalog = Catalog::cafeteria();
    let items: Vec<&MenuItem> = catalog.items().collect();
    let mut ledger = CartLedger::new();
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;

    for _ in 0..2_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        let Some(item) = usize::try_from(state % items.len() as u64)
            .ok()
            .and_then(|idx| items.get(idx))
        else {
            continue;
        };

        match state % 7 {
            0 => {
                ledger.set_quantity(item, 0);
                assert_eq!(ledger.quantity_of(item.name()), 0);
                assert!(ledger.line(item.name()).is_none());
            }
            1 => {
                ledger.remove_line(item.name());
            }
            2 => {
                ledger.decrement(item);
            }
            3 => {
                ledger.increment(item);
            }
            4 if state % 50 == 4 => {
                ledger.clear();
                assert!(ledger.is_empty());
            }
            _ => {
                let quantity = u32::try_from(state % 5).unwrap_or(1);
                ledger.set_quantity(item, quantity);
                assert_eq!(ledger.quantity_of(item.name()), quantity);
            }
        }

        assert_invariants(&ledger);
    }
}

#[test]
fn observer_is_notified_once_per_change() {
    let mut revisions = Vec::new();
    let mut ledger = CartLedger::with_observer(|_event: &CartEvent, cart: &CartLines| {
        revisions.push(cart.revision());
    });

    ledger.set_quantity(&burger(), 1);
    ledger.set_quantity(&burger(), 1);
    ledger.increment(&burger());
    ledger.remove_line("Fries");
    ledger.clear();
    ledger.clear();

    drop(ledger);

    assert_eq!(revisions, [1, 2, 3]);
}
