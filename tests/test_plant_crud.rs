//! Integration tests for adding, editing, watering and deleting plants.
//!
//! Tests cover:
//! - Thirst computed from the last-watered date at creation
//! - Rejection of malformed input without touching the store
//! - Field edits leaving the cached thirst flag alone
//! - Watering and deleting, including unknown ids
//! - Id assignment across deletes and resets

mod common;

use common::*;
use std::num::NonZeroU32;
use time::macros::datetime;

#[test]
fn test_add_overdue_plant_is_thirsty() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let plant = store.add_plant("Fern", "7", Some(&days_ago(10)))?;

    assert_eq!(plant.id, PlantId(1));
    assert_eq!(plant.text, "Fern");
    assert_eq!(plant.recommended_watering.get(), 7);
    assert_eq!(plant.last_watered_days, 10);
    assert!(plant.thirsty);

    Ok(())
}

#[test]
fn test_add_recently_watered_plant_is_not_thirsty() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let plant = store.add_plant("Fern", "7", Some(&days_ago(3)))?;

    assert_eq!(plant.last_watered_days, 3);
    assert!(!plant.thirsty);

    Ok(())
}

#[test]
fn test_add_plant_due_exactly_today_is_thirsty() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let plant = store.add_plant("Monstera", "7", Some(&days_ago(7)))?;

    assert!(plant.thirsty);
    Ok(())
}

#[test]
fn test_add_plant_without_date_means_watered_now() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let missing = store.add_plant("Ivy", "1", None)?.clone();
    let blank = store.add_plant("Moss", "1", Some("   "))?.clone();

    assert_eq!(missing.last_watered_days, 0);
    assert!(!missing.thirsty);
    assert_eq!(blank.last_watered_days, 0);
    assert!(!blank.thirsty);

    Ok(())
}

#[test]
fn test_add_plant_with_timestamp_rounds_down_to_whole_days() -> anyhow::Result<()> {
    let mut store = create_test_store();

    // 6 days and 6 hours before the fixed clock
    let plant = store.add_plant("Orchid", "7", Some("2026-10-12T18:00:00Z"))?;

    assert_eq!(plant.last_watered_days, 6);
    assert!(!plant.thirsty);

    Ok(())
}

#[test]
fn test_add_plant_watered_in_future_counts_as_today() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let plant = store.add_plant("Aloe", "7", Some("2026-11-01"))?;

    assert_eq!(plant.last_watered_days, 0);
    assert!(!plant.thirsty);

    Ok(())
}

#[test]
fn test_add_plant_rejects_non_numeric_interval() -> anyhow::Result<()> {
    let mut store = create_test_store();

    for bad in ["abc", "0", "-3", "", "7.5"] {
        let result = store.add_plant("Fern", bad, Some(&days_ago(10)));
        assert_eq!(
            result.map(|plant| plant.id),
            Err(PlantError::InvalidInterval(bad.to_string())),
            "interval {:?} should be rejected",
            bad
        );
    }
    assert!(store.is_empty());

    // Rejected adds must not burn ids
    let plant = store.add_plant("Fern", "7", Some(&days_ago(10)))?;
    assert_eq!(plant.id, PlantId(1));

    Ok(())
}

#[test]
fn test_add_plant_rejects_bad_date_and_blank_name() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let bad_date = store.add_plant("Fern", "7", Some("last tuesday"));
    assert!(matches!(bad_date, Err(PlantError::InvalidDate(_))));

    let blank_name = store.add_plant("  ", "7", None);
    assert!(matches!(blank_name, Err(PlantError::EmptyValue(_))));

    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_typed_add_uses_clock_for_elapsed_days() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let plant = store.add(NewPlant {
        name: "Pothos".to_string(),
        watering_interval: NonZeroU32::new(5).expect("non-zero"),
        last_watered: datetime!(2026-10-01 09:30 UTC),
    });

    assert_eq!(plant.last_watered_days, 17);
    assert!(plant.thirsty);

    Ok(())
}

#[test]
fn test_ids_increase_and_are_never_reused() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let first = add_test_plant(&mut store, "Fern", 7, 1);
    let second = add_test_plant(&mut store, "Basil", 2, 1);
    assert!(store.delete_plant(second));

    let third = add_test_plant(&mut store, "Cactus", 21, 1);
    store.reset();
    let fourth = add_test_plant(&mut store, "Ivy", 4, 1);

    assert!(first < second);
    assert!(second < third);
    assert!(third < fourth);
    assert_eq!(fourth, PlantId(4));

    Ok(())
}

#[test]
fn test_update_text_and_interval_keeps_thirst() -> anyhow::Result<()> {
    let (mut store, [fern, cactus, _]) = create_mixed_store();

    assert!(store.update_plant_field(fern, PlantEdit::Text("Boston Fern".to_string())));
    // Raising the interval well past the elapsed days does not clear thirst
    assert!(store.update_plant_field(fern, PlantEdit::parse("recommendedWatering", "30")?));
    // Shrinking it below the elapsed days does not set thirst either
    assert!(store.update_plant_field(cactus, PlantEdit::parse("interval", "1")?));

    let fern = store.get(fern).expect("fern should exist");
    assert_eq!(fern.text, "Boston Fern");
    assert_eq!(fern.recommended_watering.get(), 30);
    assert!(fern.thirsty);

    let cactus = store.get(cactus).expect("cactus should exist");
    assert_eq!(cactus.recommended_watering.get(), 1);
    assert!(!cactus.thirsty);

    Ok(())
}

#[test]
fn test_update_last_watered_recomputes_elapsed_days() -> anyhow::Result<()> {
    let (mut store, [fern, _, _]) = create_mixed_store();

    let edit = PlantEdit::parse("lastWatered", &days_ago(1))?;
    assert!(store.update_plant_field(fern, edit));

    let fern = store.get(fern).expect("fern should exist");
    assert_eq!(fern.last_watered_days, 1);
    assert!(fern.thirsty, "thirst is cached and not recomputed by edits");

    Ok(())
}

#[test]
fn test_edit_parse_rejects_unknown_field_and_blank_value() {
    assert_eq!(
        PlantEdit::parse("colour", "green"),
        Err(PlantError::UnknownField("colour".to_string()))
    );
    assert!(matches!(
        PlantEdit::parse("text", "   "),
        Err(PlantError::EmptyValue(_))
    ));
    assert!(matches!(
        PlantEdit::parse("recommended_watering", "soon"),
        Err(PlantError::InvalidInterval(_))
    ));
}

#[test]
fn test_toggle_waters_plant_and_is_idempotent() -> anyhow::Result<()> {
    let (mut store, [fern, cactus, _]) = create_mixed_store();

    assert!(store.toggle_plant(fern));
    let once = store.get(fern).cloned().expect("fern should exist");
    assert!(store.toggle_plant(fern));
    let twice = store.get(fern).cloned().expect("fern should exist");

    assert!(!once.thirsty);
    assert_eq!(once.last_watered_days, 0);
    assert_eq!(once, twice);

    // Watering a plant that is not thirsty never makes it thirsty
    assert!(store.toggle_plant(cactus));
    assert!(!store.get(cactus).expect("cactus should exist").thirsty);

    Ok(())
}

#[test]
fn test_unknown_id_operations_are_no_ops() -> anyhow::Result<()> {
    let (mut store, _) = create_mixed_store();
    let before: Vec<Plant> = store.all_plants().to_vec();
    let missing = PlantId(99);

    assert!(!store.toggle_plant(missing));
    assert!(!store.update_plant_field(missing, PlantEdit::Text("Ghost".to_string())));
    assert!(!store.delete_plant(missing));

    assert_eq!(store.all_plants(), before.as_slice());
    Ok(())
}

#[test]
fn test_delete_plant() -> anyhow::Result<()> {
    let (mut store, [fern, cactus, basil]) = create_mixed_store();

    assert!(store.delete_plant(cactus));

    assert!(store.get(cactus).is_none());
    let ids: Vec<PlantId> = store.plants().iter().map(|plant| plant.id).collect();
    assert_eq!(ids, vec![fern, basil]);

    // Second delete finds nothing
    assert!(!store.delete_plant(cactus));
    Ok(())
}
