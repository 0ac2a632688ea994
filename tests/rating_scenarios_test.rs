use parcel_rater::{
    Cost, Measurable, Money, Parcel, ParcelCategory, ParcelValidator, RatingError, Validator,
    Volume,
};
use rust_decimal_macros::dec;

fn rate(weight: f64, height: f64, width: f64, depth: f64) -> parcel_rater::Result<ParcelCategory> {
    let parcel = Parcel::new(
        Measurable::kilograms(weight)?,
        Volume::from_dimensions(height, width, depth)?,
    )?;

    let validator = ParcelValidator::standard()?;
    Ok(validator.validate(&parcel)?.category)
}

fn rate_tag(
    weight: f64,
    height: f64,
    width: f64,
    depth: f64,
) -> parcel_rater::ParcelTag {
    let parcel = Parcel::new(
        Measurable::kilograms(weight).unwrap(),
        Volume::from_dimensions(height, width, depth).unwrap(),
    )
    .unwrap();

    ParcelValidator::standard()
        .unwrap()
        .validate(&parcel)
        .unwrap()
}

#[test]
fn test_medium_parcel() {
    let tag = rate_tag(10.0, 20.0, 5.0, 20.0);

    assert_eq!(tag.category, ParcelCategory::Medium);
    assert_eq!(tag.delivery_cost.value(), dec!(80));
}

#[test]
fn test_heavy_parcel() {
    let tag = rate_tag(22.0, 5.0, 5.0, 5.0);

    assert_eq!(tag.category, ParcelCategory::Heavy);
    assert_eq!(tag.delivery_cost.value(), dec!(330));
}

#[test]
fn test_small_parcel() {
    let tag = rate_tag(2.0, 3.0, 10.0, 12.0);

    assert_eq!(tag.category, ParcelCategory::Small);
    assert_eq!(tag.delivery_cost.value(), dec!(18));
}

#[test]
fn test_rejected_parcel() {
    let tag = rate_tag(110.0, 20.0, 55.0, 120.0);

    assert_eq!(tag.category, ParcelCategory::Rejected);
    assert_eq!(tag.delivery_cost, Cost::NotApplicable);
    assert!(!tag.delivery_cost.is_applicable());
}

#[test]
fn test_large_parcel() {
    let tag = rate_tag(3.0, 10.0, 20.0, 20.0);

    assert_eq!(tag.category, ParcelCategory::Large);
    assert_eq!(tag.delivery_cost.value(), dec!(120));
}

#[test]
fn test_rejection_is_not_a_free_delivery() {
    let rejected = rate_tag(110.0, 20.0, 55.0, 120.0);

    assert_eq!(rejected.delivery_cost.value(), dec!(0));
    assert_ne!(rejected.delivery_cost, Cost::Amount(Money::zero()));
}

#[test]
fn test_weight_rules_win_over_volume_rules() {
    // Rejected by weight even though its volume alone would make it small.
    assert_eq!(rate(60.0, 10.0, 5.0, 2.0).unwrap(), ParcelCategory::Rejected);

    // Heavy by weight even though its volume alone would make it small.
    assert_eq!(rate(22.0, 5.0, 5.0, 5.0).unwrap(), ParcelCategory::Heavy);
}

#[test]
fn test_weight_boundaries() {
    // Exactly 10 kg is not heavy yet; just above is.
    assert_eq!(rate(10.0, 20.0, 5.0, 20.0).unwrap(), ParcelCategory::Medium);
    assert_eq!(rate(10.0001, 1.0, 1.0, 1.0).unwrap(), ParcelCategory::Heavy);

    // Exactly 50 kg is still heavy; just above is rejected.
    assert_eq!(rate(50.0, 1.0, 1.0, 1.0).unwrap(), ParcelCategory::Heavy);
    assert_eq!(rate(50.0001, 1.0, 1.0, 1.0).unwrap(), ParcelCategory::Rejected);
}

#[test]
fn test_volume_boundaries() {
    // 1499 cm3 is small, exactly 1500 is medium, exactly 2500 is large.
    assert_eq!(rate(1.0, 1.0, 1.0, 1499.0).unwrap(), ParcelCategory::Small);
    assert_eq!(rate(1.0, 1.0, 1.0, 1500.0).unwrap(), ParcelCategory::Medium);
    assert_eq!(rate(1.0, 1.0, 1.0, 2500.0).unwrap(), ParcelCategory::Large);
}

#[test]
fn test_validation_is_idempotent() {
    let parcel = Parcel::new(
        Measurable::kilograms(2.0).unwrap(),
        Volume::from_dimensions(3.0, 10.0, 12.0).unwrap(),
    )
    .unwrap();
    let validator = ParcelValidator::standard().unwrap();

    let first = validator.validate(&parcel).unwrap();
    for _ in 0..10 {
        assert_eq!(validator.validate(&parcel).unwrap(), first);
    }
}

#[test]
fn test_invalid_parcels_are_rejected_at_construction() {
    assert!(matches!(
        rate(-1.0, 1.0, 1.0, 1.0),
        Err(RatingError::InvalidValue { .. })
    ));
    assert!(matches!(
        rate(1.0, -1.0, 1.0, 1.0),
        Err(RatingError::InvalidValue { .. })
    ));
    assert!(matches!(
        rate(0.0, 1.0, 1.0, 1.0),
        Err(RatingError::InvalidValue { .. })
    ));
    assert!(matches!(
        rate(1.0, 0.0, 1.0, 1.0),
        Err(RatingError::InvalidValue { .. })
    ));
}
