use mindwell_core::models::symptom::SymptomFlags;
use mindwell_instruments::risk::{CRISIS_RESOURCES, RiskTier};

#[test]
fn tiers_partition_the_count_range() {
    for count in 0..=7 {
        let claiming: Vec<_> = RiskTier::ALL
            .iter()
            .filter(|tier| {
                let (lo, hi) = tier.bounds();
                (lo..=hi).contains(&count)
            })
            .collect();
        assert_eq!(claiming.len(), 1, "count {count} claimed by {claiming:?}");
        assert_eq!(RiskTier::classify(count), *claiming[0]);
    }
}

#[test]
fn boundary_counts_belong_to_the_lower_tier() {
    assert_eq!(RiskTier::classify(2), RiskTier::Low);
    assert_eq!(RiskTier::classify(3), RiskTier::Medium);
    assert_eq!(RiskTier::classify(4), RiskTier::Medium);
    assert_eq!(RiskTier::classify(5), RiskTier::High);
}

#[test]
fn classification_never_gets_less_severe_as_counts_rise() {
    for count in 0..7 {
        assert!(RiskTier::classify(count) <= RiskTier::classify(count + 1));
    }
}

#[test]
fn out_of_range_counts_clamp_to_boundary_tiers() {
    assert_eq!(RiskTier::classify(-1), RiskTier::Low);
    assert_eq!(RiskTier::classify(12), RiskTier::High);
}

#[test]
fn checklist_flags_classify_by_count() {
    let two = SymptomFlags {
        mood: true,
        anxiety: true,
        ..Default::default()
    };
    assert_eq!(two.count(), 2);
    assert_eq!(RiskTier::classify_flags(&two), RiskTier::Low);

    let four = SymptomFlags {
        mood: true,
        sleep: true,
        energy: true,
        social: true,
        ..Default::default()
    };
    assert_eq!(four.count(), 4);
    assert_eq!(RiskTier::classify_flags(&four), RiskTier::Medium);

    let all = SymptomFlags {
        mood: true,
        sleep: true,
        appetite: true,
        energy: true,
        concentration: true,
        anxiety: true,
        social: true,
    };
    assert_eq!(all.count(), 7);
    assert_eq!(RiskTier::classify_flags(&all), RiskTier::High);
}

#[test]
fn medium_tier_extends_the_low_tier_list() {
    let low = RiskTier::Low.recommendations();
    let medium = RiskTier::Medium.recommendations();
    assert_eq!(low.len(), 4);
    assert_eq!(medium.len(), 8);
    assert_eq!(&medium[..4], &low[..]);
}

#[test]
fn high_tier_list_is_distinct_urgent_care() {
    let high = RiskTier::High.recommendations();
    assert_eq!(high.len(), 6);
    for item in &RiskTier::Medium.recommendations() {
        assert!(!high.contains(item));
    }
}

#[test]
fn every_tier_has_recommendations() {
    for tier in RiskTier::ALL {
        assert!(!tier.recommendations().is_empty());
    }
}

#[test]
fn crisis_resources_are_available_for_high_risk() {
    assert!(!CRISIS_RESOURCES.is_empty());
    for line in CRISIS_RESOURCES {
        assert!(!line.is_empty());
    }
}
