use mindwell_instruments::instruments::phq9;
use mindwell_instruments::scoring::{ItemResponse, total_score};
use mindwell_instruments::severity::SeverityBand;

#[test]
fn bands_partition_the_score_range() {
    for total in 0..=phq9::MAX_TOTAL {
        let claiming: Vec<_> = SeverityBand::ALL
            .iter()
            .filter(|band| {
                let (lo, hi) = band.bounds();
                (lo..=hi).contains(&total)
            })
            .collect();
        assert_eq!(claiming.len(), 1, "total {total} claimed by {claiming:?}");
        assert_eq!(SeverityBand::classify(total), *claiming[0]);
    }
}

#[test]
fn boundary_totals_belong_to_the_lower_band() {
    assert_eq!(SeverityBand::classify(4), SeverityBand::Minimal);
    assert_eq!(SeverityBand::classify(5), SeverityBand::Mild);
    assert_eq!(SeverityBand::classify(9), SeverityBand::Mild);
    assert_eq!(SeverityBand::classify(10), SeverityBand::Moderate);
    assert_eq!(SeverityBand::classify(14), SeverityBand::Moderate);
    assert_eq!(SeverityBand::classify(15), SeverityBand::ModeratelySevere);
    assert_eq!(SeverityBand::classify(19), SeverityBand::ModeratelySevere);
    assert_eq!(SeverityBand::classify(20), SeverityBand::Severe);
}

#[test]
fn classification_never_gets_less_severe_as_scores_rise() {
    for total in 0..phq9::MAX_TOTAL {
        assert!(SeverityBand::classify(total) <= SeverityBand::classify(total + 1));
    }
}

#[test]
fn out_of_range_totals_clamp_to_boundary_bands() {
    assert_eq!(SeverityBand::classify(-3), SeverityBand::Minimal);
    assert_eq!(SeverityBand::classify(99), SeverityBand::Severe);
}

#[test]
fn classification_is_stable_across_calls() {
    let first = SeverityBand::classify(12);
    let second = SeverityBand::classify(12);
    assert_eq!(first, second);
    assert_eq!(first.color_token(), second.color_token());
    assert_eq!(first.guidance(), second.guidance());
}

#[test]
fn zero_total_is_minimal() {
    let answers: Vec<_> = (0..9).map(|item| ItemResponse { item, value: 0 }).collect();
    let total = total_score(&answers, phq9::ITEM_COUNT);
    assert_eq!(total, 0);
    assert_eq!(SeverityBand::classify(total), SeverityBand::Minimal);
}

#[test]
fn all_max_answers_are_severe() {
    let answers: Vec<_> = (0..9).map(|item| ItemResponse { item, value: 3 }).collect();
    let total = total_score(&answers, phq9::ITEM_COUNT);
    assert_eq!(total, 27);
    assert_eq!(SeverityBand::classify(total), SeverityBand::Severe);
}

#[test]
fn partial_submission_classifies_on_what_was_answered() {
    let answers: Vec<_> = (0..4).map(|item| ItemResponse { item, value: 3 }).collect();
    let total = total_score(&answers, phq9::ITEM_COUNT);
    assert_eq!(total, 12);
    assert_eq!(SeverityBand::classify(total), SeverityBand::Moderate);
}

#[test]
fn urgent_bands_share_guidance_but_not_presentation() {
    let moderately_severe = SeverityBand::ModeratelySevere;
    let severe = SeverityBand::Severe;
    assert_eq!(moderately_severe.guidance(), severe.guidance());
    assert_ne!(moderately_severe.label(), severe.label());
    assert_ne!(moderately_severe.color_token(), severe.color_token());
}

#[test]
fn every_band_carries_display_metadata() {
    for band in SeverityBand::ALL {
        assert!(band.color_token().starts_with('#'));
        assert!(!band.guidance().is_empty());
        assert!(!band.label().is_empty());
    }
}
