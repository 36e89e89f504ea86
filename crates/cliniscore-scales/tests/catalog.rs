use std::collections::HashSet;

use cliniscore_scales::catalog::{CriterionKind, Scale};
use cliniscore_scales::{all_scales, get_scale, scale_for};

#[test]
fn every_scale_is_registered_once() {
    let scales: Vec<Scale> = all_scales().iter().map(|s| s.scale()).collect();
    assert_eq!(scales, Scale::ALL.to_vec());
}

#[test]
fn lookup_by_id_or_name() {
    assert_eq!(get_scale("wells_pe").map(|s| s.scale()), Some(Scale::WellsPe));
    assert_eq!(get_scale("Wells' PE").map(|s| s.scale()), Some(Scale::WellsPe));
    assert_eq!(get_scale("CURB-65").map(|s| s.name().to_string()), Some("CURB-65".to_string()));
    assert!(get_scale("heart").is_none());
}

#[test]
fn criterion_ids_are_unique_within_a_scale() {
    for scale in all_scales() {
        let mut seen = HashSet::new();
        for criterion in scale.criteria() {
            assert!(
                seen.insert(criterion.id.as_str()),
                "{}: duplicate criterion {}",
                scale.name(),
                criterion.id
            );
        }
    }
}

#[test]
fn choice_defaults_are_the_zero_point_options() {
    let abcd2 = scale_for(Scale::Abcd2);
    let clinical = abcd2.criterion("clinical_features").unwrap();
    let duration = abcd2.criterion("duration").unwrap();

    let default_clinical = clinical.kind.default_option().unwrap();
    assert_eq!(default_clinical.value, "none");
    assert_eq!(default_clinical.points, 0.0);

    let default_duration = duration.kind.default_option().unwrap();
    assert_eq!(default_duration.value, "under_10");
    assert_eq!(default_duration.points, 0.0);
}

#[test]
fn every_choice_default_is_its_lowest_weight_option() {
    for scale in all_scales() {
        for criterion in scale.criteria() {
            if let CriterionKind::Choice { options } = &criterion.kind {
                let default = criterion.kind.default_option().unwrap();
                assert!(options.iter().all(|o| o.points >= default.points));
            }
        }
    }
}

#[test]
fn maximum_totals_match_published_ranges() {
    let expected = [
        (Scale::Curb65, 5.0),
        (Scale::Qsofa, 3.0),
        (Scale::ChadsVasc, 10.0),
        (Scale::Alvarado, 10.0),
        (Scale::Abcd2, 7.0),
        (Scale::WellsPe, 12.5),
        (Scale::Centor, 4.0),
    ];
    for (scale, max) in expected {
        let total: f64 = scale_for(scale)
            .criteria()
            .iter()
            .map(|c| c.kind.max_points())
            .sum();
        assert_eq!(total, max, "{scale}");
    }
}

#[test]
fn curb65_age_point_is_derived() {
    let criterion = scale_for(Scale::Curb65).criterion("age_65").unwrap();
    assert!(matches!(criterion.kind, CriterionKind::Derived { points } if points == 1.0));
}

#[test]
fn alvarado_criteria_are_grouped() {
    let groups: HashSet<_> = scale_for(Scale::Alvarado)
        .criteria()
        .iter()
        .filter_map(|c| c.group.as_deref())
        .collect();
    assert_eq!(groups, HashSet::from(["symptom", "sign", "lab"]));
}

#[test]
fn scales_serialize_by_published_name() {
    assert_eq!(serde_json::to_string(&Scale::WellsPe).unwrap(), "\"Wells' PE\"");
    let parsed: Scale = serde_json::from_str("\"CHA2DS2-VASc\"").unwrap();
    assert_eq!(parsed, Scale::ChadsVasc);
}

#[test]
fn catalog_serializes_with_kind_tags() {
    let json = serde_json::to_value(scale_for(Scale::Abcd2).criteria()).unwrap();
    assert_eq!(json[0]["kind"]["type"], "flag");
    assert_eq!(json[2]["kind"]["type"], "choice");
    assert_eq!(json[2]["kind"]["options"][0]["value"], "unilateral_weakness");
}
