use cliniscore_core::models::{BodySystem, Sex};
use cliniscore_scales::catalog::{CriterionKind, Scale};
use cliniscore_scales::scales::centor::Centor;
use cliniscore_scales::selection::{CriteriaSelection, CriterionValue};
use cliniscore_scales::{ScoringContext, aggregate, all_scales, scale_for};

fn ctx(age: u32, system: Option<BodySystem>) -> ScoringContext {
    ScoringContext {
        age,
        sex: Sex::Male,
        system,
    }
}

fn flags(scale: Scale, ids: &[&str]) -> CriteriaSelection {
    CriteriaSelection::from_entries(scale, ids.iter().map(|id| (*id, true)))
}

#[test]
fn curb65_age_point_comes_from_patient_age() {
    let empty = CriteriaSelection::new();
    assert_eq!(aggregate(Scale::Curb65, &empty, &ctx(70, None)), 1.0);
    assert_eq!(aggregate(Scale::Curb65, &empty, &ctx(64, None)), 0.0);
    assert_eq!(aggregate(Scale::Curb65, &empty, &ctx(65, None)), 1.0);
}

#[test]
fn curb65_ignores_explicit_age_entry() {
    let selection = flags(Scale::Curb65, &["age_65"]);
    assert_eq!(aggregate(Scale::Curb65, &selection, &ctx(40, None)), 0.0);
    assert_eq!(aggregate(Scale::Curb65, &selection, &ctx(80, None)), 1.0);
}

#[test]
fn curb65_maximum() {
    let selection = flags(
        Scale::Curb65,
        &["confusion", "urea", "respiratory_rate", "blood_pressure"],
    );
    assert_eq!(aggregate(Scale::Curb65, &selection, &ctx(80, None)), 5.0);
}

#[test]
fn centor_age_adjustment() {
    let all = flags(
        Scale::Centor,
        &["fever", "no_cough", "lymphadenopathy", "tonsillar_exudate"],
    );
    assert_eq!(aggregate(Scale::Centor, &all, &ctx(10, None)), 5.0);
    assert_eq!(aggregate(Scale::Centor, &all, &ctx(2, None)), 0.0);
    assert_eq!(aggregate(Scale::Centor, &all, &ctx(30, None)), 4.0);
    assert_eq!(aggregate(Scale::Centor, &all, &ctx(50, None)), 3.0);
}

#[test]
fn centor_age_boundaries() {
    assert_eq!(Centor::adjust_for_age(2.0, 3), 3.0);
    assert_eq!(Centor::adjust_for_age(2.0, 14), 3.0);
    assert_eq!(Centor::adjust_for_age(2.0, 15), 2.0);
    assert_eq!(Centor::adjust_for_age(2.0, 44), 2.0);
    assert_eq!(Centor::adjust_for_age(2.0, 45), 1.0);
    assert_eq!(Centor::adjust_for_age(0.0, 60), -1.0);
}

#[test]
fn centor_unknown_age_is_forced_to_zero() {
    let all = flags(Scale::Centor, &["fever", "no_cough"]);
    assert_eq!(aggregate(Scale::Centor, &all, &ctx(0, None)), 0.0);
}

#[test]
fn abcd2_option_groups_count_selected_option_only() {
    let mut selection = CriteriaSelection::new();
    selection.set(Scale::Abcd2, "age_60", true);
    selection.set(Scale::Abcd2, "clinical_features", "unilateral_weakness");
    selection.set(Scale::Abcd2, "duration", "10_to_59");
    assert_eq!(aggregate(Scale::Abcd2, &selection, &ctx(70, None)), 4.0);

    selection.set(Scale::Abcd2, "clinical_features", "speech_disturbance");
    assert_eq!(aggregate(Scale::Abcd2, &selection, &ctx(70, None)), 3.0);
}

#[test]
fn abcd2_unknown_option_scores_zero() {
    let mut selection = CriteriaSelection::new();
    selection.set(Scale::Abcd2, "duration", "forever");
    assert_eq!(aggregate(Scale::Abcd2, &selection, &ctx(70, None)), 0.0);
}

#[test]
fn abcd2_unknown_option_does_not_touch() {
    let mut selection = CriteriaSelection::new();
    selection.set(Scale::Abcd2, "duration", "forever");
    selection.set(Scale::Abcd2, "no_such_group", "unilateral_weakness");
    assert!(!selection.is_touched());
    assert!(!scale_for(Scale::Abcd2).is_reported(&selection, &ctx(70, Some(BodySystem::Neurological))));
}

#[test]
fn wells_half_points_are_kept() {
    let selection = flags(Scale::WellsPe, &["heart_rate", "hemoptysis"]);
    assert_eq!(aggregate(Scale::WellsPe, &selection, &ctx(50, None)), 2.5);
}

#[test]
fn chads_vasc_is_scorable_on_demand() {
    let selection = flags(Scale::ChadsVasc, &["age_75", "hypertension", "sex_female"]);
    assert_eq!(aggregate(Scale::ChadsVasc, &selection, &ctx(80, None)), 4.0);
}

#[test]
fn unknown_criteria_contribute_nothing() {
    let selection = flags(Scale::Qsofa, &["respiratory_rate", "made_up"]);
    assert_eq!(aggregate(Scale::Qsofa, &selection, &ctx(50, None)), 1.0);
}

#[test]
fn enabling_a_flag_never_lowers_a_score() {
    let plain = [Scale::Qsofa, Scale::ChadsVasc, Scale::Alvarado, Scale::WellsPe];
    for scale in plain {
        let flag_ids: Vec<&str> = scale_for(scale)
            .criteria()
            .iter()
            .filter(|c| matches!(c.kind, CriterionKind::Flag { .. }))
            .map(|c| c.id.as_str())
            .collect();

        let mut selection = CriteriaSelection::new();
        let mut previous = aggregate(scale, &selection, &ctx(50, None));
        for id in flag_ids {
            selection.set(scale, id, true);
            let current = aggregate(scale, &selection, &ctx(50, None));
            assert!(current >= previous, "{scale}: enabling {id} lowered the score");
            previous = current;
        }
    }
}

#[test]
fn plain_scales_are_touched_by_any_toggle() {
    let mut selection = CriteriaSelection::new();
    assert!(!selection.is_touched());
    selection.set(Scale::Qsofa, "altered_mentation", false);
    assert!(selection.is_touched());
}

#[test]
fn abcd2_defaults_do_not_touch() {
    let selection = CriteriaSelection::from_entries(
        Scale::Abcd2,
        [
            ("age_60", CriterionValue::Flag(false)),
            ("blood_pressure", CriterionValue::Flag(false)),
            ("clinical_features", CriterionValue::Choice("none".to_string())),
            ("duration", CriterionValue::Choice("under_10".to_string())),
            ("diabetes", CriterionValue::Flag(false)),
        ],
    );
    assert!(!selection.is_touched());
}

#[test]
fn abcd2_stays_touched_after_returning_to_default() {
    let mut selection = CriteriaSelection::new();
    selection.set(Scale::Abcd2, "clinical_features", "speech_disturbance");
    assert!(selection.is_touched());
    selection.set(Scale::Abcd2, "clinical_features", "none");
    assert!(selection.is_touched());
}

#[test]
fn every_scale_scores_zero_when_empty() {
    for scale in all_scales() {
        if scale.scale() == Scale::Centor {
            continue;
        }
        assert_eq!(
            scale.score(&CriteriaSelection::new(), &ctx(30, None)),
            0.0,
            "{}",
            scale.name()
        );
    }
}
