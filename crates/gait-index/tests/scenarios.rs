use approx::assert_relative_eq;
use gait_index::{
    GaitIndexError, InvalidInputReason, compute_gait_index, compute_gait_index_report,
    config::{ConstantColumnPolicy, PipelineConfig},
    measurement::{GaitAngles, MeasurementSet},
};

fn varied_angles() -> GaitAngles {
    GaitAngles {
        right_knee_angle_min: vec![70.0, 72.0, 68.0, 71.0],
        right_knee_angle_max: vec![140.0, 138.0, 142.0, 139.0],
        left_knee_angle_min: vec![69.0, 73.0, 67.0, 70.0],
        left_knee_angle_max: vec![141.0, 137.0, 143.0, 138.0],
        torso_angle_min: vec![5.0, 6.0, 4.0, 7.0],
        torso_angle_max: vec![15.0, 14.0, 16.0, 13.0],
    }
}

#[test]
fn varied_angles_land_strictly_inside_unit_interval() {
    let index = compute_gait_index(varied_angles()).unwrap();
    assert!(index > 0.0 && index < 1.0, "index = {index}");
    assert_relative_eq!(index, 0.516_013_463_077_833_1, epsilon = 1e-9);
}

fn ragged_angles() -> GaitAngles {
    let mut angles = varied_angles();
    angles.left_knee_angle_max.truncate(3);
    angles
}

/// Every order of the six columns, generated by adjacent swaps.
fn column_orders() -> Vec<[usize; 6]> {
    let mut orders = vec![[0, 1, 2, 3, 4, 5]];
    let mut seen = 0;
    while seen < orders.len() {
        let order = orders[seen];
        for i in 0..5 {
            let mut next = order;
            next.swap(i, i + 1);
            if !orders.contains(&next) {
                orders.push(next);
            }
        }
        seen += 1;
    }
    orders
}

fn reordered(angles: &GaitAngles, order: [usize; 6]) -> MeasurementSet {
    let set = MeasurementSet::from(angles.clone());
    let columns = set.columns().collect::<Vec<_>>();
    MeasurementSet::from_pairs(
        order
            .iter()
            .map(|&i| (columns[i].label.clone(), columns[i].samples.clone())),
    )
    .unwrap()
}

#[test]
fn column_order_does_not_change_index_of_mirrored_angles() {
    // Right knee and torso extrema deviate in exact opposition.
    let orders = column_orders();
    assert_eq!(orders.len(), 720);
    for angles in [varied_angles(), ragged_angles()] {
        let base = compute_gait_index(angles.clone()).unwrap();
        for order in &orders {
            let index = compute_gait_index(reordered(&angles, *order)).unwrap();
            assert_relative_eq!(index, base, epsilon = 1e-9);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let first = compute_gait_index(varied_angles()).unwrap();
    let second = compute_gait_index(varied_angles()).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn empty_set_is_invalid_input() {
    let err = compute_gait_index(MeasurementSet::new()).unwrap_err();
    assert_eq!(
        err,
        GaitIndexError::InvalidInput {
            reason: InvalidInputReason::EmptySet
        }
    );
    assert!(err.is_input_error());
}

#[test]
fn empty_series_is_invalid_input() {
    let mut angles = varied_angles();
    angles.left_knee_angle_max.clear();
    let err = compute_gait_index(angles).unwrap_err();
    assert_eq!(
        err,
        GaitIndexError::InvalidInput {
            reason: InvalidInputReason::EmptyColumn {
                label: "left_knee_angle_max".to_owned()
            }
        }
    );
}

#[test]
fn identical_series_in_every_column_are_constant() {
    let series = vec![10.0, 12.0, 11.0, 13.0];
    let angles = GaitAngles {
        right_knee_angle_min: series.clone(),
        right_knee_angle_max: series.clone(),
        left_knee_angle_min: series.clone(),
        left_knee_angle_max: series.clone(),
        torso_angle_min: series.clone(),
        torso_angle_max: series,
    };
    let err = compute_gait_index(angles).unwrap_err();
    assert!(matches!(err, GaitIndexError::ConstantColumn { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn constant_columns_are_rejected() {
    let angles = GaitAngles {
        right_knee_angle_min: vec![70.0; 4],
        right_knee_angle_max: vec![140.0; 4],
        left_knee_angle_min: vec![69.0; 4],
        left_knee_angle_max: vec![141.0; 4],
        torso_angle_min: vec![5.0; 4],
        torso_angle_max: vec![15.0; 4],
    };
    assert_eq!(
        compute_gait_index(angles),
        Err(GaitIndexError::ConstantColumn {
            labels: vec!["right_knee_angle_min".to_owned()]
        })
    );
}

#[test]
fn ragged_series_are_aligned_and_imputed() {
    let report =
        compute_gait_index_report(&ragged_angles().into(), &PipelineConfig::default()).unwrap();
    assert_eq!(report.rows, 4);
    assert_eq!(report.imputed_cells, 1);
    assert!(report.gait_index > 0.0 && report.gait_index < 1.0);
    assert_relative_eq!(report.gait_index, 0.545_460_227_702_268_2, epsilon = 1e-9);
}

#[test]
fn uniform_rows_under_zero_policy_have_no_score_range() {
    let series = vec![10.0, 12.0, 11.0, 13.0];
    let set = MeasurementSet::from_pairs(
        ["a", "b", "c", "d"].map(|label| (label.to_owned(), series.clone())),
    )
    .unwrap();
    let config = PipelineConfig {
        constant_column_policy: ConstantColumnPolicy::Zero,
        ..PipelineConfig::default()
    };
    let err = compute_gait_index_report(&set, &config).unwrap_err();
    assert!(matches!(err, GaitIndexError::DegenerateScoreRange { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn single_row_under_zero_policy_has_no_score_range() {
    let angles = GaitAngles {
        right_knee_angle_min: vec![70.0],
        right_knee_angle_max: vec![140.0],
        left_knee_angle_min: vec![69.0],
        left_knee_angle_max: vec![141.0],
        torso_angle_min: vec![5.0],
        torso_angle_max: vec![15.0],
    };
    let config = PipelineConfig {
        constant_column_policy: ConstantColumnPolicy::Zero,
        ..PipelineConfig::default()
    };
    assert!(matches!(
        compute_gait_index_report(&angles.into(), &config),
        Err(GaitIndexError::DegenerateScoreRange { .. })
    ));
}

#[test]
fn null_column_in_json_is_invalid_input() {
    let err = serde_json::from_str::<MeasurementSet>(
        r#"{"right_knee_angle_min": [70, 72], "torso_angle_max": null}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("invalid input: column 'torso_angle_max' is null"),
        "{err}"
    );
}

#[test]
fn all_missing_column_is_degenerate() {
    let mut angles = varied_angles();
    angles.torso_angle_max = vec![f64::NAN, f64::NAN];
    assert_eq!(
        compute_gait_index(angles),
        Err(GaitIndexError::DegenerateColumn {
            label: "torso_angle_max".to_owned()
        })
    );
}

#[test]
fn fewer_than_four_columns_is_insufficient() {
    let set = MeasurementSet::from_pairs([
        ("a".to_owned(), vec![1.0, 2.0, 4.0]),
        ("b".to_owned(), vec![3.0, 1.0, 2.0]),
        ("c".to_owned(), vec![5.0, 6.0, 4.0]),
    ])
    .unwrap();
    assert_eq!(
        compute_gait_index(set),
        Err(GaitIndexError::InsufficientFeatures {
            required: 4,
            available: 3
        })
    );
}

#[test]
fn custom_labels_give_the_same_index() {
    let canonical = compute_gait_index(varied_angles()).unwrap();
    let custom = varied_angles()
        .labelled(["rk-min", "rk-max", "lk-min", "lk-max", "t-min", "t-max"])
        .unwrap();
    assert_relative_eq!(compute_gait_index(custom).unwrap(), canonical, epsilon = 1e-12);
}

#[test]
fn report_is_consistent() {
    let report =
        compute_gait_index_report(&varied_angles().into(), &PipelineConfig::default()).unwrap();
    assert!(report.row_indices.contains(&0.0));
    assert!(report.row_indices.contains(&1.0));
    assert!(
        report
            .explained_variance
            .windows(2)
            .all(|w| w[0] >= w[1])
    );
    let mean = report.row_indices.iter().sum::<f64>() / 4.0;
    assert_relative_eq!(report.gait_index, mean);
}

#[test]
fn json_input_matches_typed_input() {
    let set: MeasurementSet = serde_json::from_str(
        r#"{
            "right_knee_angle_min": [70, 72, 68, 71],
            "right_knee_angle_max": [140, 138, 142, 139],
            "left_knee_angle_min": [69, 73, 67, 70],
            "left_knee_angle_max": [141, 137, 143, 138],
            "torso_angle_min": [5, 6, 4, 7],
            "torso_angle_max": [15, 14, 16, 13]
        }"#,
    )
    .unwrap();
    assert_eq!(set, MeasurementSet::from(varied_angles()));
}

#[test]
fn json_nulls_are_imputed() {
    let set: MeasurementSet = serde_json::from_str(
        r#"{
            "right_knee_angle_min": [70, 72, null, 71],
            "right_knee_angle_max": [140, 138, 142, 139],
            "left_knee_angle_min": [69, 73, 67, 70],
            "left_knee_angle_max": [141, 137, 143, 138],
            "torso_angle_min": [5, 6, 4, 7],
            "torso_angle_max": [15, 14, 16, 13]
        }"#,
    )
    .unwrap();
    let report = compute_gait_index_report(&set, &PipelineConfig::default()).unwrap();
    assert_eq!(report.imputed_cells, 1);
    assert!((0.0..=1.0).contains(&report.gait_index));
}
