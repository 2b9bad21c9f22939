//! Engine-level behavior: selection, parallel fan-out, report shape,
//! structural-defect isolation, and serialization of results.

mod common;

use cohesionmap::{
    evaluate, evaluate_classes, select_metrics, ClassReport, Error, MemberKind, MetricContext,
    MetricKind, MetricValue, Skeleton,
};
use pretty_assertions::assert_eq;

#[test]
fn default_selection_runs_every_registered_metric() {
    let metrics = select_metrics(&[]).unwrap();
    let report = evaluate(&common::fully_shared(), &metrics);
    assert_eq!(report.results.len(), MetricKind::ALL.len());
    let ids: Vec<_> = report.results.iter().map(|r| r.metric.id()).collect();
    assert_eq!(
        ids,
        ["LCOM", "LCOM2", "LCOM3", "LCOM5", "MMAC", "NHD", "SCOM", "CCM"]
    );
}

#[test]
fn unknown_identifier_fails_before_any_computation() {
    let err = select_metrics(&["MMAC", "CAMC"]).unwrap_err();
    assert_eq!(err, Error::UnknownMetric("CAMC".into()));
}

#[test]
fn classes_are_evaluated_independently_and_in_order() {
    let skeletons = common::all_classes();
    let reports = evaluate_classes(&skeletons, &MetricKind::ALL);

    assert_eq!(reports.len(), skeletons.len());
    for (skeleton, report) in skeletons.iter().zip(&reports) {
        assert_eq!(report.class, skeleton.name());
        assert_eq!(report.results.len(), MetricKind::ALL.len());
    }

    // degenerate neighbors do not disturb a well-formed class
    let shared = reports.iter().find(|r| r.class == "FullyShared").unwrap();
    assert_eq!(
        shared.result(MetricKind::Mmac).unwrap().value,
        MetricValue::Defined(1.0)
    );
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let skeletons = common::all_classes();
    let parallel = evaluate_classes(&skeletons, &MetricKind::ALL);
    let sequential: Vec<ClassReport> = skeletons
        .iter()
        .map(|s| evaluate(s, &MetricKind::ALL))
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn repeat_evaluation_is_bit_identical() {
    for skeleton in common::all_classes() {
        let first = evaluate(&skeleton, &MetricKind::ALL);
        let second = evaluate(&skeleton, &MetricKind::ALL);
        assert_eq!(first, second);
    }
}

#[test]
fn context_shares_one_matrix_across_metrics() {
    let skeleton = common::two_clusters();
    let context = MetricContext::new(&skeleton);
    let before = context.matrix() as *const _;
    for metric in MetricKind::ALL {
        context.evaluate(metric);
    }
    assert_eq!(before, context.matrix() as *const _);
}

#[test]
fn structural_defect_is_reported_once_at_build_time() {
    let err = Skeleton::builder("Defective")
        .attribute("real", MemberKind::Instance)
        .method(common::method("m()").with_uses(["imaginary"]))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::UnresolvedAttribute {
            class: "Defective".into(),
            method: "m()".into(),
            attribute: "imaginary".into(),
        }
    );
    // the message carries the class and the dangling reference
    assert!(err.to_string().contains("Defective"));
    assert!(err.to_string().contains("imaginary"));
}

#[test]
fn reports_serialize_with_undefined_kept_distinct_from_zero() {
    let report = evaluate(&common::no_methods(), &[MetricKind::Lcom, MetricKind::Mmac]);
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"LCOM\""));
    assert!(json.contains("\"undefined\""));

    let back: ClassReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert_eq!(
        back.result(MetricKind::Lcom).unwrap().value,
        MetricValue::Defined(0.0)
    );
    assert_eq!(
        back.result(MetricKind::Mmac).unwrap().value,
        MetricValue::Undefined
    );
}
