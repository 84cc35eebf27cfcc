mod common;

use common::synthetic_quad::{rectangle, skew_then_rotate, view};
use quad_aspect::config::batch::BatchConfig;
use quad_aspect::{Pt2, Rectifier};

fn sample_quads() -> Vec<Vec<Pt2>> {
    let mut quads = vec![
        vec![
            Pt2::new(100.0, 100.0),
            Pt2::new(400.0, 120.0),
            Pt2::new(450.0, 400.0),
            Pt2::new(80.0, 380.0),
        ],
        vec![
            Pt2::new(751.0, 220.0),
            Pt2::new(1833.0, 502.0),
            Pt2::new(1198.0, 888.0),
            Pt2::new(63.0, 409.0),
        ],
        vec![Pt2::new(3.0, 3.0); 4],
        vec![Pt2::new(0.0, 0.0); 5],
    ];
    for i in 0..16 {
        let g = 1e-4 * (i as f64 + 1.0);
        let h = skew_then_rotate(g, -0.5 * g, 0.1 * i as f64);
        quads.push(view(&h, &rectangle((10.0, 20.0), 160.0, 90.0)));
    }
    quads
}

#[test]
fn batch_matches_sequential_evaluation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let rectifier = Rectifier::default();
    let pp = Pt2::new(960.0, 540.0);
    let quads = sample_quads();
    let reports = rectifier.process_batch(&quads, pp);
    assert_eq!(reports.len(), quads.len());
    for (quad, report) in quads.iter().zip(&reports) {
        assert_eq!(&report.corners, quad);
        assert_eq!(report.outcome, rectifier.compute(quad, pp));
    }
    assert!(reports[2].outcome.is_err());
    assert!(reports[3].outcome.is_err());
}

#[test]
fn report_serialises_success_and_failure() {
    let rectifier = Rectifier::default();
    let quads = sample_quads();
    let ok = rectifier.process(&quads[0], Pt2::origin());
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["outcome"]["status"], "success");
    assert_eq!(json["outcome"]["aspectRatio"]["kind"], "reliable");
    assert!(json["trace"]["sideLengths"]["width1"].as_f64().unwrap() > 0.0);
    assert_eq!(json["trace"]["timings"]["stages"].as_array().unwrap().len(), 4);

    let failed = rectifier.process(&quads[2], Pt2::origin());
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["outcome"]["status"], "failure");
    assert_eq!(json["outcome"]["error"]["kind"], "degenerateGeometry");
    assert!(json["trace"].get("vanishingPoints").is_none());
}

#[test]
fn bundled_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/aspect_batch.json");
    let cfg: BatchConfig = quad_aspect::config::load_config(std::path::Path::new(path)).unwrap();
    assert_eq!(cfg.resolve_principal_point(), Pt2::new(960.0, 540.0));
    assert_eq!(cfg.quads.len(), 4);
    let reports = Rectifier::new(cfg.options).process_batch(
        &cfg.quads.iter().map(|q| q.points()).collect::<Vec<_>>(),
        cfg.resolve_principal_point(),
    );
    assert!(reports[0].ratio().is_some());
    assert!(reports[3].ratio().is_none());
}
