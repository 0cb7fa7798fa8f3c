use pupilsynth::generator::ResponseMode;
use pupilsynth::pipeline::{run, PipelineConfig};
use pupilsynth::plot::{render_svg, PlotConfig};
use pupilsynth::PrfError;

fn argmax(samples: &[f64]) -> usize {
    samples
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

#[test]
fn test_run_and_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sandbox.svg");

    let config = PipelineConfig {
        impulse_ioi_ms: 750,
        weight: 4,
        mode: ResponseMode::Motor,
        ..PipelineConfig::default()
    };
    let output = run(&config).unwrap();
    render_svg(&path, &output.panels(), &PlotConfig::default()).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    for (label, _) in output.panels() {
        assert!(svg.contains(label), "missing panel '{}'", label);
    }
}

#[test]
fn test_motor_and_non_motor_compare_after_normalization() {
    let motor = run(&PipelineConfig {
        mode: ResponseMode::Motor,
        ..PipelineConfig::default()
    })
    .unwrap();
    let non_motor = run(&PipelineConfig::default()).unwrap();

    // Raw kernels differ in scale by orders of magnitude
    let ratio = motor.prf.peak().unwrap() / non_motor.prf.peak().unwrap();
    assert!(ratio > 1e2);

    // Once normalized, the kernels differ only in latency
    let motor_prf = motor.prf.normalized();
    let non_motor_prf = non_motor.prf.normalized();
    assert_eq!(argmax(motor_prf.samples()), 930);
    assert_eq!(argmax(non_motor_prf.samples()), 512);

    // Before the non-motor peak the motor response is still lower
    for t in [100, 256, 400] {
        assert!(motor_prf.samples()[t] < non_motor_prf.samples()[t]);
    }
    // and it stays high after the non-motor response has decayed
    assert!(motor_prf.samples()[1300] > non_motor_prf.samples()[1300]);
}

#[test]
fn test_render_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("sandbox.svg");

    let output = run(&PipelineConfig::default()).unwrap();
    let result = render_svg(&path, &output.panels(), &PlotConfig::default());
    assert!(matches!(result, Err(PrfError::Render(_))));
}
