//! Reference report integration tests — the 384-value output for velocity 127, sustain code 0.
//!
//! Step counts below were captured from the reference table generator and
//! pin the envelope arithmetic bit-for-bit.

use assert_approx_eq::assert_approx_eq;

use nds_adsr::envelope::{steps_to_seconds, EnvelopeParams, Phase, StepCount};
use nds_adsr::report::{OutputFormat, Report};
use nds_adsr::tables::{ATTACK_TABLE, DECAY_TABLE, ZERO_POINT};

const ATTACK_STEPS: [StepCount; 128] = [
    127, 127, 106, 95, 84, 77, 70, 66, 61, 57, 54, 51, 48, 46, 44, 43, //
    41, 39, 37, 36, 35, 33, 33, 32, 31, 29, 29, 28, 27, 27, 26, 26, //
    25, 24, 23, 23, 22, 22, 22, 21, 21, 21, 20, 20, 19, 19, 18, 18, //
    18, 18, 18, 17, 17, 16, 16, 16, 16, 16, 15, 15, 15, 15, 15, 15, //
    14, 14, 14, 13, 13, 13, 13, 13, 13, 12, 12, 12, 12, 12, 12, 12, //
    11, 11, 11, 11, 11, 10, 10, 10, 10, 10, 10, 10, 10, 10, 9, 9, //
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, //
    7, 6, 6, 6, 5, 5, 5, 4, 4, 3, 3, 3, 2, 2, 1, 1,
];

const DECAY_STEPS: [StepCount; 128] = [
    92544, 30848, 18509, 13221, 10283, 8414, 7119, 6170, 5444, 4871, 4407, 4024, 3702, 3428, 3192,
    2986, 2805, 2645, 2502, 2373, 2258, 2153, 2057, 1970, 1889, 1815, 1747, 1683, 1624, 1569, 1518,
    1469, 1424, 1382, 1342, 1304, 1268, 1234, 1202, 1172, 1143, 1115, 1089, 1064, 1040, 1017, 996,
    975, 955, 935, 917, 908, 890, 882, 865, 857, 842, 834, 819, 805, 798, 785, 772, 759, 747, 735,
    723, 712, 702, 686, 676, 662, 652, 639, 626, 613, 601, 590, 579, 568, 555, 542, 529, 518, 506,
    495, 482, 470, 459, 445, 435, 423, 410, 398, 386, 374, 362, 350, 338, 326, 314, 302, 290, 278,
    266, 253, 241, 230, 217, 205, 193, 181, 169, 157, 145, 133, 121, 109, 97, 85, 73, 61, 49, 37,
    25, 13, 7, 2,
];

fn reference() -> Report {
    Report::generate(EnvelopeParams::default())
}

fn steps_of(report: &Report, phase: Phase) -> Vec<StepCount> {
    report.phase(phase).iter().map(|e| e.steps).collect()
}

#[test]
fn attack_steps_match_reference() {
    assert_eq!(steps_of(&reference(), Phase::Attack), ATTACK_STEPS.to_vec());
}

#[test]
fn decay_steps_match_reference() {
    assert_eq!(steps_of(&reference(), Phase::Decay), DECAY_STEPS.to_vec());
}

#[test]
fn attack_steps_agree_with_direct_arithmetic() {
    let report = reference();
    for (entry, &a) in report.phase(Phase::Attack).iter().zip(ATTACK_TABLE.iter()) {
        let mut v = 127;
        let mut n = 0;
        while v > 0 {
            n += 1;
            v = a * v / 256;
        }
        assert_eq!(entry.steps, n, "attack code {}", entry.code);
    }
}

#[test]
fn release_steps_are_ceiling_of_distance() {
    let report = reference();
    let distance = i64::from(127 - ZERO_POINT);
    for (entry, &d) in report.phase(Phase::Release).iter().zip(DECAY_TABLE.iter()) {
        let d = i64::from(d);
        let expected = (distance + d - 1) / d;
        assert_eq!(entry.steps as i64, expected, "release code {}", entry.code);
    }
}

#[test]
fn attack_gets_faster_as_code_increases() {
    let steps = steps_of(&reference(), Phase::Attack);
    assert!(steps[0] > 100);
    assert_eq!(steps[127], 1);
    for pair in steps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn boundary_values() {
    let values: Vec<f64> = reference().seconds().collect();
    assert_eq!(values.len(), 384);
    assert_approx_eq!(values[0], 127.0 / 192.0);
    // 129th value: decay code 0.
    assert_eq!(values[128], 482.0);
    // 257th value: release code 0.
    assert_eq!(values[256], steps_to_seconds(92671));
    assert_approx_eq!(values[256], 482.661_458_333_333_3, 1e-12);
}

#[test]
fn plain_output_is_byte_identical_across_runs() {
    let first = reference().render(OutputFormat::Plain);
    let second = reference().render(OutputFormat::Plain);
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert!(first.ends_with('\n'));
}

#[test]
fn plain_output_parses_back_to_step_counts() {
    let report = reference();
    let text = report.render(OutputFormat::Plain);
    for (line, entry) in text.lines().zip(report.entries()) {
        let seconds: f64 = line.parse().unwrap();
        assert_eq!((seconds * 192.0).round() as StepCount, entry.steps);
    }
}

#[test]
fn write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timings.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    reference().write_to(&mut file, OutputFormat::Csv).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 385);
    assert!(text.contains("release,0,92671,482.6614583333333"));
}
