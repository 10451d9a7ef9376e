use processor::Processor;
use scheduler::{ConfigurationError, Pid, Policy, Workload};

#[test]
pub fn mismatched_lengths() {
    assert_eq!(
        Workload::new(&[5, 3, 8], &[0, 0], None),
        Err(ConfigurationError::LengthMismatch {
            bursts: 3,
            arrivals: 2
        })
    );
}

#[test]
pub fn arrival_after_everything_finished() {
    assert_eq!(
        Workload::new(&[1, 1], &[0, 5], None),
        Err(ConfigurationError::IdleGap {
            pid: Pid::new(1),
            arrival: 5,
            drained_at: 1
        })
    );
}

#[test]
pub fn same_input_same_report() {
    let workload =
        Workload::new(&[2, 6, 4, 1, 3], &[0, 1, 1, 3, 9], Some(&[3, 1, 2, 0, 1])).unwrap();
    for policy in Policy::ALL {
        let first = Processor::run(super::scheduler(policy), &workload).unwrap();
        let second = Processor::run(super::scheduler(policy), &workload).unwrap();
        assert_eq!(first, second);
    }
}
