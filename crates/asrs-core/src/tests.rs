//! Unit tests for asrs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, RobotId, TransactionId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(RobotId(0) < RobotId(1));
        assert!(TransactionId(100) > TransactionId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(RobotId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }
}

#[cfg(test)]
mod kinematics {
    use crate::{travel_time_secs, KinematicParams};

    fn unit_accel() -> KinematicParams {
        KinematicParams::new(0.5, 0.5)
    }

    #[test]
    fn zero_distance_is_zero_time() {
        // Multipliers must not turn 0 into something else.
        let t = travel_time_secs(0.0, 0.0, &unit_accel(), 5.0, 2.9).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn matches_closed_form() {
        // d = 2 m, a = 1 m/s² → t = 2 * sqrt(2 / 2) = 2 s per axis.
        let kin = KinematicParams::new(1.0, 1.0);
        let t = travel_time_secs(2.0, 2.0, &kin, 1.0, 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-12, "got {t}");
    }

    #[test]
    fn monotone_in_each_distance() {
        let kin = unit_accel();
        let base = travel_time_secs(10.0, 5.0, &kin, 1.2, 1.5).unwrap();
        let more_x = travel_time_secs(11.0, 5.0, &kin, 1.2, 1.5).unwrap();
        let more_z = travel_time_secs(10.0, 6.0, &kin, 1.2, 1.5).unwrap();
        assert!(more_x > base);
        assert!(more_z > base);
    }

    #[test]
    fn multipliers_clamped_below_one() {
        let kin = unit_accel();
        let plain = travel_time_secs(10.0, 0.0, &kin, 1.0, 1.0).unwrap();
        let clamped = travel_time_secs(10.0, 0.0, &kin, 0.2, 0.5).unwrap();
        assert_eq!(plain, clamped);
    }

    #[test]
    fn non_positive_accel_rejected() {
        assert!(travel_time_secs(1.0, 1.0, &KinematicParams::new(0.0, 1.0), 1.0, 1.0).is_err());
        assert!(travel_time_secs(1.0, 1.0, &KinematicParams::new(1.0, -2.0), 1.0, 1.0).is_err());
    }

    #[test]
    fn negative_distance_rejected() {
        assert!(travel_time_secs(-1.0, 0.0, &unit_accel(), 1.0, 1.0).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut c0 = root_a.child(0);
        let mut c1 = root_b.child(1);
        let draws0: Vec<u32> = (0..16).map(|_| c0.gen_range(0..u32::MAX)).collect();
        let draws1: Vec<u32> = (0..16).map(|_| c1.gen_range(0..u32::MAX)).collect();
        assert_ne!(draws0, draws1);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
