//! Random sample generator used to mimic device readings

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_device_shared::now_ns;

use super::DriverError;

/// Draw an integer from `min..max`.
///
/// The generator is reseeded from the nanosecond clock on every call, so
/// calls landing on the same clock tick return the same sample.
pub fn random_int(min: i64, max: i64) -> Result<i64, DriverError> {
    if max <= min {
        return Err(DriverError::EmptyRange { min, max });
    }

    let mut rng = StdRng::seed_from_u64(now_ns() as u64);
    Ok(rng.gen_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_device_shared::limits;

    #[test]
    fn test_samples_stay_in_range() {
        for _ in 0..1000 {
            let v = random_int(limits::MIN_INT8, limits::MAX_INT8).unwrap();
            assert!((limits::MIN_INT8..limits::MAX_INT8).contains(&v));
        }
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(random_int(5, 6).unwrap(), 5);
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(matches!(
            random_int(10, 10),
            Err(DriverError::EmptyRange { min: 10, max: 10 })
        ));
        assert!(random_int(10, -10).is_err());
    }
}
