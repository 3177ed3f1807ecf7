use crate::interpolate::LocationSnapshot;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Excellent,
    Good,
    Poor,
}

impl Visibility {
    pub fn from_waves(waves_m: f64) -> Self {
        if waves_m < 2.0 {
            Self::Excellent
        } else if waves_m < 4.0 {
            Self::Good
        } else {
            Self::Poor
        }
    }
}

/// A snapshot perturbed by bounded uniform jitter, for display only.
/// Not a physical model; nothing here is reproducible on purpose.
#[derive(Debug, Clone, Serialize)]
pub struct SampledReading {
    pub temp_c: f64,
    pub wind_kmh: f64,
    pub waves_m: f64,
    pub visibility: Visibility,
    pub sea_condition: String,
}

/// Perturbs each baseline by `(U(0,1) - 0.5) * range * scale`. Wind and wave
/// height are physical quantities and clamp to zero; temperature may go
/// negative freely.
pub fn sample<R: Rng>(snapshot: &LocationSnapshot, scale: f64, rng: &mut R) -> SampledReading {
    let jitter = |range: f64, rng: &mut R| (rng.r#gen::<f64>() - 0.5) * range * scale;

    let temp_c = snapshot.temp_c + jitter(snapshot.temp_range, rng);
    let wind_kmh = (snapshot.wind_kmh + jitter(snapshot.wind_range, rng)).max(0.0);
    let waves_m = (snapshot.waves_m + jitter(snapshot.waves_range, rng)).max(0.0);

    SampledReading {
        temp_c,
        wind_kmh,
        waves_m,
        visibility: Visibility::from_waves(waves_m),
        sea_condition: snapshot.sea_condition.clone(),
    }
}

/// Per-tick streams soften the jitter so consecutive readings do not jump.
pub const TICK_NOISE_SCALE: f64 = 0.3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::locate;
    use crate::route::expedition_route;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn wind_and_waves_never_go_negative() {
        let route = expedition_route();
        let mut rng = SmallRng::seed_from_u64(421);
        for trial in 0..10_000 {
            let progress = (trial % 101) as f64 / 100.0;
            let snapshot = locate(&route, progress);
            let reading = sample(&snapshot, 1.0, &mut rng);
            assert!(reading.wind_kmh >= 0.0);
            assert!(reading.waves_m >= 0.0);
        }
    }

    #[test]
    fn jitter_is_bounded_by_half_the_scaled_range() {
        let route = expedition_route();
        let snapshot = locate(&route, 0.5);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let reading = sample(&snapshot, 1.0, &mut rng);
            assert!((reading.temp_c - snapshot.temp_c).abs() <= snapshot.temp_range / 2.0 + 1e-9);
        }
    }

    #[test]
    fn zero_scale_reproduces_the_snapshot() {
        let route = expedition_route();
        let snapshot = locate(&route, 0.25);
        let mut rng = SmallRng::seed_from_u64(1);
        let reading = sample(&snapshot, 0.0, &mut rng);
        assert_eq!(reading.temp_c, snapshot.temp_c);
        assert_eq!(reading.wind_kmh, snapshot.wind_kmh);
        assert_eq!(reading.waves_m, snapshot.waves_m);
    }

    #[test]
    fn visibility_thresholds() {
        assert_eq!(Visibility::from_waves(1.9), Visibility::Excellent);
        assert_eq!(Visibility::from_waves(2.0), Visibility::Good);
        assert_eq!(Visibility::from_waves(4.0), Visibility::Poor);
    }
}
