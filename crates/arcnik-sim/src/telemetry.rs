use rand::Rng;
use serde::Serialize;

/// Onboard instrument readouts, jittered per tick inside the bounds the
/// bridge display expects. Fuel only ever drains.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShipTelemetry {
    pub speed_knots: f64,
    pub heading_deg: f64,
    pub depth_m: f64,
    pub fuel_pct: f64,
    pub engine_power_pct: f64,
}

impl Default for ShipTelemetry {
    fn default() -> Self {
        Self {
            speed_knots: 13.5,
            heading_deg: 240.0,
            depth_m: 2840.0,
            fuel_pct: 78.0,
            engine_power_pct: 85.0,
        }
    }
}

impl ShipTelemetry {
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let drift = |range: f64, rng: &mut R| (rng.r#gen::<f64>() - 0.5) * range;

        self.speed_knots = (self.speed_knots + drift(0.3, rng)).clamp(12.0, 16.0);
        self.heading_deg = (self.heading_deg + drift(2.0, rng) + 360.0) % 360.0;
        self.depth_m = (self.depth_m + drift(50.0, rng)).clamp(2500.0, 3200.0);
        self.fuel_pct = (self.fuel_pct - 0.001).max(70.0);
        self.engine_power_pct = (self.engine_power_pct + drift(2.0, rng)).clamp(75.0, 95.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn readings_stay_inside_instrument_bounds() {
        let mut telemetry = ShipTelemetry::default();
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..5_000 {
            telemetry.advance(&mut rng);
            assert!((12.0..=16.0).contains(&telemetry.speed_knots));
            assert!((0.0..360.0).contains(&telemetry.heading_deg));
            assert!((2500.0..=3200.0).contains(&telemetry.depth_m));
            assert!(telemetry.fuel_pct >= 70.0);
            assert!((75.0..=95.0).contains(&telemetry.engine_power_pct));
        }
    }

    #[test]
    fn fuel_never_increases() {
        let mut telemetry = ShipTelemetry::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut last = telemetry.fuel_pct;
        for _ in 0..100 {
            telemetry.advance(&mut rng);
            assert!(telemetry.fuel_pct <= last);
            last = telemetry.fuel_pct;
        }
    }
}
