use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Temperature,
    Salinity,
    Bathymetry,
    Currents,
    Ice,
}

impl LayerKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Salinity => "salinity",
            Self::Bathymetry => "bathymetry",
            Self::Currents => "currents",
            Self::Ice => "ice",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "temperature" => Some(Self::Temperature),
            "salinity" => Some(Self::Salinity),
            "bathymetry" => Some(Self::Bathymetry),
            "currents" => Some(Self::Currents),
            "ice" => Some(Self::Ice),
            _ => None,
        }
    }
}

/// Discrete color ramp over a value range. Lookup is nearest-bucket, not a
/// continuous gradient: normalize into [0,1], then floor into the color list.
#[derive(Debug, Clone, Serialize)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub colors: Vec<&'static str>,
    pub labels: Vec<&'static str>,
}

impl ColorScale {
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn color_for(&self, value: f64) -> &'static str {
        let normalized = self.normalize(value);
        let index = (normalized * (self.colors.len() as f64 - 1.0)).floor() as usize;
        self.colors[index]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerDef {
    pub kind: LayerKind,
    pub name: &'static str,
    pub unit: &'static str,
    pub default_enabled: bool,
    pub opacity: u8,
    pub scale: ColorScale,
}

/// The five oceanographic overlays of the knowledge map, with the ramps the
/// dashboard legend renders.
pub fn layer_catalog() -> Vec<LayerDef> {
    vec![
        LayerDef {
            kind: LayerKind::Temperature,
            name: "Water Temperature",
            unit: "°C",
            default_enabled: true,
            opacity: 80,
            scale: ColorScale {
                min: -2.0,
                max: 27.0,
                colors: vec![
                    "#1e3a8a", "#3b82f6", "#06b6d4", "#10b981", "#fbbf24", "#f97316", "#dc2626",
                ],
                labels: vec!["-2°C", "5°C", "12°C", "18°C", "23°C", "27°C"],
            },
        },
        LayerDef {
            kind: LayerKind::Salinity,
            name: "Salinity",
            unit: "PSU",
            default_enabled: false,
            opacity: 70,
            scale: ColorScale {
                min: 18.0,
                max: 39.0,
                colors: vec!["#67e8f9", "#06b6d4", "#0284c7", "#7c3aed", "#6b21a8"],
                labels: vec!["18 PSU", "25 PSU", "32 PSU", "36 PSU", "39 PSU"],
            },
        },
        LayerDef {
            kind: LayerKind::Bathymetry,
            name: "Bathymetry (Depth)",
            unit: "m",
            default_enabled: false,
            opacity: 60,
            scale: ColorScale {
                min: 0.0,
                max: 4500.0,
                colors: vec![
                    "#bbf7d0", "#4ade80", "#22c55e", "#0891b2", "#0c4a6e", "#1e3a8a",
                ],
                labels: vec!["0m", "500m", "1500m", "3000m", "4500m"],
            },
        },
        LayerDef {
            kind: LayerKind::Currents,
            name: "Ocean Currents",
            unit: "m/s",
            default_enabled: false,
            opacity: 75,
            scale: ColorScale {
                min: 0.0,
                max: 1.2,
                colors: vec!["#fef3c7", "#fbbf24", "#f59e0b", "#f97316", "#ea580c"],
                labels: vec!["0 m/s", "0.3 m/s", "0.6 m/s", "0.9 m/s", "1.2 m/s"],
            },
        },
        LayerDef {
            kind: LayerKind::Ice,
            name: "Ice Coverage",
            unit: "%",
            default_enabled: false,
            opacity: 50,
            scale: ColorScale {
                min: 0.0,
                max: 100.0,
                colors: vec!["#f0f9ff", "#bae6fd", "#7dd3fc", "#38bdf8", "#0284c7"],
                labels: vec!["0%", "25%", "50%", "75%", "100%"],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_scale() -> ColorScale {
        layer_catalog()
            .into_iter()
            .find(|layer| layer.kind == LayerKind::Temperature)
            .map(|layer| layer.scale)
            .unwrap()
    }

    #[test]
    fn endpoints_select_first_and_last_bucket() {
        let scale = temp_scale();
        assert_eq!(scale.color_for(-2.0), "#1e3a8a");
        assert_eq!(scale.color_for(27.0), "#dc2626");
    }

    #[test]
    fn out_of_range_values_clamp_before_bucketing() {
        let scale = temp_scale();
        assert_eq!(scale.color_for(-40.0), scale.color_for(-2.0));
        assert_eq!(scale.color_for(100.0), scale.color_for(27.0));
    }

    #[test]
    fn lookup_floors_into_buckets() {
        let scale = ColorScale {
            min: 0.0,
            max: 10.0,
            colors: vec!["a", "b", "c"],
            labels: vec![],
        };
        // normalized 0.49 * 2 = 0.98 floors to bucket 0
        assert_eq!(scale.color_for(4.9), "a");
        assert_eq!(scale.color_for(5.0), "b");
        assert_eq!(scale.color_for(9.9), "b");
        assert_eq!(scale.color_for(10.0), "c");
    }

    #[test]
    fn layer_ids_round_trip() {
        for layer in layer_catalog() {
            assert_eq!(LayerKind::parse(layer.kind.id()), Some(layer.kind));
        }
    }
}
