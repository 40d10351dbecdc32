use crate::ephemeris::types::Body;
use crate::sign::AYANAMSA_OFFSET_DEG;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Degrees added to every sidereal longitude after the ayanamsa.
    pub ayanamsa_offset: f64,
    /// Report the mean node as its own row next to Rahu/Ketu.
    pub include_mean_node: bool,
}

impl ChartSettings {
    /// Bodies queried from the ephemeris, in index order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        Body::ALL
            .into_iter()
            .filter(move |body| self.include_mean_node || *body != Body::MeanNode)
    }

    /// Rows a chart built with these settings holds.
    pub fn row_count(&self) -> usize {
        // Lagna + bodies + Ketu
        1 + self.bodies().count() + 1
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ayanamsa_offset: AYANAMSA_OFFSET_DEG,
            include_mean_node: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_set() {
        let settings = ChartSettings::default();
        let bodies: Vec<Body> = settings.bodies().collect();
        assert_eq!(bodies.len(), 12);
        assert!(!bodies.contains(&Body::MeanNode));
        assert_eq!(bodies.first(), Some(&Body::Sun));
        assert_eq!(bodies.last(), Some(&Body::MeanApogee));
        assert_eq!(settings.row_count(), 14);
    }

    #[test]
    fn test_mean_node_restores_full_table() {
        let settings = ChartSettings {
            include_mean_node: true,
            ..ChartSettings::default()
        };
        assert_eq!(settings.bodies().count(), 13);
        assert_eq!(settings.row_count(), 15);
    }
}
