//! Test utilities for NEO records and scene assertions.

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Fixtures for building feed records.
pub mod fixtures {
    use super::KM_PER_AU;
    use crate::neo::record::{MissDistance, RelativeVelocity};
    use crate::neo::{CloseApproach, DiameterRange, EstimatedDiameter, NeoRecord};

    /// A record with one close approach at `miss_au`.
    ///
    /// The diameter estimate spans `diameter_m` to twice that, in meters.
    pub fn neo(id: &str, hazardous: bool, diameter_m: f64, miss_au: f64) -> NeoRecord {
        let (min, max) = (diameter_m, diameter_m * 2.0);
        NeoRecord {
            id: id.to_string(),
            name: format!("({id} TEST)"),
            nasa_jpl_url: None,
            absolute_magnitude_h: Some(22.1),
            estimated_diameter: EstimatedDiameter {
                kilometers: DiameterRange::new(min / 1000.0, max / 1000.0),
                meters: DiameterRange::new(min, max),
                miles: DiameterRange::new(min / 1609.344, max / 1609.344),
                feet: DiameterRange::new(min * 3.28084, max * 3.28084),
            },
            is_potentially_hazardous_asteroid: hazardous,
            is_sentry_object: false,
            close_approach_data: vec![CloseApproach {
                close_approach_date: "2023-09-01".to_string(),
                close_approach_date_full: Some("2023-Sep-01 12:00".to_string()),
                epoch_date_close_approach: Some(1_693_569_600_000),
                relative_velocity: RelativeVelocity {
                    kilometers_per_second: "15.0".to_string(),
                    kilometers_per_hour: "54000.0".to_string(),
                    miles_per_hour: "33554.0".to_string(),
                },
                miss_distance: MissDistance {
                    astronomical: miss_au.to_string(),
                    lunar: (miss_au * 389.17).to_string(),
                    kilometers: (miss_au * KM_PER_AU).to_string(),
                    miles: (miss_au * KM_PER_AU / 1.609_344).to_string(),
                },
                orbiting_body: "Earth".to_string(),
            }],
        }
    }

    /// Two hazardous records and one benign one; only the first passes
    /// within 0.05 AU.
    pub fn three_record_feed() -> Vec<NeoRecord> {
        vec![
            neo("1", true, 50.0, 0.01),
            neo("2", true, 120.0, 0.2),
            neo("3", false, 30.0, 0.3),
        ]
    }
}
