use nalgebra::Vector3;
use rotations::{prelude::RotationMatrix, RotationTrait};
use serde::{Deserialize, Serialize};
use time::{sidereal::Gmst, CalendarTimestamp, DayNumberRule, JulianDate};

/// How the Earth's orientation is applied when going from ECI to ECEF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum EarthRotationModel {
    /// Standard Julian day number and a proper rotation about Z.
    #[default]
    Standard,
    /// Reproduces the older converter: its Julian day number is 36 days early
    /// and its y axis comes out mirrored. GMST is evaluated the same way.
    Legacy,
}

impl EarthRotationModel {
    pub fn day_number_rule(&self) -> DayNumberRule {
        match self {
            EarthRotationModel::Standard => DayNumberRule::Standard,
            EarthRotationModel::Legacy => DayNumberRule::Legacy,
        }
    }
}

/// An ECEF position together with the quantities that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EcefSolution {
    pub epoch: CalendarTimestamp,
    pub model: EarthRotationModel,
    pub julian_date: JulianDate,
    /// Julian centuries since J2000.0
    pub centuries: f64,
    pub gmst: Gmst,
    pub r_eci: Vector3<f64>,
    pub r_ecef: Vector3<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateTransformer {
    model: EarthRotationModel,
}

impl CoordinateTransformer {
    pub fn new(model: EarthRotationModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> EarthRotationModel {
        self.model
    }

    /// Converts an ECI position (km) to ECEF at the given UTC epoch.
    pub fn eci_to_ecef(&self, epoch: &CalendarTimestamp, r_eci: Vector3<f64>) -> EcefSolution {
        let julian_date = JulianDate::from_timestamp(epoch, self.model.day_number_rule());
        let centuries = julian_date.get_jd_centuries();
        let gmst = Gmst::from_centuries(centuries);
        let r_ecef = self.rotate_eci_to_ecef(gmst.radians, r_eci);

        EcefSolution {
            epoch: *epoch,
            model: self.model,
            julian_date,
            centuries,
            gmst,
            r_eci,
            r_ecef,
        }
    }

    /// Applies the Earth rotation angle `theta` (radians) to an ECI vector.
    pub fn rotate_eci_to_ecef(&self, theta: f64, r_eci: Vector3<f64>) -> Vector3<f64> {
        let ecef_from_eci = RotationMatrix::about_z(theta);
        let r_ecef = ecef_from_eci.transform(r_eci);
        let y = match self.model {
            EarthRotationModel::Standard => r_ecef.y,
            EarthRotationModel::Legacy => -r_ecef.y,
        };
        // polar component is carried over untouched
        Vector3::new(r_ecef.x, y, r_eci.z)
    }
}
