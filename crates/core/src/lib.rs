//! Core units, constants, and shared primitives for the solar geodesy workspace.

/// Physical constants. Radii are mean radii of a spherical body model.
pub mod constants {
    /// Mean radius of Earth (miles).
    pub const EARTH_RADIUS_MI: f64 = 3_958.8;
    /// Mean radius of Earth (kilometres).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Mean radius of the Moon (miles).
    pub const MOON_RADIUS_MI: f64 = 1_079.6;
    /// Mean radius of the Moon (kilometres).
    pub const MOON_RADIUS_KM: f64 = 1_737.4;
    /// Mean radius of Mars (miles).
    pub const MARS_RADIUS_MI: f64 = 2_106.1;
    /// Mean radius of Mars (kilometres).
    pub const MARS_RADIUS_KM: f64 = 3_389.5;

    /// Feet per statute mile.
    pub const FEET_PER_MILE: f64 = 5_280.0;
    /// Metres per kilometre.
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Kilometres per statute mile.
    pub const KM_PER_MILE: f64 = 1.609_344;

    /// Minutes per hour.
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Degrees of rotation per hour of local solar time.
    pub const DEGREES_PER_HOUR: f64 = 15.0;
}

/// Length units and conversion helpers.
pub mod units {
    use super::constants::{FEET_PER_MILE, KM_PER_MILE, METERS_PER_KM};

    /// Unit system of a planet radius, and therefore of every distance derived from it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LengthUnit {
        /// Statute miles; heights above the surface are measured in feet.
        Miles,
        /// Kilometres; heights above the surface are measured in metres.
        Kilometers,
    }

    impl LengthUnit {
        /// Number of small height units (feet or metres) per large distance unit.
        pub fn height_divisor(self) -> f64 {
            match self {
                Self::Miles => FEET_PER_MILE,
                Self::Kilometers => METERS_PER_KM,
            }
        }

        /// Short label used in reports.
        pub fn label(self) -> &'static str {
            match self {
                Self::Miles => "mi",
                Self::Kilometers => "km",
            }
        }

        /// Label of the matching height unit.
        pub fn height_label(self) -> &'static str {
            match self {
                Self::Miles => "ft",
                Self::Kilometers => "m",
            }
        }
    }

    /// Convert kilometres to miles.
    #[inline]
    pub fn km_to_mi(v: f64) -> f64 {
        v / KM_PER_MILE
    }
}

/// Angle normalisation and degrees-minutes-seconds conversion.
pub mod angles {
    use std::fmt;

    /// Reduce an angle in degrees into `[0, 360)`.
    pub fn normalize_degrees(deg: f64) -> f64 {
        let mut r = deg % 360.0;
        if r < 0.0 {
            r += 360.0;
        }
        // a tiny negative remainder rounds up to exactly 360 after the shift
        if r >= 360.0 { 0.0 } else { r }
    }

    /// Reduce a longitude in degrees into `(-180, 180]`.
    pub fn normalize_longitude(deg: f64) -> f64 {
        let r = normalize_degrees(deg + 180.0) - 180.0;
        if r <= -180.0 { 180.0 } else { r }
    }

    /// An angle split into whole degrees, whole minutes, and fractional seconds.
    ///
    /// The components are magnitudes; the sign lives in `negative` so that
    /// angles between -1° and 0° keep their sign.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Dms {
        pub negative: bool,
        pub degrees: u32,
        pub minutes: u32,
        pub seconds: f64,
    }

    impl Dms {
        /// Split decimal degrees by truncation.
        pub fn from_decimal(decimal: f64) -> Self {
            let magnitude = decimal.abs();
            let mut degrees = magnitude.trunc();
            let minutes_total = (magnitude - degrees) * 60.0;
            let mut minutes = minutes_total.trunc();
            let mut seconds = (minutes_total - minutes) * 60.0;
            if seconds >= 60.0 {
                seconds -= 60.0;
                minutes += 1.0;
            }
            if minutes >= 60.0 {
                minutes -= 60.0;
                degrees += 1.0;
            }
            Self {
                negative: decimal.is_sign_negative() && magnitude > 0.0,
                degrees: degrees as u32,
                minutes: minutes as u32,
                seconds,
            }
        }

        /// Recombine into signed decimal degrees.
        pub fn to_decimal(&self) -> f64 {
            let magnitude =
                self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3_600.0;
            if self.negative { -magnitude } else { magnitude }
        }
    }

    impl fmt::Display for Dms {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let sign = if self.negative { "-" } else { "" };
            write!(
                f,
                "{sign}{}°{:02}'{:05.2}\"",
                self.degrees, self.minutes, self.seconds
            )
        }
    }

    /// Combine degrees, minutes, and seconds into decimal degrees.
    ///
    /// The sign of `degrees` applies to the whole value, so `(-74, 0, 21.6)`
    /// is `-74.006`.
    pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
        let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3_600.0;
        if degrees.is_sign_negative() { -magnitude } else { magnitude }
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector, usually a point on the unit sphere.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }
}
