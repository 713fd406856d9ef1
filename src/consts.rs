//! Shared constants for the geoboard crate.

// ── Angle labels ────────────────────────────────────────────────

/// Greek-letter entities tried, in order, when an angle is created without text.
pub const GREEK_LETTERS: [&str; 24] = [
    "&alpha;",
    "&beta;",
    "&gamma;",
    "&delta;",
    "&epsilon;",
    "&zeta;",
    "&eta;",
    "&theta;",
    "&iota;",
    "&kappa;",
    "&lambda;",
    "&mu;",
    "&nu;",
    "&xi;",
    "&omicron;",
    "&pi;",
    "&rho;",
    "&sigma;",
    "&tau;",
    "&upsilon;",
    "&phi;",
    "&chi;",
    "&psi;",
    "&omega;",
];

/// Opening part of the indexed fallback label `&alpha;_{n}`.
pub const FALLBACK_LABEL_PREFIX: &str = "&alpha;_{";

/// Closing part of the indexed fallback label.
pub const FALLBACK_LABEL_SUFFIX: &str = "}";

/// Suffix appended to an angle id to form its label id.
pub const LABEL_ID_SUFFIX: &str = "Label";

// ── Label placement ─────────────────────────────────────────────

/// `true_angle * π / LABEL_ROTATION_DIVISOR` is the label rotation in radians.
///
/// With the true angle in degrees this puts the label at 9/16 of the sector
/// sweep instead of exactly on the bisector.
pub const LABEL_ROTATION_DIVISOR: f64 = 2.0 * 160.0;

// ── Naming ──────────────────────────────────────────────────────

/// Id tag character for points (`{board}P{n}`).
pub const POINT_ID_TAG: char = 'P';

/// Id tag character for angles (`{board}A{n}`).
pub const ANGLE_ID_TAG: char = 'A';

/// Number of UUID hex digits used for a generated board id.
pub const BOARD_ID_LEN: usize = 8;
