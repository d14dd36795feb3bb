/// Sparse standard-normal CDF table: (cumulative probability, z-score).
/// Rows cover z in [-2.1, 2.2] in steps of 0.1; draws outside the covered
/// probability range clamp to the nearest end row.
const Z_TABLE: [(f64, f64); 44] = [
    (0.01786, -2.1),
    (0.02275, -2.0),
    (0.02872, -1.9),
    (0.03593, -1.8),
    (0.04457, -1.7),
    (0.05480, -1.6),
    (0.06681, -1.5),
    (0.08076, -1.4),
    (0.09680, -1.3),
    (0.11507, -1.2),
    (0.13567, -1.1),
    (0.15866, -1.0),
    (0.18406, -0.9),
    (0.21186, -0.8),
    (0.24196, -0.7),
    (0.27425, -0.6),
    (0.30854, -0.5),
    (0.34458, -0.4),
    (0.38209, -0.3),
    (0.42074, -0.2),
    (0.46017, -0.1),
    (0.50000, 0.0),
    (0.53983, 0.1),
    (0.57926, 0.2),
    (0.61791, 0.3),
    (0.65542, 0.4),
    (0.69146, 0.5),
    (0.72575, 0.6),
    (0.75804, 0.7),
    (0.78814, 0.8),
    (0.81594, 0.9),
    (0.84134, 1.0),
    (0.86433, 1.1),
    (0.88493, 1.2),
    (0.90320, 1.3),
    (0.91924, 1.4),
    (0.93319, 1.5),
    (0.94520, 1.6),
    (0.95543, 1.7),
    (0.96407, 1.8),
    (0.97128, 1.9),
    (0.97725, 2.0),
    (0.98214, 2.1),
    (0.98610, 2.2),
];

/// Maps a uniform draw to a standard-normal z-score by linear interpolation
/// between the two bracketing table rows.
pub fn z_score(draw: f64) -> f64 {
    let (first_p, first_z) = Z_TABLE[0];
    if draw <= first_p {
        return first_z;
    }
    let (last_p, last_z) = Z_TABLE[Z_TABLE.len() - 1];
    if draw >= last_p {
        return last_z;
    }

    for window in Z_TABLE.windows(2) {
        let (low_p, low_z) = window[0];
        let (high_p, high_z) = window[1];
        if draw <= high_p {
            let fraction = (draw - low_p) / (high_p - low_p);
            return low_z + fraction * (high_z - low_z);
        }
    }

    last_z
}
