use serde::Serialize;

/// One row of a Poisson cumulative-probability table: the mass at `x` and
/// the cumulative probability through `x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CpEntry {
    pub x: u32,
    pub prob: f64,
    pub cp: f64,
}

/// Cumulative probability considered saturated once it is this close to 1.
const CP_TOLERANCE: f64 = 1e-9;

/// Cap on table rows; keeps the build bounded for large rates.
const MAX_ROWS: usize = 150;

/// Builds the (x, P(X=x), CP(x)) table for a Poisson distribution with the
/// given rate, accumulating rows until the cumulative probability saturates
/// or the row cap is hit. The caller is expected to build one table per
/// distinct rate and reuse it for every lookup in a run.
pub fn build_cp_table(rate: f64) -> Vec<CpEntry> {
    let mut entries = Vec::new();
    let mut prob = (-rate).exp();
    let mut cp = 0.0;
    let mut x = 0u32;

    loop {
        cp += prob;
        entries.push(CpEntry {
            x,
            prob,
            cp: cp.min(1.0),
        });
        if cp >= 1.0 - CP_TOLERANCE || entries.len() >= MAX_ROWS {
            break;
        }
        x += 1;
        // P(X=k) = P(X=k-1) * rate / k, avoids factorial overflow.
        prob *= rate / x as f64;
    }

    entries
}

/// Inverts a uniform draw through the table: the smallest x whose cumulative
/// probability covers the draw. Draws past the last row resolve to the last
/// x. Linear scan; the table is bounded at `MAX_ROWS` rows.
pub fn lookup(entries: &[CpEntry], draw: f64) -> u32 {
    for entry in entries {
        if entry.cp >= draw {
            return entry.x;
        }
    }
    entries.last().map(|entry| entry.x).unwrap_or(0)
}
