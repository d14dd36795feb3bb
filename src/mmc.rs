use serde::Serialize;

use crate::error::{Error, Result};

/// Closed-form M/M/c metrics. `None` values mean the metric is unbounded
/// because the system is unstable (rho >= 1).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MmcMetrics {
    pub lambda: f64,
    pub mu: f64,
    pub servers: usize,
    pub rho: f64,
    pub stable: bool,
    pub p0: Option<f64>,
    pub lq: Option<f64>,
    pub l: Option<f64>,
    pub wq: Option<f64>,
    pub w: Option<f64>,
}

/// Theoretical M/M/c queue metrics for arrival rate `lambda`, per-server
/// service rate `mu`, and `servers` servers. A pure function of the three
/// scalars; the event simulation neither feeds nor consumes it.
pub fn calculate_mmc(lambda: f64, mu: f64, servers: usize) -> Result<MmcMetrics> {
    if lambda <= 0.0 {
        return Err(Error::NonPositiveRate(lambda));
    }
    if mu <= 0.0 {
        return Err(Error::NonPositiveRate(mu));
    }
    if servers == 0 {
        return Err(Error::ZeroServers);
    }

    let c = servers as f64;
    let offered_load = lambda / mu;
    let rho = offered_load / c;

    if rho >= 1.0 {
        return Ok(MmcMetrics {
            lambda,
            mu,
            servers,
            rho,
            stable: false,
            p0: None,
            lq: None,
            l: None,
            wq: None,
            w: None,
        });
    }

    let mut idle_sum = 0.0;
    let mut term = 1.0;
    for n in 0..servers {
        if n > 0 {
            term *= offered_load / n as f64;
        }
        idle_sum += term;
    }
    let c_factorial = factorial(servers);
    let busy_term = offered_load.powi(servers as i32) / (c_factorial * (1.0 - rho));
    let p0 = 1.0 / (idle_sum + busy_term);

    let lq = p0 * offered_load.powi(servers as i32) * rho / (c_factorial * (1.0 - rho).powi(2));
    let l = lq + offered_load;
    let wq = lq / lambda;
    let w = l / lambda;

    Ok(MmcMetrics {
        lambda,
        mu,
        servers,
        rho,
        stable: true,
        p0: Some(p0),
        lq: Some(lq),
        l: Some(l),
        wq: Some(wq),
        w: Some(w),
    })
}

fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}
