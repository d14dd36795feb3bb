use std::fmt::Write;

use crate::metrics::round_to;
use crate::mmc::MmcMetrics;
use crate::models::SimulationParams;
use crate::state::SimulationResult;

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

pub struct HumanFormatter;
pub struct SummaryFormatter;
pub struct JsonFormatter;

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Totals:");
        let _ = writeln!(out, "generated: {}", result.total_generated);
        let _ = writeln!(out, "completed: {}", result.total_completed);
        let _ = writeln!(out, "Averages:");
        let _ = writeln!(out, "wait: {:.2}", result.averages.wait);
        let _ = writeln!(out, "response: {:.2}", result.averages.response);
        let _ = writeln!(out, "turnaround: {:.2}", result.averages.turnaround);
        let _ = writeln!(out, "inter-arrival: {:.2}", result.averages.inter_arrival);
        let _ = writeln!(out, "service: {:.2}", result.averages.service_time);
        let _ = writeln!(out, "Servers:");
        for server in &result.servers {
            let _ = writeln!(
                out,
                "server {}: busy {:.2} (utilization: {:.2}%)",
                server.id, server.busy_time, server.utilization_pct
            );
        }
        out
    }
}

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Customers:");
        for customer in &result.customers {
            let _ = writeln!(
                out,
                "#{} prio {} arrival {:.2} service {:.0} start {:.2} completion {:.2} \
                 wait {:.2} turnaround {:.2} server {}",
                customer.id,
                customer.priority,
                customer.arrival,
                customer.service_time,
                customer.first_start,
                customer.completion,
                customer.wait,
                customer.turnaround,
                customer.server
            );
        }

        if !result.priority_stats.is_empty() {
            let _ = writeln!(out, "Priorities:");
            for stats in &result.priority_stats {
                let _ = writeln!(
                    out,
                    "priority {}: {} customers, avg wait {:.2}, avg turnaround {:.2}",
                    stats.priority,
                    stats.customers,
                    round_to(stats.avg_wait, 2),
                    round_to(stats.avg_turnaround, 2)
                );
            }
        }

        out.push_str(&SummaryFormatter.write(result));
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = serde_json::to_string_pretty(result)
            .unwrap_or_else(|err| format!("{{\"error\": \"{}\"}}", err));
        out.push('\n');
        out
    }
}

/// Metrics lines for the `mmc` subcommand; unstable systems report their
/// derived metrics as unbounded.
pub fn format_mmc(metrics: &MmcMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "M/M/{} metrics:", metrics.servers);
    let _ = writeln!(out, "rho: {:.4}", metrics.rho);
    let _ = writeln!(out, "stable: {}", metrics.stable);
    for (name, value) in [
        ("P0", metrics.p0),
        ("Lq", metrics.lq),
        ("L", metrics.l),
        ("Wq", metrics.wq),
        ("W", metrics.w),
    ] {
        match value {
            Some(value) => {
                let _ = writeln!(out, "{}: {:.4}", name, value);
            }
            None => {
                let _ = writeln!(out, "{}: unbounded", name);
            }
        }
    }
    out
}

/// Resolved-parameter echo for `show-config`.
pub fn format_params(params: &SimulationParams) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Arrival: {}", params.arrival);
    let _ = writeln!(out, "Service: {}", params.service);
    let _ = writeln!(out, "Servers: {}", params.servers);
    let _ = writeln!(
        out,
        "Priority: {}",
        if params.priority_enabled {
            format!("enabled ({} levels)", params.priority_levels)
        } else {
            "disabled".to_string()
        }
    );
    match params.seed {
        Some(seed) => {
            let _ = writeln!(out, "Seed: {}", seed);
        }
        None => {
            let _ = writeln!(out, "Seed: default (0)");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmc::calculate_mmc;
    use crate::models::DistributionConfig;

    #[test]
    fn mmc_output_is_stable_for_known_inputs() {
        let metrics = calculate_mmc(4.0, 5.0, 1).expect("valid inputs");
        let expected = concat!(
            "M/M/1 metrics:\n",
            "rho: 0.8000\n",
            "stable: true\n",
            "P0: 0.2000\n",
            "Lq: 3.2000\n",
            "L: 4.0000\n",
            "Wq: 0.8000\n",
            "W: 1.0000\n",
        );
        assert_eq!(format_mmc(&metrics), expected);
    }

    #[test]
    fn unstable_mmc_reports_unbounded_metrics() {
        let metrics = calculate_mmc(10.0, 2.0, 1).expect("valid inputs");
        let output = format_mmc(&metrics);
        assert!(output.contains("rho: 5.0000"));
        assert!(output.contains("stable: false"));
        assert!(output.contains("L: unbounded"));
        assert!(output.contains("Wq: unbounded"));
    }

    #[test]
    fn params_echo_covers_priority_state() {
        let params = SimulationParams {
            arrival: DistributionConfig::Poisson { rate: 2.0 },
            service: DistributionConfig::Uniform { a: 1.0, b: 4.0 },
            servers: 3,
            priority_enabled: true,
            priority_levels: 2,
            seed: Some(9),
        };
        let expected = concat!(
            "Arrival: poisson (rate: 2)\n",
            "Service: uniform (a: 1, b: 4)\n",
            "Servers: 3\n",
            "Priority: enabled (2 levels)\n",
            "Seed: 9\n",
        );
        assert_eq!(format_params(&params), expected);
    }
}
