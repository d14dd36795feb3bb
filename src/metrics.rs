use std::collections::BTreeMap;

use crate::sampling::CpEntry;
use crate::state::{
    Customer, CustomerRecord, EventSample, GlobalAverages, PriorityStats, ServerRecord,
    ServerState, SimulationResult,
};

/// Freezes a completed run into its result: per-customer derived times,
/// per-server utilization, per-priority averages, and global means. Empty
/// runs produce a defined zero/empty result rather than dividing by zero.
pub fn aggregate(
    customers: Vec<Customer>,
    servers: Vec<ServerState>,
    samples: Vec<EventSample>,
    cp_table: Vec<CpEntry>,
    total_generated: usize,
) -> SimulationResult {
    let records = freeze_customers(&customers);
    let server_records = summarize_servers(&servers);
    let priority_stats = summarize_priorities(&records);
    let averages = global_averages(&records);
    let total_completed = records.len();

    SimulationResult {
        customers: records,
        servers: server_records,
        priority_stats,
        samples,
        averages,
        total_generated,
        total_completed,
        cp_table,
    }
}

/// Wait and response share one definition: time from arrival to the first
/// service start, unaffected by later preemption.
fn freeze_customers(customers: &[Customer]) -> Vec<CustomerRecord> {
    customers
        .iter()
        .filter_map(|customer| {
            let first_start = customer.first_start?;
            let completion = customer.completion?;
            let server = customer.server?;
            let wait = first_start - customer.arrival;
            Some(CustomerRecord {
                id: customer.id,
                arrival_draw: customer.arrival_draw,
                cp_bucket: customer.cp_bucket,
                inter_arrival: customer.inter_arrival,
                arrival: customer.arrival,
                priority: customer.priority,
                service_time: customer.service_time,
                service_draw: customer.service_draw,
                first_start,
                completion,
                server,
                wait,
                response: wait,
                turnaround: completion - customer.arrival,
            })
        })
        .collect()
}

/// Utilization is each server's realized busy time (sum of its interval
/// durations, already net of preemption truncation) over the total across
/// servers. The percentages sum to 100 whenever any busy time exists.
fn summarize_servers(servers: &[ServerState]) -> Vec<ServerRecord> {
    let total_busy: f64 = servers.iter().map(|server| server.busy_time).sum();
    servers
        .iter()
        .map(|server| {
            let utilization_pct = if total_busy == 0.0 {
                0.0
            } else {
                round_to(server.busy_time / total_busy * 100.0, 2)
            };
            ServerRecord {
                id: server.id,
                busy_time: server.busy_time,
                utilization_pct,
                intervals: server.intervals.clone(),
            }
        })
        .collect()
}

fn summarize_priorities(records: &[CustomerRecord]) -> Vec<PriorityStats> {
    let mut groups: BTreeMap<u32, Vec<&CustomerRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.priority).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(priority, members)| {
            let count = members.len() as f64;
            PriorityStats {
                priority,
                customers: members.len(),
                avg_wait: members.iter().map(|r| r.wait).sum::<f64>() / count,
                avg_response: members.iter().map(|r| r.response).sum::<f64>() / count,
                avg_inter_arrival: members.iter().map(|r| r.inter_arrival).sum::<f64>() / count,
                avg_turnaround: members.iter().map(|r| r.turnaround).sum::<f64>() / count,
            }
        })
        .collect()
}

fn global_averages(records: &[CustomerRecord]) -> GlobalAverages {
    if records.is_empty() {
        return GlobalAverages::default();
    }
    let count = records.len() as f64;
    GlobalAverages {
        wait: records.iter().map(|r| r.wait).sum::<f64>() / count,
        response: records.iter().map(|r| r.response).sum::<f64>() / count,
        turnaround: records.iter().map(|r| r.turnaround).sum::<f64>() / count,
        inter_arrival: records.iter().map(|r| r.inter_arrival).sum::<f64>() / count,
        service_time: records.iter().map(|r| r.service_time).sum::<f64>() / count,
    }
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
