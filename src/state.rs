use serde::Serialize;

use crate::sampling::CpEntry;

/// A customer as the engine mutates it. Identity and arrival fields are
/// fixed at generation time; the engine only touches `remaining_service`,
/// `first_start`, `completion`, and `server`.
#[derive(Clone, Debug)]
pub struct Customer {
    /// 1-based, in arrival order.
    pub id: usize,
    /// Uniform draw behind the inter-arrival time (0 for the first customer).
    pub arrival_draw: f64,
    /// CP-table bucket the arrival draw resolved to, when table-driven.
    pub cp_bucket: Option<u32>,
    pub inter_arrival: f64,
    pub arrival: f64,
    /// 1 is the highest priority; larger numbers are weaker.
    pub priority: u32,
    pub service_time: f64,
    pub remaining_service: f64,
    /// Uniform draw behind the service time.
    pub service_draw: f64,
    /// Set exactly once, at the first service start. Defines response time.
    pub first_start: Option<f64>,
    pub completion: Option<f64>,
    pub server: Option<usize>,
}

impl Customer {
    pub fn mark_started(&mut self, now: f64, server: usize) {
        if self.first_start.is_none() {
            self.first_start = Some(now);
        }
        self.server = Some(server);
    }
}

/// One contiguous stretch of service on a server. Preemption truncates the
/// open interval's end in place.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ServiceInterval {
    pub customer: usize,
    pub start: f64,
    pub end: f64,
    pub priority: u32,
}

#[derive(Clone, Debug)]
pub struct ServerState {
    pub id: usize,
    pub busy: bool,
    pub busy_until: f64,
    pub current: Option<usize>,
    pub busy_time: f64,
    pub intervals: Vec<ServiceInterval>,
}

impl ServerState {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            busy: false,
            busy_until: 0.0,
            current: None,
            busy_time: 0.0,
            intervals: Vec::new(),
        }
    }
}

/// Customers awaiting service, ordered by ascending priority number with
/// stable FIFO order within a level.
#[derive(Clone, Debug, Default)]
pub struct WaitQueue {
    entries: Vec<QueueEntry>,
}

#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    customer: usize,
    priority: u32,
}

impl WaitQueue {
    pub fn push_back(&mut self, customer: usize, priority: u32) {
        self.entries.push(QueueEntry { customer, priority });
    }

    /// Inserts before the first entry with a strictly larger priority
    /// number, so equal priorities keep arrival order. Used both for fresh
    /// arrivals and for reinserting preempted customers.
    pub fn insert_by_priority(&mut self, customer: usize, priority: u32) {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.priority > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, QueueEntry { customer, priority });
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).customer)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Queue length and busy-server fraction, sampled once per event before it
/// is dispatched.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EventSample {
    pub time: f64,
    pub queue_len: usize,
    pub busy_fraction: f64,
}

/// A completed customer, frozen with its derived times.
#[derive(Clone, Debug, Serialize)]
pub struct CustomerRecord {
    pub id: usize,
    pub arrival_draw: f64,
    pub cp_bucket: Option<u32>,
    pub inter_arrival: f64,
    pub arrival: f64,
    pub priority: u32,
    pub service_time: f64,
    pub service_draw: f64,
    pub first_start: f64,
    pub completion: f64,
    pub server: usize,
    pub wait: f64,
    pub response: f64,
    pub turnaround: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServerRecord {
    pub id: usize,
    pub busy_time: f64,
    pub utilization_pct: f64,
    pub intervals: Vec<ServiceInterval>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PriorityStats {
    pub priority: u32,
    pub customers: usize,
    pub avg_wait: f64,
    pub avg_response: f64,
    pub avg_inter_arrival: f64,
    pub avg_turnaround: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GlobalAverages {
    pub wait: f64,
    pub response: f64,
    pub turnaround: f64,
    pub inter_arrival: f64,
    pub service_time: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub customers: Vec<CustomerRecord>,
    pub servers: Vec<ServerRecord>,
    pub priority_stats: Vec<PriorityStats>,
    pub samples: Vec<EventSample>,
    pub averages: GlobalAverages,
    pub total_generated: usize,
    pub total_completed: usize,
    /// Arrival CP table; empty when arrivals were not table-driven.
    pub cp_table: Vec<CpEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_queue_is_fifo_within_a_priority_level() {
        let mut queue = WaitQueue::default();
        queue.insert_by_priority(1, 2);
        queue.insert_by_priority(2, 2);
        queue.insert_by_priority(3, 2);
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), Some(3));
    }

    #[test]
    fn wait_queue_orders_by_ascending_priority_number() {
        let mut queue = WaitQueue::default();
        queue.insert_by_priority(1, 3);
        queue.insert_by_priority(2, 1);
        queue.insert_by_priority(3, 2);
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), Some(1));
    }

    #[test]
    fn reinsertion_lands_before_strictly_weaker_entries_only() {
        let mut queue = WaitQueue::default();
        queue.insert_by_priority(1, 2);
        queue.insert_by_priority(2, 3);
        // A preempted priority-2 customer queues behind the waiting one.
        queue.insert_by_priority(3, 2);
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), Some(2));
    }

    #[test]
    fn first_start_is_set_once() {
        let mut customer = Customer {
            id: 1,
            arrival_draw: 0.0,
            cp_bucket: None,
            inter_arrival: 0.0,
            arrival: 0.0,
            priority: 1,
            service_time: 5.0,
            remaining_service: 5.0,
            service_draw: 0.0,
            first_start: None,
            completion: None,
            server: None,
        };
        customer.mark_started(3.0, 0);
        customer.mark_started(9.0, 1);
        assert_eq!(customer.first_start, Some(3.0));
        assert_eq!(customer.server, Some(1));
    }
}
