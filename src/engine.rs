use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::events::{next_event, Event};
use crate::generator::generate_customers;
use crate::metrics;
use crate::models::SimulationParams;
use crate::sampling::CpEntry;
use crate::state::{Customer, EventSample, ServerState, SimulationResult, WaitQueue};

/// Preempted work is never reduced below one time unit.
const MIN_REMAINING: f64 = 1.0;

/// The discrete-event core. One engine instance runs one customer sequence
/// to completion; the loop is single-threaded and synchronous with no
/// suspension points.
pub struct SimulationEngine {
    priority_enabled: bool,
    customers: Vec<Customer>,
    servers: Vec<ServerState>,
    queue: WaitQueue,
    samples: Vec<EventSample>,
    next_arrival: usize,
}

impl SimulationEngine {
    pub fn new(server_count: usize, priority_enabled: bool) -> Self {
        // Busy fractions divide by the server count; validation enforces
        // this for `run_simulation`, direct constructions get it here.
        assert!(server_count > 0, "engine requires at least one server");
        Self {
            priority_enabled,
            customers: Vec::new(),
            servers: (0..server_count).map(ServerState::new).collect(),
            queue: WaitQueue::default(),
            samples: Vec::new(),
            next_arrival: 0,
        }
    }

    /// Processes arrivals and departures in time order until no unarrived
    /// customers remain, the wait queue is empty, and every server is idle.
    /// Arrivals win timestamp ties against departures.
    pub fn run(mut self, customers: Vec<Customer>, cp_table: Vec<CpEntry>) -> SimulationResult {
        let total_generated = customers.len();
        self.customers = customers;

        while let Some(event) = next_event(&self.customers, self.next_arrival, &self.servers) {
            self.sample(event.time());
            match event {
                Event::Arrival { customer, time } => {
                    self.next_arrival += 1;
                    self.handle_arrival(customer, time);
                }
                Event::Departure { server, time } => self.handle_departure(server, time),
            }
        }

        metrics::aggregate(
            self.customers,
            self.servers,
            self.samples,
            cp_table,
            total_generated,
        )
    }

    /// Queue length and busy fraction are sampled once per event, before it
    /// is dispatched.
    fn sample(&mut self, time: f64) {
        let busy = self.servers.iter().filter(|server| server.busy).count();
        self.samples.push(EventSample {
            time,
            queue_len: self.queue.len(),
            busy_fraction: busy as f64 / self.servers.len() as f64,
        });
    }

    fn handle_arrival(&mut self, customer: usize, now: f64) {
        if let Some(free) = self.servers.iter().position(|server| !server.busy) {
            self.start_service(customer, free, now);
            return;
        }

        let priority = self.customers[customer].priority;
        if !self.priority_enabled {
            self.queue.push_back(customer, priority);
            return;
        }

        match self.find_preemption_victim(priority) {
            Some(server) => {
                self.preempt(server, now);
                self.start_service(customer, server, now);
            }
            None => self.queue.insert_by_priority(customer, priority),
        }
    }

    /// The weakest-priority occupant the newcomer outranks: numerically
    /// largest priority strictly greater than the newcomer's. Ties between
    /// equally weak occupants go to the lowest server id.
    fn find_preemption_victim(&self, priority: u32) -> Option<usize> {
        let mut victim: Option<(usize, u32)> = None;
        for server in &self.servers {
            let occupant = match server.current {
                Some(occupant) => occupant,
                None => continue,
            };
            let occupant_priority = self.customers[occupant].priority;
            if occupant_priority <= priority {
                continue;
            }
            // Strictly-greater comparison keeps the first (lowest-id) server
            // on equal priorities.
            if victim.map_or(true, |(_, best)| occupant_priority > best) {
                victim = Some((server.id, occupant_priority));
            }
        }
        victim.map(|(server, _)| server)
    }

    /// Interrupts the server's occupant: shrinks its remaining work by the
    /// time served in the current interval, truncates that interval to now,
    /// and reinserts the occupant into the wait queue in priority order.
    fn preempt(&mut self, server: usize, now: f64) {
        let state = &mut self.servers[server];
        let occupant = match state.current.take() {
            Some(occupant) => occupant,
            None => return,
        };
        state.busy = false;

        if let Some(interval) = state.intervals.last_mut() {
            let elapsed = now - interval.start;
            state.busy_time -= interval.end - now;
            interval.end = now;

            let customer = &mut self.customers[occupant];
            customer.remaining_service = (customer.remaining_service - elapsed).max(MIN_REMAINING);
            customer.server = None;
        }

        let priority = self.customers[occupant].priority;
        self.queue.insert_by_priority(occupant, priority);
    }

    fn handle_departure(&mut self, server: usize, now: f64) {
        let state = &mut self.servers[server];
        if let Some(occupant) = state.current.take() {
            let customer = &mut self.customers[occupant];
            customer.completion = Some(now);
            customer.remaining_service = 0.0;
        }
        state.busy = false;

        if let Some(next) = self.queue.pop_front() {
            self.start_service(next, server, now);
        }
    }

    fn start_service(&mut self, customer: usize, server: usize, now: f64) {
        let record = &mut self.customers[customer];
        record.mark_started(now, server);

        let state = &mut self.servers[server];
        state.busy = true;
        state.current = Some(customer);
        state.busy_until = now + record.remaining_service;
        state.busy_time += record.remaining_service;
        state.intervals.push(crate::state::ServiceInterval {
            customer: record.id,
            start: now,
            end: state.busy_until,
            priority: record.priority,
        });
    }
}

/// Runs one full simulation: validates the parameters, materializes the
/// customer sequence from the seeded generator, and drives the event loop.
pub fn run_simulation(params: &SimulationParams) -> Result<SimulationResult> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(params.seed.unwrap_or(0));
    let (customers, cp_table) = generate_customers(params, &mut rng);
    let engine = SimulationEngine::new(params.servers, params.priority_enabled);
    Ok(engine.run(customers, cp_table))
}
