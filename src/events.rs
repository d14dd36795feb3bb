use crate::state::{Customer, ServerState};

/// The two event kinds the engine dispatches. An arrival carries the index
/// of the arriving customer; a departure carries the server whose occupant
/// finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Arrival { customer: usize, time: f64 },
    Departure { server: usize, time: f64 },
}

impl Event {
    pub fn time(&self) -> f64 {
        match *self {
            Event::Arrival { time, .. } => time,
            Event::Departure { time, .. } => time,
        }
    }
}

/// Selects the next chronological event: the earlier of the next unarrived
/// customer's arrival and the earliest busy-until among busy servers.
/// Simultaneous events resolve arrival first; simultaneous departures
/// resolve to the lowest server id. Returns `None` when the run is over.
pub fn next_event(
    customers: &[Customer],
    next_arrival: usize,
    servers: &[ServerState],
) -> Option<Event> {
    let arrival = customers.get(next_arrival).map(|customer| Event::Arrival {
        customer: next_arrival,
        time: customer.arrival,
    });

    let departure = servers
        .iter()
        .filter(|server| server.busy)
        .min_by(|a, b| a.busy_until.total_cmp(&b.busy_until).then(a.id.cmp(&b.id)))
        .map(|server| Event::Departure {
            server: server.id,
            time: server.busy_until,
        });

    match (arrival, departure) {
        (Some(arrival), Some(departure)) => {
            if arrival.time() <= departure.time() {
                Some(arrival)
            } else {
                Some(departure)
            }
        }
        (Some(arrival), None) => Some(arrival),
        (None, Some(departure)) => Some(departure),
        (None, None) => None,
    }
}
