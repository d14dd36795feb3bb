use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{DistributionConfig, SimulationParams};
use crate::sampling::{CpEntry, Sampler};
use crate::state::Customer;

/// Materializes the full ordered customer sequence before the run starts:
/// arrival times, priorities, and service times. There is no mid-run
/// generation. Returns the customers plus the arrival CP table when the
/// arrival process built one.
pub fn generate_customers(
    params: &SimulationParams,
    rng: &mut StdRng,
) -> (Vec<Customer>, Vec<CpEntry>) {
    let arrival_sampler = Sampler::new(params.arrival);
    let service_sampler = Sampler::new(params.service);
    let count = customer_count(&params.arrival, &arrival_sampler);
    let levels = params.effective_priority_levels();

    let mut customers = Vec::with_capacity(count);
    let mut clock = 0.0;

    for index in 0..count {
        // The first customer opens the run at t = 0 and consumes no draw.
        let (arrival_draw, cp_bucket, inter_arrival) = if index == 0 {
            (0.0, None, 0.0)
        } else {
            let r = rng.gen::<f64>();
            let draw = arrival_sampler.draw(r);
            (r, draw.cp_bucket, draw.value)
        };
        clock += inter_arrival;

        let priority = if params.priority_enabled {
            rng.gen_range(1..=levels)
        } else {
            1
        };

        let service_draw = rng.gen::<f64>();
        let service_time = service_sampler.draw_service(service_draw).value;

        customers.push(Customer {
            id: index + 1,
            arrival_draw,
            cp_bucket,
            inter_arrival,
            arrival: clock,
            priority,
            service_time,
            remaining_service: service_time,
            service_draw,
            first_start: None,
            completion: None,
            server: None,
        });
    }

    let cp_table = arrival_sampler.cp_table().to_vec();
    (customers, cp_table)
}

/// The simulation horizon. Table-driven arrival processes run until the
/// cumulative arrival probability saturates (one customer per table row);
/// uniform arrivals span the interval; normal arrivals default to the
/// rounded mean.
fn customer_count(arrival: &DistributionConfig, sampler: &Sampler) -> usize {
    match *arrival {
        DistributionConfig::Poisson { .. } | DistributionConfig::Exponential { .. } => {
            sampler.cp_table().len()
        }
        DistributionConfig::Uniform { a, b } => ((b - a) + 1.0).round().max(0.0) as usize,
        DistributionConfig::Normal { mean, .. } => mean.round().max(0.0) as usize,
    }
}
