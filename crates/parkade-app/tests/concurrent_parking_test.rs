//! Many threads parking and leaving against one shared lot

use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;

use parkade_app::app::LotManager;
use parkade_domain::model::Ticket;
use parkade_domain::service::BillingStrategy;
use parkade_types::{ParkingError, Vehicle, VehicleCategory};

const THREADS: usize = 8;
const ATTEMPTS_PER_THREAD: usize = 25;

#[test]
fn test_concurrent_parks_never_share_a_spot() {
    let lot = LotManager::new(50, 10, 0);
    let tickets: Mutex<Vec<Ticket>> = Mutex::new(Vec::new());
    let rejected = Mutex::new(0usize);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let lot = &lot;
            let tickets = &tickets;
            let rejected = &rejected;
            scope.spawn(move || {
                for i in 0..ATTEMPTS_PER_THREAD {
                    let vehicle = Vehicle::car(format!("T{t}-{i}"));
                    match lot.park_vehicle(vehicle, i as i64, BillingStrategy::hourly()) {
                        Ok(ticket) => tickets.lock().unwrap().push(ticket),
                        Err(ParkingError::NoSpotAvailable { .. }) => {
                            *rejected.lock().unwrap() += 1
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            });
        }
    });

    let tickets = tickets.into_inner().unwrap();
    let rejected = rejected.into_inner().unwrap();

    // 200 attempts against 50 car spots
    assert_eq!(tickets.len(), 50);
    assert_eq!(rejected, THREADS * ATTEMPTS_PER_THREAD - 50);

    let spots: HashSet<u32> = tickets.iter().map(|t| t.spot_id().get()).collect();
    assert_eq!(spots.len(), tickets.len());
    assert_eq!(spots, (1..=50).collect::<HashSet<u32>>());

    let numbers: HashSet<u64> = tickets.iter().map(|t| t.number().0).collect();
    assert_eq!(numbers.len(), tickets.len());

    assert_eq!(lot.free_spots(VehicleCategory::Car), 0);
    assert_eq!(lot.free_spots(VehicleCategory::Bike), 10);
}

#[test]
fn test_concurrent_park_and_exit_keeps_capacity_invariant() {
    let lot = LotManager::new(3, 0, 0);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let lot = &lot;
            scope.spawn(move || {
                for i in 0..ATTEMPTS_PER_THREAD {
                    let vehicle = Vehicle::car(format!("T{t}-{i}"));
                    if let Ok(mut ticket) =
                        lot.park_vehicle(vehicle, 0, BillingStrategy::hourly())
                    {
                        let occupied = lot.inspect_pool(VehicleCategory::Car, |pool| {
                            let occupied = pool.occupied_count();
                            let holder = pool
                                .spot(ticket.spot_id())
                                .and_then(|s| s.occupant())
                                .map(|v| v.plate().to_string());
                            assert_eq!(holder.as_deref(), Some(ticket.vehicle().plate()));
                            occupied
                        });
                        assert!(occupied <= 3);
                        assert_eq!(lot.exit_vehicle(&mut ticket, 2), Ok(20));
                    }
                }
            });
        }
    });

    assert_eq!(lot.free_spots(VehicleCategory::Car), 3);
}
