use flightnet_lib::stats::{
    airlines_from_airport, airport_stats, countries_from_city, flights_per_airline, flights_per_city,
    global_airport_count, global_flight_count,
};
use flightnet_lib::{top_airports_by_traffic, Error};

mod common;

#[test]
fn global_counts_match_fixture() {
    let (_, graph) = common::fixture_network();
    assert_eq!(global_airport_count(&graph), 12);
    assert_eq!(global_flight_count(&graph), 37);
}

#[test]
fn per_airport_statistics() {
    let (network, graph) = common::fixture_network();

    let lisbon = airport_stats(&network, &graph, "LIS").expect("LIS known");
    assert_eq!(lisbon.departures, 7);
    assert_eq!(lisbon.airlines, 5);
    assert_eq!(lisbon.destination_countries, 4);

    assert_eq!(airlines_from_airport(&graph, "JFK").expect("JFK known"), 3);
    assert!(matches!(
        airport_stats(&network, &graph, "ZZZ"),
        Err(Error::UnknownAirport { .. })
    ));
}

#[test]
fn city_totals_merge_airports() {
    let (network, graph) = common::fixture_network();
    let cities = flights_per_city(&network, &graph);

    let paris = cities
        .iter()
        .find(|entry| entry.city == "Paris")
        .expect("Paris listed");
    assert_eq!(paris.flights, 15);
    assert_eq!(cities.len(), 11);
    assert_eq!(cities.iter().map(|entry| entry.flights).sum::<usize>(), 2 * 37);

    assert_eq!(countries_from_city(&network, &graph, "Paris", "France"), 4);
    assert_eq!(countries_from_city(&network, &graph, "Atlantis", "Nowhere"), 0);
}

#[test]
fn airline_totals_cover_every_flight() {
    let (_, graph) = common::fixture_network();
    let totals = flights_per_airline(&graph);

    assert_eq!(totals.get("AFR"), Some(&9));
    assert_eq!(totals.get("SAT"), Some(&2));
    assert_eq!(totals.values().sum::<usize>(), 37);
}

#[test]
fn busiest_airports_rank_by_traffic() {
    let (_, graph) = common::fixture_network();
    let top = top_airports_by_traffic(&graph, 3).expect("valid k");

    let ranked: Vec<(usize, &str, usize)> = top
        .iter()
        .map(|entry| (entry.rank, entry.code.as_str(), entry.flights))
        .collect();
    assert_eq!(ranked, vec![(1, "LIS", 14), (2, "CDG", 13), (3, "MAD", 10)]);
}

#[test]
fn equal_traffic_keeps_dataset_order() {
    let (_, graph) = common::fixture_network();
    let all = top_airports_by_traffic(&graph, 12).expect("valid k");
    let tail: Vec<&str> = all[7..].iter().map(|entry| entry.code.as_str()).collect();
    assert_eq!(tail, vec!["ORY", "FNC", "PDL", "HNL", "OGG"]);
}

#[test]
fn out_of_range_k_is_rejected() {
    let (_, graph) = common::fixture_network();
    for k in [0, 13] {
        assert!(matches!(
            top_airports_by_traffic(&graph, k),
            Err(Error::InvalidQueryBounds { .. })
        ));
    }
}
