use anyhow::Context;
use network_monitor::{NetworkConfig, NetworkLayout, PassengerEventMessage, TransportNetwork};

const SAMPLE_LAYOUT: &str = include_str!("../data/sample_layout.json");
const SAMPLE_EVENTS: &str = include_str!("../data/sample_events.json");

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Network Monitor v{}", network_monitor::version());
    println!("==========================================");
    println!();

    let layout = NetworkLayout::from_json_str(SAMPLE_LAYOUT).context("parsing sample layout")?;
    let mut network = TransportNetwork::from_layout(&layout, NetworkConfig::default())
        .context("building network from sample layout")?;

    let stats = network.statistics();
    println!("=== Network ===");
    println!("  Stations: {}", stats.station_count);
    println!("  Lines:    {}", stats.line_count);
    println!("  Routes:   {}", stats.route_count);
    println!("  Edges:    {}", stats.edge_count);

    println!("\n=== Routes ===");
    for line in &layout.lines {
        let line_name = network.line_name(&line.id).unwrap_or(&line.id);
        for route in &line.routes {
            let total = network.route_travel_time(
                &line.id,
                &route.id,
                &route.start_station_id,
                &route.end_station_id,
            );
            println!(
                "  {} {} ({}): {} stops, {} min end to end",
                line_name,
                route.id,
                network.route_direction(&route.id).unwrap_or("?"),
                route.stops.len(),
                total
            );
        }
    }

    let events: Vec<PassengerEventMessage> =
        serde_json::from_str(SAMPLE_EVENTS).context("parsing sample events")?;
    for event in &events {
        network.record_event_message(event)?;
    }

    println!("\n=== Stations after {} events ===", events.len());
    for id in network.station_ids() {
        let count = network.passenger_count(id)?;
        let routes = network.routes_serving_station(id);
        println!(
            "  {:<14} passengers: {:>3}  routes: {}",
            network.station_name(id).unwrap_or(id),
            count,
            routes.join(", ")
        );
    }

    Ok(())
}
