/* 3rd party libraries */
use crossbeam_channel as cbc;
use log::info;
use std::thread::Builder;

/* Custom libraries */
use elevator_dispatch::controller::{Command, Controller, HostEvent};
use elevator_dispatch::{config, scenario, unwrap_or_exit};

/* Main */
fn main() {
    env_logger::init();

    let matches = clap::Command::new("elevator-dispatch")
        .about("Replays a scripted host event sequence through the elevator dispatcher")
        .arg(
            clap::Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Building and dispatch policy configuration"),
        )
        .arg(
            clap::Arg::new("scenario")
                .long("scenario")
                .takes_value(true)
                .default_value("scenario.json")
                .help("JSON array of host events"),
        )
        .get_matches();

    // Load the configuration and the event script
    let config = unwrap_or_exit!(config::load_config(
        matches.value_of("config").unwrap_or("config.toml")
    ));
    let events = unwrap_or_exit!(scenario::load_scenario(
        matches.value_of("scenario").unwrap_or("scenario.json")
    ));
    info!(
        "Building with {} floors and {} elevators, {} scripted events",
        config.building.n_floors,
        config.building.elevator_capacities.len(),
        events.len()
    );

    // Initialize channels
    let (event_tx, event_rx) = cbc::unbounded::<HostEvent>();
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the controller
    let controller = Controller::new(&config);
    let controller_thread = Builder::new().name("controller".into());
    let controller_handle = unwrap_or_exit!(
        controller_thread.spawn(move || controller.run(event_rx, command_tx, terminate_rx))
    );

    // Feed the script, closing the channel lets the controller finish
    for event in events {
        if event_tx.send(event).is_err() {
            break;
        }
    }
    drop(event_tx);

    for command in command_rx.iter() {
        println!("{}", unwrap_or_exit!(serde_json::to_string(&command)));
    }

    if controller_handle.join().is_err() {
        log::error!("Controller thread panicked");
        std::process::exit(1);
    }
    drop(terminate_tx);
}
