//! renewcast entry point — CLI wiring and config-driven fleet reporting.

use std::path::Path;
use std::process;

use renewcast::config::FleetConfig;
use renewcast::geo;
use renewcast::io::export::export_csv;
use renewcast::report::{FleetReport, fleet_estimates};

/// Parsed CLI arguments.
struct CliArgs {
    fleet_path: Option<String>,
    preset: Option<String>,
    export_out: Option<String>,
    near: Option<NearArgs>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

/// Proximity query from `--near-lat/--near-lon/--near-radius-km`.
struct NearArgs {
    lat: f64,
    lon: f64,
    radius_km: f64,
}

fn print_help() {
    eprintln!("renewcast — renewable-plant production estimation");
    eprintln!();
    eprintln!("Usage: renewcast [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --fleet <path>           Load fleet from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (demo, anatolia)");
    eprintln!("  --export <path>          Export estimate rows to CSV");
    eprintln!("  --near-lat <deg>         Proximity query latitude");
    eprintln!("  --near-lon <deg>         Proximity query longitude");
    eprintln!("  --near-radius-km <km>    Proximity query radius");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --fleet or --preset is given, the demo preset is used.");
}

fn parse_f64_arg(args: &[String], i: usize, name: &str) -> f64 {
    let Some(raw) = args.get(i) else {
        eprintln!("error: {name} requires a numeric argument");
        process::exit(1);
    };
    match raw.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("error: {name} value \"{raw}\" is not a valid number");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        fleet_path: None,
        preset: None,
        export_out: None,
        near: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };
    let mut near_lat: Option<f64> = None;
    let mut near_lon: Option<f64> = None;
    let mut near_radius: Option<f64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--fleet" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --fleet requires a path argument");
                    process::exit(1);
                }
                cli.fleet_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            "--near-lat" => {
                i += 1;
                near_lat = Some(parse_f64_arg(&args, i, "--near-lat"));
            }
            "--near-lon" => {
                i += 1;
                near_lon = Some(parse_f64_arg(&args, i, "--near-lon"));
            }
            "--near-radius-km" => {
                i += 1;
                near_radius = Some(parse_f64_arg(&args, i, "--near-radius-km"));
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    match (near_lat, near_lon, near_radius) {
        (None, None, None) => {}
        (Some(lat), Some(lon), Some(radius_km)) => {
            if radius_km <= 0.0 {
                eprintln!("error: --near-radius-km must be > 0");
                process::exit(1);
            }
            cli.near = Some(NearArgs {
                lat,
                lon,
                radius_km,
            });
        }
        _ => {
            eprintln!(
                "error: --near-lat, --near-lon, and --near-radius-km must be given together"
            );
            process::exit(1);
        }
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --fleet takes priority, then --preset, then the demo default
    let fleet_config = if let Some(ref path) = cli.fleet_path {
        match FleetConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match FleetConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        FleetConfig::demo()
    };

    // Validate
    let errors = fleet_config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let fleet = fleet_config.to_fleet();
    let weather = fleet_config.to_weather();

    // Per-plant estimates and fleet totals
    let rows = fleet_estimates(fleet.plants(), &weather);
    for row in &rows {
        println!("{row}");
    }
    let report = FleetReport::from_rows(&rows);
    println!("\n{report}");

    // Proximity query if requested
    if let Some(ref near) = cli.near {
        let hits = geo::find_nearby(near.lat, near.lon, fleet.plants(), near.radius_km);
        println!(
            "\n--- Plants within {:.1} km of ({:.4}, {:.4}) ---",
            near.radius_km, near.lat, near.lon
        );
        if hits.is_empty() {
            println!("(none)");
        }
        for plant in &hits {
            let d = geo::haversine_km(near.lat, near.lon, plant.latitude, plant.longitude);
            println!("{:>8.1} km  #{:<3} {}", d, plant.id, plant.name);
        }
    }

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&rows, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Estimates written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(renewcast::api::AppState { fleet, weather });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(renewcast::api::serve(state, addr));
    }
}
