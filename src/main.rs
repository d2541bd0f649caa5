use std::env;
use std::fs;
use std::io::{self, Write};

use ballistic_rust::core::analytical::{flight_time, max_height, max_range, sample_trajectory};
use ballistic_rust::core::{
    BodyParameters, CelestialBody, ProjectileState, SimConfig, SolverMode, predict,
};

mod plot;

// Live flights stop after this many vacuum flight times plus the preview horizon.
const LIVE_TIME_FLIGHT_MULTIPLE: f64 = 2.0;
const THEORY_SAMPLES: usize = 200;

#[derive(Clone, Debug)]
struct Inputs {
    params: BodyParameters,
    body: CelestialBody,
    config_path: Option<String>,
    plot_path: Option<String>,
}

impl Inputs {
    fn new(speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            params: BodyParameters {
                speed_mps,
                angle_deg,
                ..BodyParameters::default()
            },
            body: CelestialBody::Earth,
            config_path: None,
            plot_path: None,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Could not read input: {e}"))?;

    if bytes == 0 {
        return Err("Input ended unexpectedly (EOF).".to_string());
    }
    Ok(line.trim().to_string())
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, String> {
    loop {
        match read_line(prompt)?.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => eprintln!("Please answer y or n."),
        }
    }
}

fn get_inputs_from_user() -> Result<Inputs, String> {
    let mut inputs = Inputs::new(
        read_f64("Velocity (m/s): ")?,
        read_f64("Angle (degrees): ")?,
    );
    inputs.params.drag_enabled = read_yes_no("Air drag? (y/N): ")?;
    inputs.params.wind_speed_mps = read_f64("Wind (m/s, + tailwind, 0 for none): ")?;
    Ok(inputs)
}

fn next_value<'a>(rest: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, String> {
    rest.next()
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value after {flag}."))
}

fn get_inputs_from_args(args: &[String]) -> Result<Inputs, String> {
    if args.len() < 3 {
        return Err("Expected at least 2 arguments: <velocity_mps> <angle_deg>.".to_string());
    }

    let mut inputs = Inputs::new(
        parse_f64(&args[1], "velocity")?,
        parse_f64(&args[2], "angle")?,
    );
    let mut gravity_override = None;

    let mut rest = args[3..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--drag" => inputs.params.drag_enabled = true,
            "--mass" => inputs.params.mass_kg = parse_f64(next_value(&mut rest, flag)?, "mass")?,
            "--diameter" => {
                inputs.params.diameter_m = parse_f64(next_value(&mut rest, flag)?, "diameter")?
            }
            "--wind" => {
                inputs.params.wind_speed_mps = parse_f64(next_value(&mut rest, flag)?, "wind")?
            }
            "--gravity" => {
                gravity_override = Some(parse_f64(next_value(&mut rest, flag)?, "gravity")?)
            }
            "--body" => {
                let name = next_value(&mut rest, flag)?;
                inputs.body = CelestialBody::from_name(name).ok_or_else(|| {
                    format!("Unknown body: '{name}'. Expected earth, moon or mars.")
                })?;
            }
            "--config" => inputs.config_path = Some(next_value(&mut rest, flag)?.to_string()),
            "--plot" => inputs.plot_path = Some(next_value(&mut rest, flag)?.to_string()),
            other => return Err(format!("Unknown option: '{other}'.")),
        }
    }

    inputs.params.gravity_mps2 = gravity_override.unwrap_or(inputs.body.gravity_mps2());
    Ok(inputs)
}

fn load_config(inputs: &Inputs) -> Result<SimConfig, String> {
    match &inputs.config_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Could not read config '{path}': {e}"))?;
            SimConfig::for_body(inputs.body)
                .with_json_overrides(&json)
                .map_err(|e| e.to_string())
        }
        None => Ok(SimConfig::for_body(inputs.body)),
    }
}

fn live_time_limit_s(params: &BodyParameters, config: &SimConfig) -> f64 {
    let vacuum_s = flight_time(params.speed_mps, params.angle_deg, params.gravity_mps2);
    LIVE_TIME_FLIGHT_MULTIPLE * vacuum_s + config.prediction_max_time_s
}

/// Drives a fresh flight tick by tick until it lands or `time_limit_s` of
/// simulated time has passed. A flight cut off by the limit is still flying.
fn fly(
    params: BodyParameters,
    config: SimConfig,
    time_limit_s: f64,
) -> Result<ProjectileState, String> {
    let mut projectile = ProjectileState::new(params, config).map_err(|e| e.to_string())?;
    projectile.launch();
    while projectile.is_flying() && projectile.time_s() < time_limit_s {
        projectile.update();
    }
    Ok(projectile)
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <velocity_mps> <angle_deg> [options]");
    println!();
    println!("Options:");
    println!("  --mass <kg>            projectile mass (default 0.145)");
    println!("  --diameter <m>         projectile diameter (default 0.074)");
    println!("  --drag                 enable quadratic air drag");
    println!("  --wind <mps>           horizontal wind, positive = tailwind");
    println!("  --body <earth|moon|mars>");
    println!("  --gravity <mps2>       override the body's gravity");
    println!("  --config <file.json>   simulation constants");
    println!("  --plot <file.svg>      write a trajectory chart");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 20 45 --drag --wind -3");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = if args.len() == 1 {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args)?
    };
    let config = load_config(&inputs)?;
    let params = inputs.params;

    let prediction = predict(&params, &config).map_err(|e| e.to_string())?;
    let projectile = fly(params, config, live_time_limit_s(&params, &config))?;
    let (v0, angle, g) = (params.speed_mps, params.angle_deg, params.gravity_mps2);

    println!("\nBody: {} (g = {:.2} m/s^2)", inputs.body.name(), g);
    println!("Theory (no resistance):");
    println!("  Range:       {:.4} m", max_range(v0, angle, g));
    println!("  Max height:  {:.4} m", max_height(v0, angle, g));
    println!("  Flight time: {:.4} s", flight_time(v0, angle, g));
    println!("Preview:");
    if prediction.landed {
        println!("  Range:       {:.4} m", prediction.range_m);
    } else {
        println!("  Still airborne after {:.1} s", prediction.flight_time_s);
    }
    let mode = match projectile.solver_mode() {
        SolverMode::Analytical => "closed form",
        SolverMode::Numerical => "Euler integration",
    };
    println!("Live flight ({mode}):");
    match projectile.range_m() {
        Some(range_m) => println!("  Range:       {range_m:.4} m"),
        None => println!(
            "  Still airborne after {:.1} s at x = {:.4} m",
            projectile.time_s(),
            projectile.state().x
        ),
    }
    println!("  Max height:  {:.4} m", projectile.max_height_m());
    println!("  Flight time: {:.4} s", projectile.time_s());
    println!("  Speed:       {:.4} m/s", projectile.speed());

    if let Some(path) = &inputs.plot_path {
        let theory = sample_trajectory(v0, angle, g, THEORY_SAMPLES);
        let mut live = projectile.trajectory().to_vec();
        live.push(projectile.state().position());
        plot::write_svg(path, &live, &prediction.points, &theory)
            .map_err(|e| format!("Could not write plot '{path}': {e}"))?;
        println!("\nChart written to {path}");
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
