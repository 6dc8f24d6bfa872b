// scripts/benchmark.rs
use bsm_greeks::math_utils::Timer;
use bsm_greeks::models::{BlackScholesModel, OptionType};
use bsm_greeks::visualizer::{analyze, analyze_sequential, SweepConfig};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    points: usize,
    time_ms: f64,
    throughput_points_per_sec: f64,
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: String, points: usize, time_ms: f64, checksum: f64) -> Self {
        BenchmarkResult {
            name,
            points,
            time_ms,
            throughput_points_per_sec: points as f64 / (time_ms / 1000.0),
            checksum,
        }
    }
}

fn run_sweep_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let sizes = [10_000, 100_000, 1_000_000];

    for option_type in [OptionType::Call, OptionType::Put] {
        let model = BlackScholesModel::new(100.0, 105.0, 1.0, 0.05, 0.2, option_type);

        for &points in &sizes {
            let spots = SweepConfig {
                start: 1.0,
                end: 300.0,
                points,
                ..Default::default()
            }
            .spots();

            println!("  {} sweep, {} points...", option_type.label(), points);

            let mut timer = Timer::new();
            timer.start();
            let seq = analyze_sequential(&model, &spots);
            let seq_ms = timer.elapsed_ms();

            timer.start();
            let par = analyze(&model, &spots);
            let par_ms = timer.elapsed_ms();

            let checksum = |a: &bsm_greeks::visualizer::Analysis| a.prices.iter().sum::<f64>();

            results.push(BenchmarkResult::new(
                format!("{} Sweep (sequential)", option_type.label()),
                points,
                seq_ms,
                checksum(&seq),
            ));
            results.push(BenchmarkResult::new(
                format!("{} Sweep (rayon)", option_type.label()),
                points,
                par_ms,
                checksum(&par),
            ));
        }
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    // Write system information as comments
    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Points,Time_ms,Throughput_points_per_sec,Price_Checksum")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name,
            result.points,
            result.time_ms,
            result.throughput_points_per_sec,
            result.checksum
        )?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("bsm-greeks Sweep Benchmark");
    println!("==========================\n");

    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    println!("Running sweep benchmarks...");
    let results = run_sweep_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<28} {:>10} {:>12} {:>16} {:>10}",
        "Benchmark", "Points", "Time (ms)", "Points/sec", "Checksum"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<28} {:>10} {:>12.2} {:>16.0} {:>10.2}",
            result.name,
            result.points,
            result.time_ms,
            result.throughput_points_per_sec,
            result.checksum
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    println!("\nResults saved to: {}", filename);
    println!("Run with: cargo run --bin benchmark --release");

    Ok(())
}
