//! PQX - Post-Quantum Exchange Analyzer
//! Command-line dashboard comparing classical and quantum attacks on cryptography

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use rand::Rng;
use std::collections::BTreeMap;

use pqx_analyzer::{
    DEFAULT_NOISE_LEVELS, DEFAULT_QUBIT_COUNTS, algorithm_comparison,
    classical_factorization_scaling, classical_search_scaling, grover_scaling, noise_sweep,
    scaling, security_gauge, shor_scaling, simulation_metrics_row, speedup_factors,
    threat_timeline,
};
use pqx_circuit::{SUPPORTED_MODULI, build_grover_circuit, build_shor_circuit, optimal_iterations};
use pqx_classical::{brute_force_search, factorize, generate_keypair};
use pqx_simulator::{NoiseKind, NoiseModel, RunOutcome, SimulatorConfig, run};

#[derive(Parser)]
#[command(name = "pqx")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "PQX - Post-Quantum Exchange Analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Factor an RSA modulus by classical trial division
    Factor {
        /// Modulus to factor
        #[arg(value_name = "N")]
        n: u64,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a toy RSA key pair from two primes
    Keygen {
        /// First prime
        #[arg(value_name = "P")]
        p: u64,

        /// Second prime
        #[arg(value_name = "Q")]
        q: u64,

        /// Message to round-trip through encrypt/decrypt
        #[arg(short, long)]
        message: Option<u64>,

        /// Emit the key pair as JSON
        #[arg(long)]
        json: bool,
    },

    /// Brute-force a symmetric key by linear search
    BruteForce {
        /// Key size in bits
        #[arg(short, long, default_value_t = 16)]
        bits: u32,

        /// Secret key to recover (random if omitted)
        #[arg(short, long)]
        target: Option<u64>,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate Shor's order-finding circuit
    Shor {
        /// Number to factor (15 or 21)
        #[arg(short, long, default_value_t = 15)]
        n: u64,

        /// Base a for modular exponentiation
        #[arg(short, long)]
        base: Option<u64>,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Simulate Grover's search
    Grover {
        /// Number of qubits in the search register
        #[arg(short, long, default_value_t = 3)]
        qubits: usize,

        /// Target bitstring (all ones if omitted)
        #[arg(short, long)]
        target: Option<String>,

        /// Grover iterations (optimal if omitted)
        #[arg(short, long)]
        iterations: Option<usize>,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Print asymptotic attack-cost scaling per key size
    Scaling {
        /// Key sizes in bits, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "8,16,24,32,40,48,56,64")]
        bits: Vec<u32>,

        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print quantum speedup factors per key size
    Speedup {
        /// Key sizes in bits, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "128,256,512,1024,2048")]
        bits: Vec<u32>,

        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare classical and post-quantum algorithm profiles
    Compare {
        /// Emit the profiles as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the quantum threat timeline
    Timeline {
        /// Emit the timeline as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show effective security strength per algorithm
    Gauge {
        /// Emit the gauge as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sweep noise levels against Grover success probability
    NoiseSweep {
        /// Noise channels, comma separated
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "depolarizing,bit_flip,phase_flip"
        )]
        kinds: Vec<NoiseKind>,

        /// Noise levels, comma separated
        #[arg(short, long, value_delimiter = ',')]
        levels: Option<Vec<f64>>,

        /// Qubit counts, comma separated
        #[arg(short, long, value_delimiter = ',')]
        qubits: Option<Vec<usize>>,

        /// RNG seed for reproducible sweeps
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the grid as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments shared by the circuit simulation commands
#[derive(clap::Args)]
struct SimArgs {
    /// Measurement shots
    #[arg(long, default_value_t = 1024)]
    shots: u32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Noise channel (depolarizing, bit_flip, phase_flip)
    #[arg(long)]
    noise: Option<NoiseKind>,

    /// Error probability per qubit per gate
    #[arg(long, default_value_t = 0.01)]
    noise_level: f64,

    /// Emit the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl SimArgs {
    fn noise_model(&self) -> NoiseModel {
        match self.noise {
            Some(kind) => NoiseModel::new(kind, self.noise_level),
            None => NoiseModel::ideal(),
        }
    }

    fn config(&self) -> SimulatorConfig {
        SimulatorConfig {
            shots: self.shots,
            seed: self.seed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Factor { n, json } => factor_command(n, json),
        Commands::Keygen { p, q, message, json } => keygen_command(p, q, message, json),
        Commands::BruteForce { bits, target, json } => brute_force_command(bits, target, json),
        Commands::Shor { n, base, sim } => shor_command(n, base, &sim),
        Commands::Grover {
            qubits,
            target,
            iterations,
            sim,
        } => grover_command(qubits, target.as_deref(), iterations, &sim),
        Commands::Scaling { bits, json } => scaling_command(&bits, json),
        Commands::Speedup { bits, json } => speedup_command(&bits, json),
        Commands::Compare { json } => compare_command(json),
        Commands::Timeline { json } => timeline_command(json),
        Commands::Gauge { json } => gauge_command(json),
        Commands::NoiseSweep {
            kinds,
            levels,
            qubits,
            seed,
            json,
        } => noise_sweep_command(&kinds, levels, qubits, seed, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Classical attack commands
// ============================================================================

fn factor_command(n: u64, json: bool) -> Result<()> {
    if n < 2 {
        bail!("Modulus must be at least 2, got {}", n);
    }

    let outcome = factorize(n);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {} by trial division",
        "   Factoring".green().bold(),
        n.to_string().cyan()
    );

    if outcome.q == 1 {
        println!("  {} {} is prime", "!".yellow().bold(), n);
    } else {
        println!(
            "  {} = {} × {}",
            n.to_string().cyan(),
            outcome.p.to_string().cyan().bold(),
            outcome.q.to_string().cyan().bold()
        );
    }
    println!("  iterations: {}", outcome.iterations);
    println!("  time:       {:.6}s", outcome.execution_time_seconds);

    Ok(())
}

fn keygen_command(p: u64, q: u64, message: Option<u64>, json: bool) -> Result<()> {
    let keys = generate_keypair(p, q)?;
    let n = keys.modulus();

    if json {
        let mut value = serde_json::to_value(&keys)?;
        if let Some(m) = message {
            if m >= n {
                bail!("Message {} must be smaller than the modulus {}", m, n);
            }
            let ciphertext = keys.encrypt(m);
            value["message"] = m.into();
            value["ciphertext"] = ciphertext.into();
            value["decrypted"] = keys.decrypt(ciphertext).into();
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "{} RSA key pair from p={}, q={}",
        "  Generating".green().bold(),
        p.to_string().cyan(),
        q.to_string().cyan()
    );
    println!("  public  (e, n): ({}, {})", keys.public.0, keys.public.1);
    println!("  private (d, n): ({}, {})", keys.private.0, keys.private.1);

    if let Some(m) = message {
        if m >= n {
            bail!("Message {} must be smaller than the modulus {}", m, n);
        }
        let ciphertext = keys.encrypt(m);
        let decrypted = keys.decrypt(ciphertext);
        println!();
        println!("  message:    {}", m.to_string().cyan());
        println!("  ciphertext: {}", ciphertext);
        println!("  decrypted:  {}", decrypted.to_string().cyan());
    }

    Ok(())
}

fn brute_force_command(bits: u32, target: Option<u64>, json: bool) -> Result<()> {
    let target = match target {
        Some(t) => t,
        None => {
            if bits >= 64 {
                bail!("Key size {} exceeds the 40-bit search limit", bits);
            }
            rand::thread_rng().gen_range(0..1u64 << bits)
        }
    };

    let outcome = brute_force_search(target, bits)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {}-bit key space ({} candidates)",
        "   Searching".green().bold(),
        bits.to_string().cyan(),
        1u64 << bits
    );
    println!("  key found:  {}", outcome.key.to_string().cyan().bold());
    println!("  iterations: {}", outcome.iterations);
    println!("  time:       {:.6}s", outcome.execution_time_seconds);
    println!(
        "  Grover would need ~{} iterations for the same space",
        grover_scaling(&[bits])[0] as u64
    );

    Ok(())
}

// ============================================================================
// Quantum simulation commands
// ============================================================================

fn shor_command(n: u64, base: Option<u64>, sim: &SimArgs) -> Result<()> {
    if !SUPPORTED_MODULI.contains(&n) {
        bail!("Shor demo supports N in {:?}, got {}", SUPPORTED_MODULI, n);
    }

    let circuit = build_shor_circuit(n, base)?;
    let outcome = run(&circuit, &sim.noise_model(), &sim.config())?;

    if sim.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} Shor order finding for N={}",
        "  Simulating".green().bold(),
        n.to_string().cyan()
    );
    print_run_summary(&outcome, &format!("Shor (N={})", n), sim);

    // Fatores clássicos para conferência
    let classical = factorize(n);
    println!(
        "\n  classical check: {} = {} × {} ({} iterations)",
        n, classical.p, classical.q, classical.iterations
    );

    Ok(())
}

fn grover_command(
    qubits: usize,
    target: Option<&str>,
    iterations: Option<usize>,
    sim: &SimArgs,
) -> Result<()> {
    let all_ones = "1".repeat(qubits);
    let target = target.unwrap_or(&all_ones);

    let circuit = build_grover_circuit(qubits, target, iterations)?;
    let outcome = run(&circuit, &sim.noise_model(), &sim.config())?;

    if sim.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let used = iterations.unwrap_or_else(|| optimal_iterations(qubits));
    println!(
        "{} Grover search for |{}> on {} qubits ({} iterations)",
        "  Simulating".green().bold(),
        target.cyan(),
        qubits,
        used
    );
    print_run_summary(&outcome, &format!("Grover ({} qubits)", qubits), sim);

    let success = outcome.probabilities.get(target).copied().unwrap_or(0.0);
    println!(
        "\n  success probability: {}",
        format!("{:.1}%", success * 100.0).cyan().bold()
    );
    println!(
        "  classical search would scan up to {} keys",
        classical_search_scaling(&[qubits as u32])[0] as u64
    );

    Ok(())
}

fn print_run_summary(outcome: &RunOutcome, algo_name: &str, sim: &SimArgs) {
    let row = simulation_metrics_row(&outcome.metrics, algo_name);
    let noise = sim.noise_model();

    println!("  qubits: {}   depth: {}   gates: {}", row.qubits_required, row.circuit_depth, row.total_gates);
    println!("  shots:  {}   time: {:.4}s", sim.shots, row.execution_time_seconds);
    if !noise.is_ideal() {
        println!("  noise:  {} @ {}", noise.kind, noise.level);
    }

    println!("\n{}", "Measurement counts:".bold());
    print_histogram(&outcome.counts, sim.shots, 8);
}

/// Top-k histogram as colored bars
fn print_histogram(counts: &BTreeMap<String, u64>, shots: u32, top: usize) {
    let mut rows: Vec<(&String, u64)> = counts.iter().map(|(k, &v)| (k, v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (key, count) in rows.into_iter().take(top) {
        let fraction = count as f64 / f64::from(shots);
        let bar = "█".repeat((fraction * 40.0).round() as usize);
        println!(
            "  {}  {:>6}  {:>5.1}%  {}",
            key.cyan(),
            count,
            fraction * 100.0,
            bar.green()
        );
    }
    if counts.len() > top {
        println!("  ... {} more outcomes", counts.len() - top);
    }
}

// ============================================================================
// Analysis commands
// ============================================================================

fn scaling_command(bits: &[u32], json: bool) -> Result<()> {
    if bits.is_empty() {
        bail!("At least one key size is required");
    }

    if json {
        let gnfs = classical_factorization_scaling(bits);
        let shor = shor_scaling(bits);
        let search = classical_search_scaling(bits);
        let grover = grover_scaling(bits);

        let rows: Vec<serde_json::Value> = bits
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                serde_json::json!({
                    "key_size_bits": b,
                    "classical_factorization_ops": gnfs[i],
                    "shor_ops": shor[i],
                    "classical_search_ops": search[i],
                    "grover_ops": grover[i],
                    "classical_factorization_log10": scaling::classical_factorization_log10(b),
                    "classical_search_log10": scaling::classical_search_log10(b),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Attack cost scaling (operations, log10)".bold());
    println!(
        "  {:>6}  {:>12}  {:>12}  {:>12}  {:>12}",
        "bits".bold(),
        "GNFS".bold(),
        "Shor".bold(),
        "search".bold(),
        "Grover".bold()
    );

    for &b in bits {
        println!(
            "  {:>6}  {:>12.2}  {:>12.2}  {:>12.2}  {:>12.2}",
            b.to_string().cyan(),
            scaling::classical_factorization_log10(b),
            scaling::shor_log10(b),
            scaling::classical_search_log10(b),
            scaling::grover_log10(b)
        );
    }

    println!("\n  GNFS and search grow super-polynomially; Shor and Grover do not.");
    Ok(())
}

fn speedup_command(bits: &[u32], json: bool) -> Result<()> {
    if bits.is_empty() {
        bail!("At least one key size is required");
    }

    let rows = speedup_factors(bits);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Quantum speedup factors (log10 of ops ratio)".bold());
    println!(
        "  {:>6}  {:>20}  {:>18}",
        "bits".bold(),
        "factoring speedup".bold(),
        "search speedup".bold()
    );

    for row in &rows {
        println!(
            "  {:>6}  {:>18}  {:>16}",
            row.key_size_bits.to_string().cyan(),
            format!("10^{:.1}", row.factorization_speedup_log10).green(),
            format!("10^{:.1}", row.search_speedup_log10).green()
        );
    }

    Ok(())
}

fn compare_command(json: bool) -> Result<()> {
    let profiles = algorithm_comparison();

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!("{}", "Algorithm profiles (0-100 per dimension)".bold());
    println!(
        "  {:<28}  {:>8}  {:>9}  {:>10}  {:>6}  {:>8}",
        "algorithm".bold(),
        "key eff".bold(),
        "classical".bold(),
        "quantum".bold(),
        "speed".bold(),
        "maturity".bold()
    );

    for p in &profiles {
        let quantum = if p.quantum_resistance >= 90 {
            p.quantum_resistance.to_string().green()
        } else {
            p.quantum_resistance.to_string().red()
        };
        println!(
            "  {:<28}  {:>8}  {:>9}  {:>10}  {:>6}  {:>8}",
            p.algorithm.cyan(),
            p.key_size_efficiency,
            p.classical_security,
            quantum,
            p.performance_speed,
            p.standardization_maturity
        );
    }

    Ok(())
}

fn timeline_command(json: bool) -> Result<()> {
    let timeline = threat_timeline();

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    println!("{}", "Quantum threat timeline".bold());
    for m in &timeline {
        let category = match m.category {
            "Quantum Threat" => m.category.red().bold(),
            "Quantum Milestone" => m.category.yellow(),
            "Post-Quantum" => m.category.green(),
            other => other.normal(),
        };
        println!(
            "  {}  {}  [{}]",
            m.year.to_string().cyan().bold(),
            m.event.bold(),
            category
        );
        println!("        {} ({})", m.description, m.impact);
    }

    Ok(())
}

fn gauge_command(json: bool) -> Result<()> {
    let gauges = security_gauge();

    if json {
        println!("{}", serde_json::to_string_pretty(&gauges)?);
        return Ok(());
    }

    println!("{}", "Effective security strength (bits)".bold());
    println!(
        "  {:<24}  {:<22}  {:>9}  {:>7}  {}",
        "algorithm".bold(),
        "kind".bold(),
        "classical".bold(),
        "quantum".bold(),
        "status".bold()
    );

    for g in &gauges {
        let status = if g.quantum_security_bits == 0 {
            g.status.red().bold()
        } else if g.quantum_security_bits < g.classical_security_bits {
            g.status.yellow()
        } else {
            g.status.green()
        };
        println!(
            "  {:<24}  {:<22}  {:>9}  {:>7}  {}",
            g.algorithm.cyan(),
            g.kind,
            g.classical_security_bits,
            g.quantum_security_bits,
            status
        );
    }

    Ok(())
}

fn noise_sweep_command(
    kinds: &[NoiseKind],
    levels: Option<Vec<f64>>,
    qubits: Option<Vec<usize>>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let levels = levels.unwrap_or_else(|| DEFAULT_NOISE_LEVELS.to_vec());
    let qubits = qubits.unwrap_or_else(|| DEFAULT_QUBIT_COUNTS.to_vec());

    if !json {
        println!(
            "{} Grover under noise ({} cells)",
            "    Sweeping".green().bold(),
            kinds.len() * levels.len() * qubits.len()
        );
    }

    let grid = noise_sweep(kinds, &levels, &qubits, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    for &kind in kinds {
        println!("\n{}", format!("channel: {}", kind).bold());
        print!("  {:>7}", "qubits".bold());
        for level in &levels {
            print!("  {:>7}", format!("{:.3}", level));
        }
        println!();

        for &nq in &qubits {
            print!("  {:>7}", nq.to_string().cyan());
            for &level in &levels {
                let cell = grid.iter().find(|p| {
                    p.qubits == nq && p.noise_kind == kind && p.noise_level == level
                });
                match cell {
                    Some(p) => {
                        let pct = p.success_probability * 100.0;
                        let text = format!("{:>6.1}%", pct);
                        let colored_text = if pct >= 80.0 {
                            text.green()
                        } else if pct >= 50.0 {
                            text.yellow()
                        } else {
                            text.red()
                        };
                        print!("  {}", colored_text);
                    }
                    None => print!("  {:>7}", "-"),
                }
            }
            println!();
        }
    }

    println!("\n  success = probability of measuring the all-ones target state");
    Ok(())
}
