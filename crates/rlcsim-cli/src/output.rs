//! Output formatting: tables, CSV and JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rlcsim_core::{ParameterSet, format_value};
use rlcsim_solver::{SweepParams, SweepResult, TransientResult};
use serde::Serialize;

/// Column width for tabular output.
const WIDTH: usize = 16;

/// Parameters plus result, as written by `--json`.
#[derive(Serialize)]
pub struct Report<'a, C: Serialize, R: Serialize> {
    pub parameters: &'a ParameterSet,
    pub config: &'a C,
    pub result: &'a R,
}

/// Print a JSON report to stdout.
pub fn print_json<C: Serialize, R: Serialize>(
    parameters: &ParameterSet,
    config: &C,
    result: &R,
) -> Result<()> {
    let report = Report {
        parameters,
        config,
        result,
    };
    let s = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{}", s);
    Ok(())
}

/// One-line description of a parameter set.
pub fn describe_circuit(p: &ParameterSet) -> String {
    let mut parts = vec![format!("R={}ohm", format_value(p.resistance()))];
    if p.damping_resistance() > 0.0 {
        parts.push(format!("Rs={}ohm", format_value(p.damping_resistance())));
    }
    if p.topology().has_inductor() {
        parts.push(format!("L={}H", format_value(p.inductance())));
    }
    if p.topology().has_capacitor() {
        parts.push(format!("C={}F", format_value(p.capacitance())));
    }
    parts.push(format!("V={}V", format_value(p.source_amplitude())));
    format!("{} circuit: {}", p.topology(), parts.join(", "))
}

/// Print a sweep in tabular format.
pub fn print_sweep(params: &ParameterSet, sweep: &SweepParams, result: &SweepResult) {
    println!(
        "Frequency Sweep ({} Hz .. {} Hz, {} points)",
        format_value(sweep.fstart),
        format_value(sweep.fstop),
        sweep.num_points
    );
    println!("{}", describe_circuit(params));
    println!("==========================================");
    println!();

    println!(
        "{:>WIDTH$}{:>WIDTH$}{:>WIDTH$}",
        "Freq (Hz)", "|Z| (ohm)", "|I| (A)"
    );
    println!("{}", "-".repeat(WIDTH * 3));
    for p in &result.points {
        println!(
            "{:>WIDTH$.6e}{:>WIDTH$.6e}{:>WIDTH$.6e}",
            p.frequency, p.impedance, p.current_amplitude
        );
    }
    println!();

    if let Some(f_res) = result.resonant_frequency {
        println!("Resonant frequency (sampled): {:.2} Hz", f_res);
    }
    if let Some(f0) = result.analytic_resonance {
        println!("Resonant frequency (analytic): {:.2} Hz", f0);
    }
    println!("Sweep complete ({} points).", result.len());
    println!();
}

/// Print a transient result in tabular format.
pub fn print_transient(params: &ParameterSet, result: &TransientResult) {
    println!("Transient Analysis ({})", describe_circuit(params));
    println!("==========================================");
    println!();

    print!("{:>WIDTH$}", "Time (s)");
    for s in &result.series {
        print!(
            "{:>WIDTH$}",
            format!("{} ({})", s.kind, s.kind.quantity().unit())
        );
    }
    println!();
    println!("{}", "-".repeat(WIDTH * (1 + result.series.len())));

    for (i, t) in result.times().iter().enumerate() {
        print!("{:>WIDTH$.6e}", t);
        for s in &result.series {
            print!("{:>WIDTH$.6}", s.values[i]);
        }
        println!();
    }
    println!();

    if let Some(tc) = result.time_constants {
        if tc.charge == tc.discharge {
            println!("Time constant: tau = {}s", format_value(tc.charge));
        } else {
            println!(
                "Time constants: tau_on = {}s, tau_off = {}s",
                format_value(tc.charge),
                format_value(tc.discharge)
            );
        }
    }
    if let (Some(regime), Some(d)) = (result.regime, result.damping) {
        println!(
            "Damping: {} (alpha = {:.2} 1/s, omega0 = {:.2} rad/s)",
            regime, d.alpha, d.omega0
        );
    }
    println!("Transient analysis complete ({} points).", result.len());
    println!();
}

/// Write a sweep as CSV: `frequency_hz,impedance_ohm,current_a`.
pub fn write_sweep_csv<W: Write>(w: &mut W, result: &SweepResult) -> io::Result<()> {
    writeln!(w, "frequency_hz,impedance_ohm,current_a")?;
    for p in &result.points {
        writeln!(w, "{:e},{:e},{:e}", p.frequency, p.impedance, p.current_amplitude)?;
    }
    Ok(())
}

/// Write a transient result as CSV: `time_s` followed by one column per series.
pub fn write_transient_csv<W: Write>(w: &mut W, result: &TransientResult) -> io::Result<()> {
    write!(w, "time_s")?;
    for s in &result.series {
        write!(w, ",{}_{}", s.kind, s.kind.quantity().unit().to_lowercase())?;
    }
    writeln!(w)?;

    for (i, t) in result.times().iter().enumerate() {
        write!(w, "{:e}", t)?;
        for s in &result.series {
            write!(w, ",{:e}", s.values[i])?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Create `path` and hand a buffered writer to `write`.
pub fn write_csv_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write(&mut w).with_context(|| format!("writing {}", path.display()))?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlcsim_core::Topology;
    use rlcsim_solver::{TimeSpan, sweep, transient};

    #[test]
    fn test_sweep_csv() {
        let p = ParameterSet::new(Topology::R, 100.0, 0.0, 0.0, 1.0).unwrap();
        let result = sweep(&p, &SweepParams::new(10.0, 1000.0, 3)).unwrap();
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "frequency_hz,impedance_ohm,current_a");
        assert_eq!(lines[1], "1e1,1e2,1e-2");
    }

    #[test]
    fn test_transient_csv_columns() {
        let p = ParameterSet::new(Topology::RL, 100.0, 10e-3, 0.0, 10.0).unwrap();
        let result = transient(&p, Some(TimeSpan::new(1e-3, 5))).unwrap();
        let mut buf = Vec::new();
        write_transient_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("time_s,growth_a,decay_a"));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn test_csv_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.csv");
        let p = ParameterSet::new(Topology::RC, 1000.0, 0.0, 100e-9, 5.0).unwrap();
        let result = transient(&p, None).unwrap();
        write_csv_file(&path, |w| write_transient_csv(w, &result)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("time_s,charge_v,discharge_v\n"));
        assert_eq!(text.lines().count(), 501);
    }

    #[test]
    fn test_describe_circuit() {
        let p = ParameterSet::new(Topology::RLC, 80.0, 10e-3, 150e-9, 50.0).unwrap();
        assert_eq!(
            describe_circuit(&p),
            "RLC circuit: R=80.0000ohm, L=10.0000mH, C=150.0000nF, V=50.0000V"
        );
        let rc = ParameterSet::new(Topology::RC, 1000.0, 0.0, 100e-9, 5.0).unwrap();
        assert!(!describe_circuit(&rc).contains("L="));
    }

    #[test]
    fn test_json_report_shape() {
        let p = ParameterSet::new(Topology::RLC, 80.0, 10e-3, 150e-9, 50.0).unwrap();
        let sp = SweepParams::new(100.0, 1000.0, 4);
        let result = sweep(&p, &sp).unwrap();
        let report = Report {
            parameters: &p,
            config: &sp,
            result: &result,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["parameters"]["topology"], "RLC");
        assert_eq!(value["config"]["num_points"], 4);
        assert_eq!(value["result"]["points"].as_array().unwrap().len(), 4);
    }
}
