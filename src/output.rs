// src/output.rs
use crate::visualizer::Analysis;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_analysis_to_csv<P: AsRef<Path>>(filename: P, analysis: &Analysis) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "spot,price,delta,gamma,vega,theta,rho")?;
    for ((spot, price), g) in analysis
        .spots
        .iter()
        .zip(&analysis.prices)
        .zip(&analysis.greeks)
    {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            spot, price, g.delta, g.gamma, g.vega, g.theta, g.rho
        )?;
    }
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>>(filename: P, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
