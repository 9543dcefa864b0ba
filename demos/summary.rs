//! Prints a parameter summary of every network pair and optionally writes the
//! definitions as JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run --example summary -- [output dir]
//! ```

use paired_nets::network::{NetworkDefinition, Summary};
use paired_nets::trainer::TrainingOptions;
use paired_nets::*;

use std::path::{Path, PathBuf};

fn report(out: Option<&Path>, name: &str, net: &NetworkDefinition) -> anyhow::Result<()> {
    println!("{}\n{}\n", name, Summary::from(net));
    if let Some(dir) = out {
        let path = dir.join(format!("{}.json", name));
        net.save(&path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn report_options(out: Option<&Path>, name: &str, options: &TrainingOptions) -> anyhow::Result<()> {
    println!("{} options: {}\n", name, serde_json::to_string(options)?);
    if let Some(dir) = out {
        let path = dir.join(format!("{}.options.json", name));
        std::fs::write(&path, serde_json::to_string_pretty(options)?)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    if let Some(dir) = &out {
        std::fs::create_dir_all(dir)?;
    }
    let out = out.as_deref();

    // Auto MPG has 8 features and a single target
    let (deep, wide) = create_auto_mpg_deep_and_wide_networks(8, 1)?;
    report(out, "auto_mpg_deep", &deep)?;
    report(out, "auto_mpg_wide", &wide)?;

    let (relu, tanh) = create_delicious_relu_vs_tanh_networks(500, 983)?;
    report(out, "delicious_relu", &relu)?;
    report(out, "delicious_tanh", &tanh)?;

    let (dropout, no_dropout) = create_activity_dropout_and_nodropout_networks(561, 6)?;
    report(out, "activity_dropout", &dropout)?;
    report(out, "activity_no_dropout", &no_dropout)?;

    let (es, es_options, no_es, no_es_options) =
        create_income_earlystopping_and_noearlystopping_networks(105, 1)?;
    report(out, "income_earlystopping", &es)?;
    report_options(out, "income_earlystopping", &es_options)?;
    report(out, "income_noearlystopping", &no_es)?;
    report_options(out, "income_noearlystopping", &no_es_options)?;

    Ok(())
}
