use std::path::PathBuf;

use buckets_stats::equal_population::{self, WindowLayout};
use clap::Args;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct BinNArg {
    /// Path to the samples JSON file (`{"x": [...], "y": [...]}`)
    pub input: PathBuf,

    /// Number of samples per bin
    #[arg(short = 'n', long)]
    pub n: usize,

    /// Window arithmetic (`contiguous` or `legacy`)
    #[arg(long, default_value = "contiguous")]
    pub layout: WindowLayout,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BinNArg) -> anyhow::Result<()> {
    let BinNArg {
        input,
        n,
        layout,
        output,
    } = arg;
    let samples = util::read_samples_file(input)?;

    eprintln!("Binning into windows of {n} samples ({layout} layout)...");
    let bins = equal_population::bin_n_with_layout(&samples.x, &samples.y, *n, *layout)?;
    eprintln!("  Built {} bins", bins.len());

    let nan_samples = samples.x.iter().chain(&samples.y).filter(|v| v.is_nan()).count();
    if nan_samples > 0 {
        eprintln!("  Warning: {nan_samples} NaN values propagate into bin statistics");
    }

    Output::save_json(&bins, output.clone())?;
    if let Some(path) = output {
        eprintln!("Result saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_samples(dir: &tempfile::TempDir) -> PathBuf {
        let input = dir.path().join("samples.json");
        fs::write(
            &input,
            r#"{"x": [6, 1, 4, 3, 5, 2], "y": [60, 10, 40, 30, 50, 20]}"#,
        )
        .unwrap();
        input
    }

    fn run_to_json(arg: &BinNArg) -> serde_json::Value {
        run(arg).unwrap();
        let output = arg.output.as_ref().unwrap();
        serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap()
    }

    #[test]
    fn test_run_writes_contiguous_bins() {
        let dir = tempfile::tempdir().unwrap();
        let arg = BinNArg {
            input: write_samples(&dir),
            n: 2,
            layout: WindowLayout::Contiguous,
            output: Some(dir.path().join("bins.json")),
        };
        let written = run_to_json(&arg);
        assert_eq!(written["layout"], "Contiguous");
        assert_eq!(written["centers"], serde_json::json!([1.5, 3.5, 5.5]));
        assert_eq!(written["means"], serde_json::json!([15.0, 35.0, 55.0]));
        assert_eq!(written["std_devs"], serde_json::json!([5.0, 5.0, 5.0]));
        assert_eq!(written["counts"], serde_json::json!([2, 2, 2]));
        assert_eq!(
            written["windows"][1],
            serde_json::json!({"start": 2, "end": 4})
        );
    }

    #[test]
    fn test_run_writes_legacy_bins() {
        let dir = tempfile::tempdir().unwrap();
        let arg = BinNArg {
            input: write_samples(&dir),
            n: 2,
            layout: WindowLayout::Legacy,
            output: Some(dir.path().join("bins.json")),
        };
        let written = run_to_json(&arg);
        assert_eq!(written["centers"], serde_json::json!([1.0, 4.5]));
        assert_eq!(written["means"], serde_json::json!([10.0, 45.0]));
        assert_eq!(written["counts"], serde_json::json!([1, 4]));
    }
}
