use std::path::PathBuf;

use buckets_stats::fixed_center;
use clap::Args;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct BinXArg {
    /// Path to the samples JSON file (`{"x": [...], "y": [...]}`)
    pub input: PathBuf,

    /// Bin centers, strictly increasing (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub centers: Vec<f64>,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BinXArg) -> anyhow::Result<()> {
    let BinXArg {
        input,
        centers,
        output,
    } = arg;
    let samples = util::read_samples_file(input)?;

    eprintln!("Binning around {} centers...", centers.len());
    let bins = fixed_center::bin_x(&samples.x, &samples.y, centers)?;

    if bins.missing > 0 {
        eprintln!("  Dropped {} samples with NaN x or y", bins.missing);
    }
    if bins.out_of_range > 0 {
        eprintln!(
            "  {} samples fell outside [{}, {})",
            bins.out_of_range,
            bins.edges[0],
            bins.edges[bins.edges.len() - 1]
        );
    }
    let empty = bins.counts.iter().filter(|&&c| c == 0).count();
    if empty > 0 {
        eprintln!("  {empty} of {} bins are empty", bins.len());
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

    #[test]
    fn test_run_writes_bins_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("samples.json");
        let output = dir.path().join("bins.json");
        fs::write(
            &input,
            r#"{"x": [0.9, 1.1, null, 3.0], "y": [1.0, 3.0, 5.0, 7.0]}"#,
        )
        .unwrap();

        let arg = BinXArg {
            input,
            centers: vec![1.0, 2.0, 3.0],
            output: Some(output.clone()),
        };
        run(&arg).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["edges"], serde_json::json!([0.5, 1.5, 2.5, 3.5]));
        assert_eq!(written["means"], serde_json::json!([2.0, null, 7.0]));
        assert_eq!(written["std_devs"], serde_json::json!([1.0, null, 0.0]));
        assert_eq!(written["counts"], serde_json::json!([2, 0, 1]));
        assert_eq!(written["missing"], 1);
        assert_eq!(written["out_of_range"], 0);
    }

    #[test]
    fn test_run_rejects_unsorted_centers() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("samples.json");
        fs::write(&input, r#"{"x": [1.0], "y": [1.0]}"#).unwrap();

        let arg = BinXArg {
            input,
            centers: vec![2.0, 1.0],
            output: Some(dir.path().join("bins.json")),
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }
}
