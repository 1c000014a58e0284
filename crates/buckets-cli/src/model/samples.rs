use serde::{Deserialize, Deserializer};

/// Paired samples read from a JSON input file.
///
/// ```json
/// { "x": [1.0, 2.0, null], "y": [10.0, 20.0, 30.0] }
/// ```
///
/// JSON has no NaN literal, so `null` elements are read as NaN.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SampleFile {
    #[serde(deserialize_with = "nullable_f64_vec")]
    pub x: Vec<f64>,
    #[serde(deserialize_with = "nullable_f64_vec")]
    pub y: Vec<f64>,
}

fn nullable_f64_vec<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}
