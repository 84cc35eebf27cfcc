use crate::io::{read_json_file, JsonIoError};
use crate::rectify::RectifyOptions;
use crate::types::Pt2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input of the `aspect_batch` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Image `[width, height]`; its centre is the fallback principal point.
    #[serde(default)]
    pub image_size: Option<[f64; 2]>,
    #[serde(default)]
    pub principal_point: Option<[f64; 2]>,
    #[serde(default)]
    pub options: RectifyOptions,
    pub quads: Vec<QuadEntry>,
    pub output: BatchOutputConfig,
}

impl BatchConfig {
    /// Explicit principal point, else the image centre, else the origin.
    pub fn resolve_principal_point(&self) -> Pt2 {
        match (self.principal_point, self.image_size) {
            (Some([x, y]), _) => Pt2::new(x, y),
            (None, Some([w, h])) => Pt2::new(w / 2.0, h / 2.0),
            (None, None) => Pt2::origin(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuadEntry {
    #[serde(default)]
    pub label: Option<String>,
    /// Corner list; anything but four entries is reported as invalid input.
    pub corners: Vec<[f64; 2]>,
}

impl QuadEntry {
    pub fn points(&self) -> Vec<Pt2> {
        self.corners.iter().map(|&[x, y]| Pt2::new(x, y)).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutputConfig {
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BatchConfig, JsonIoError> {
    read_json_file(path)
}
