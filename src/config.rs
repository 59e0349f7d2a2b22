use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::lexicon::loader;
use crate::sentiment::label::CONFIDENCE_THRESHOLD;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable has a default so `normalize` and `months` work out of the box.
pub struct Config {
    /// Directory holding the lexicon files and the entity catalog.
    pub data_dir: PathBuf,
    /// Path to the entity catalog (defaults to catalog.json in data_dir).
    pub catalog_path: PathBuf,
    /// Confidence below which predictions are labeled neutral.
    pub confidence_threshold: f64,
    /// Whether the pipeline stems tokens (ECOU_STEMMING=off disables).
    pub stemming: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let data_dir = env::var("ECOU_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let catalog_path = env::var("ECOU_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(crate::catalog::store::CATALOG_FILE));

        let confidence_threshold = match env::var("ECOU_CONFIDENCE") {
            Ok(raw) => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("ECOU_CONFIDENCE is not a number: {raw:?}"))?;
                if !(0.0..=1.0).contains(&value) {
                    anyhow::bail!("ECOU_CONFIDENCE must be in [0, 1], got {value}");
                }
                value
            }
            Err(_) => CONFIDENCE_THRESHOLD,
        };

        let stemming = !matches!(
            env::var("ECOU_STEMMING").as_deref(),
            Ok("off") | Ok("false") | Ok("0")
        );

        Ok(Self {
            data_dir,
            catalog_path,
            confidence_threshold,
            stemming,
        })
    }

    /// Check that the lexicon files are where we expect them.
    /// Call this before any operation that runs the normalizer.
    pub fn require_lexicon(&self) -> Result<()> {
        let missing: Vec<&str> = [
            loader::STOP_WORDS_FILE,
            loader::ABBREVIATIONS_FILE,
            loader::EMOJI_FILE,
            loader::CITIES_FILE,
            loader::COMPANIES_FILE,
            loader::MULTI_VOWEL_WORDS_FILE,
        ]
        .into_iter()
        .filter(|file| !self.data_dir.join(file).exists())
        .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "Lexicon files missing from {}: {}\n\
                 Set ECOU_DATA_DIR to the directory holding them.",
                self.data_dir.display(),
                missing.join(", ")
            );
        }
        Ok(())
    }

    /// Check that the entity catalog exists.
    /// Call this before any operation that resolves entity names.
    pub fn require_catalog(&self) -> Result<()> {
        if !self.catalog_path.exists() {
            anyhow::bail!(
                "Entity catalog not found at {}\n\
                 Set ECOU_CATALOG or add catalog.json to the data directory.",
                self.catalog_path.display()
            );
        }
        Ok(())
    }
}
