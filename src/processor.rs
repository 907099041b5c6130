use std::path::{Path, PathBuf};

use log::info;

use crate::csv_utils::load_payments;
use crate::template::payment_methods_template;
use crate::types::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Accepts `<something>.csv`, matching case-sensitively.
pub fn is_csv(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.len() > ".csv".len() && name.ends_with(".csv")
}

/// Appends the output extension: `rates.csv` becomes `rates.csv.html`.
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

pub async fn read_text_file(path: &Path) -> Result<String, Error> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::FileRead {
            path: path.to_owned(),
            source,
        })
}

pub async fn write_text_file(path: &Path, data: &str) -> Result<(), Error> {
    tokio::fs::write(path, data)
        .await
        .map_err(|source| Error::FileWrite {
            path: path.to_owned(),
            source,
        })
}

#[derive(Debug, Default)]
pub struct Processor {
    format: OutputFormat,
}

impl Processor {
    pub fn new(format: OutputFormat) -> Processor {
        Processor { format }
    }

    pub fn convert(&self, text: &str) -> Result<String, Error> {
        let payments = load_payments(text)?;
        match self.format {
            OutputFormat::Html => Ok(payment_methods_template(&payments)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&payments)?),
        }
    }

    /// Converts one file and returns the path written.
    pub async fn process_file(&self, path: &Path) -> Result<PathBuf, Error> {
        if !is_csv(path) {
            return Err(Error::UnsupportedExtension(path.to_owned()));
        }

        let text = read_text_file(path).await?;
        let out = self.convert(&text)?;
        let out_path = output_path(path, self.format);
        write_text_file(&out_path, &out).await?;
        info!("{} -> {}", path.display(), out_path.display());
        Ok(out_path)
    }

    /// Processes files one after another, stopping at the first error.
    pub async fn process_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
        let mut written = Vec::with_capacity(paths.len());
        for path in paths {
            written.push(self.process_file(path).await?);
        }
        Ok(written)
    }
}
