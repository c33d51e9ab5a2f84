// Aggregation of both extraction pipelines into one JSON artifact

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::cabin_class::{extract_cabin_classes, CabinClassRecord};
use crate::document::{read_xml, Document, DocumentOptions};
use crate::error::ProcessingError;
use crate::seat_map::{extract_seat_maps, SeatMapRecord};

pub const DEFAULT_SEAT_MAP_PATH: &str = "seatmap2.xml";
pub const DEFAULT_CABIN_CLASS_PATH: &str = "seatmap1.xml";
pub const DEFAULT_OUTPUT_PATH: &str = "seat_map_parsed.json";
pub const DEFAULT_CABIN_CLASS_NAMESPACE: &str = "ns";

// Input documents, their loader options and the output location
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub seat_map_path: PathBuf,
    pub seat_map_options: DocumentOptions,
    pub cabin_class_path: PathBuf,
    pub cabin_class_options: DocumentOptions,
    pub output_path: PathBuf,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            seat_map_path: PathBuf::from(DEFAULT_SEAT_MAP_PATH),
            seat_map_options: DocumentOptions::default(),
            cabin_class_path: PathBuf::from(DEFAULT_CABIN_CLASS_PATH),
            cabin_class_options: DocumentOptions::with_namespace(DEFAULT_CABIN_CLASS_NAMESPACE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

// Combined output of both pipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSeatData {
    pub seat_maps: Vec<SeatMapRecord>,
    pub cabin_classes: Vec<CabinClassRecord>,
}

pub struct SeatMapParser {
    config: ExtractionConfig,
}

impl SeatMapParser {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    // Run both pipelines one after the other
    pub fn parse(&self) -> Result<ParsedSeatData, ProcessingError> {
        let seat_maps = load_seat_maps(&self.config)?;
        let cabin_classes = load_cabin_classes(&self.config)?;
        Ok(ParsedSeatData {
            seat_maps,
            cabin_classes,
        })
    }

    // Run both pipelines on blocking worker threads. The first failure is returned.
    pub async fn parse_concurrent(&self) -> Result<ParsedSeatData, ProcessingError> {
        let seat_map_config = self.config.clone();
        let cabin_class_config = self.config.clone();

        let seat_maps = tokio::task::spawn_blocking(move || load_seat_maps(&seat_map_config));
        let cabin_classes =
            tokio::task::spawn_blocking(move || load_cabin_classes(&cabin_class_config));

        let (seat_maps, cabin_classes) = tokio::try_join!(flatten(seat_maps), flatten(cabin_classes))?;
        Ok(ParsedSeatData {
            seat_maps,
            cabin_classes,
        })
    }

    pub fn to_json(&self, data: &ParsedSeatData) -> Result<String, ProcessingError> {
        serde_json::to_string_pretty(data)
            .map_err(|e| ProcessingError::JsonSerializeError(e.to_string()))
    }

    pub fn write_output(&self, data: &ParsedSeatData) -> Result<(), ProcessingError> {
        let json = self.to_json(data)?;
        std::fs::write(&self.config.output_path, json).map_err(|source| {
            ProcessingError::IoError {
                path: self.config.output_path.clone(),
                source,
            }
        })?;

        info!(
            path = %self.config.output_path.display(),
            seat_maps = data.seat_maps.len(),
            cabin_classes = data.cabin_classes.len(),
            "wrote parsed seat map data"
        );
        Ok(())
    }

    // Parse both documents and write the JSON artifact. Nothing is written on failure.
    pub async fn run(&self) -> Result<ParsedSeatData, ProcessingError> {
        let data = self.parse_concurrent().await.inspect_err(|e| {
            error!(error = %e, "seat map extraction failed");
        })?;
        self.write_output(&data)?;
        Ok(data)
    }
}

fn load_seat_maps(config: &ExtractionConfig) -> Result<Vec<SeatMapRecord>, ProcessingError> {
    let xml = read_xml(&config.seat_map_path)?;
    let doc = Document::parse(&xml, config.seat_map_options.clone())?;
    extract_seat_maps(&doc)
}

fn load_cabin_classes(config: &ExtractionConfig) -> Result<Vec<CabinClassRecord>, ProcessingError> {
    let xml = read_xml(&config.cabin_class_path)?;
    let doc = Document::parse(&xml, config.cabin_class_options.clone())?;
    extract_cabin_classes(&doc)
}

async fn flatten<T>(
    handle: tokio::task::JoinHandle<Result<T, ProcessingError>>,
) -> Result<T, ProcessingError> {
    match handle.await {
        Ok(result) => result,
        Err(e) => Err(ProcessingError::TaskFailed(e.to_string())),
    }
}
