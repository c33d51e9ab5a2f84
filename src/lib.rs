// Seat map extraction: two airline seat-map XML documents in, one JSON document out

pub mod aggregator;
pub mod cabin_class;
pub mod document;
pub mod error;
pub mod seat_definition;
pub mod seat_map;

// Re-export key types for convenience
pub use aggregator::{ExtractionConfig, ParsedSeatData, SeatMapParser};
pub use cabin_class::{extract_cabin_classes, CabinClassRecord, CabinRowRecord, CabinSeatRecord};
pub use document::{read_xml, Document, DocumentOptions, Node};
pub use error::ProcessingError;
pub use seat_definition::{resolve_definitions, SeatDefinitions};
pub use seat_map::{extract_seat_maps, RowRecord, SeatDetail, SeatMapRecord};
