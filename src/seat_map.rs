// Seat map extraction: SeatMap -> Row -> Seat, with availability codes
// resolved through the document's seat definitions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{Document, Node};
use crate::error::ProcessingError;
use crate::seat_definition::{resolve_definitions, SeatDefinitions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatMapRecord {
    #[serde(rename = "SegmentRef")]
    pub segment_reference: String,
    #[serde(rename = "Row")]
    pub rows: Vec<RowRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    #[serde(rename = "Number")]
    pub number: String,
    // Only one seat per row is kept; later seats in the row replace earlier ones.
    #[serde(rename = "Seat")]
    pub seat: SeatDetail,
}

// All fields are None when the row has no seats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeatDetail {
    pub column: Option<String>,
    pub offer_item_refs: Option<String>,
    pub availability: Option<Vec<String>>,
}

pub fn extract_seat_maps(doc: &Document<'_>) -> Result<Vec<SeatMapRecord>, ProcessingError> {
    let definitions = resolve_definitions(doc)?;

    let seat_maps = doc
        .find_all("SeatMap")
        .map(|seat_map| seat_map_record(seat_map, &definitions))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(seat_maps = seat_maps.len(), "extracted seat maps");
    Ok(seat_maps)
}

fn seat_map_record(
    seat_map: Node<'_, '_>,
    definitions: &SeatDefinitions,
) -> Result<SeatMapRecord, ProcessingError> {
    let segment_reference = seat_map.require("SegmentRef")?.text();

    let rows = seat_map
        .find_all("Row")
        .map(|row| row_record(row, definitions))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeatMapRecord {
        segment_reference,
        rows,
    })
}

fn row_record(row: Node<'_, '_>, definitions: &SeatDefinitions) -> Result<RowRecord, ProcessingError> {
    let number = row.require("Number")?.text();

    let mut seat = SeatDetail::default();
    for seat_node in row.find_all("Seat") {
        seat = seat_detail(seat_node, definitions)?;
    }

    Ok(RowRecord { number, seat })
}

fn seat_detail(seat: Node<'_, '_>, definitions: &SeatDefinitions) -> Result<SeatDetail, ProcessingError> {
    let column = seat.require("Column")?.text();
    let offer_item_refs = seat.find("OfferItemRefs").map(|refs| refs.text());

    let availability = seat
        .find_all("SeatDefinitionRef")
        .map(|reference| definitions.resolve(&reference.text()).map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeatDetail {
        column: Some(column),
        offer_item_refs,
        availability: Some(availability),
    })
}
