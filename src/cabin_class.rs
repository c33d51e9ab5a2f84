// Cabin class extraction: CabinClass -> RowInfo -> SeatInfo layout data with
// optional seat fees. Everything below CabinClass is looked up with the
// document's namespace prefix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{Document, Node};
use crate::error::ProcessingError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinClassRecord {
    #[serde(rename = "Layout")]
    pub layout: Option<String>,
    #[serde(rename = "UpperDeckInd")]
    pub upper_deck_indicator: Option<String>,
    #[serde(rename = "Row")]
    pub rows: Vec<CabinRowRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinRowRecord {
    #[serde(rename = "CabinType")]
    pub cabin_type: Option<String>,
    #[serde(rename = "seat")]
    pub seats: Vec<CabinSeatRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinSeatRecord {
    #[serde(rename = "BlockedInd")]
    pub blocked: Option<String>,
    #[serde(rename = "BulkheadInd")]
    pub bulkhead: Option<String>,
    #[serde(rename = "ColumnNumber")]
    pub column_number: Option<String>,
    #[serde(rename = "PlaneSection")]
    pub plane_section: Option<String>,
    #[serde(rename = "AvailableInd")]
    pub available_indicator: String,
    #[serde(rename = "SeatNumber")]
    pub seat_number: String,
    #[serde(rename = "Amount")]
    pub fee_amount: Option<String>,
    #[serde(rename = "Currency")]
    pub fee_currency: Option<String>,
}

pub fn extract_cabin_classes(doc: &Document<'_>) -> Result<Vec<CabinClassRecord>, ProcessingError> {
    let cabin_classes = doc
        .find_all("CabinClass")
        .map(cabin_class_record)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(cabin_classes = cabin_classes.len(), "extracted cabin classes");
    Ok(cabin_classes)
}

fn cabin_class_record(cabin_class: Node<'_, '_>) -> Result<CabinClassRecord, ProcessingError> {
    let rows = cabin_class
        .find_all_qualified("RowInfo")
        .map(cabin_row_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CabinClassRecord {
        layout: owned_attr(cabin_class, "Layout"),
        upper_deck_indicator: owned_attr(cabin_class, "UpperDeckInd"),
        rows,
    })
}

fn cabin_row_record(row: Node<'_, '_>) -> Result<CabinRowRecord, ProcessingError> {
    let seats = row
        .find_all_qualified("SeatInfo")
        .map(cabin_seat_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CabinRowRecord {
        cabin_type: owned_attr(row, "CabinType"),
        seats,
    })
}

fn cabin_seat_record(seat: Node<'_, '_>) -> Result<CabinSeatRecord, ProcessingError> {
    let summary = seat.require_qualified("Summary")?;

    let (fee_amount, fee_currency) = match seat.find_qualified("Service") {
        Some(service) => {
            let fee = service.require_qualified("Fee")?;
            (
                Some(fee.required_attribute("Amount")?.to_string()),
                Some(fee.required_attribute("CurrencyCode")?.to_string()),
            )
        }
        None => (None, None),
    };

    Ok(CabinSeatRecord {
        blocked: owned_attr(seat, "BlockedInd"),
        bulkhead: owned_attr(seat, "BulkheadInd"),
        column_number: owned_attr(seat, "ColumnNumber"),
        plane_section: owned_attr(seat, "PlaneSection"),
        available_indicator: summary.required_attribute("AvailableInd")?.to_string(),
        seat_number: summary.required_attribute("SeatNumber")?.to_string(),
        fee_amount,
        fee_currency,
    })
}

fn owned_attr(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}
