use std::collections::HashMap;

use tracing::debug;

use crate::document::Document;
use crate::error::ProcessingError;

pub const SEAT_DEFINITION_ID_ATTR: &str = "SeatDefinitionID";

// Seat definition identifier -> availability text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatDefinitions {
    entries: HashMap<String, String>,
}

impl SeatDefinitions {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn resolve(&self, id: &str) -> Result<&str, ProcessingError> {
        self.get(id)
            .ok_or_else(|| ProcessingError::UnresolvedSeatDefinition(id.to_string()))
    }
}

// Collect every SeatDefinition in the document. A later definition with the
// same identifier replaces an earlier one.
pub fn resolve_definitions(doc: &Document<'_>) -> Result<SeatDefinitions, ProcessingError> {
    let mut entries = HashMap::new();

    for definition in doc.find_all("SeatDefinition") {
        let id = definition.required_attribute(SEAT_DEFINITION_ID_ATTR)?;
        let text = definition.require("Text")?.text();
        entries.insert(id.to_string(), text);
    }

    debug!(definitions = entries.len(), "resolved seat definitions");
    Ok(SeatDefinitions { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentOptions;

    fn parse(xml: &str) -> Document<'_> {
        Document::parse(xml, DocumentOptions::default()).unwrap()
    }

    #[test]
    fn test_every_definition_is_mapped() {
        let doc = parse(
            r#"<Response>
                <DataLists>
                  <SeatDefinitionList>
                    <SeatDefinition SeatDefinitionID="SD1"><Description><Text>Occupied</Text></Description></SeatDefinition>
                    <SeatDefinition SeatDefinitionID="SD2"><Description><Text>Preferred</Text></Description></SeatDefinition>
                    <SeatDefinition SeatDefinitionID="SD3"><Description><Text>Window</Text></Description></SeatDefinition>
                  </SeatDefinitionList>
                </DataLists>
              </Response>"#,
        );

        let definitions = resolve_definitions(&doc).unwrap();
        assert_eq!(definitions.len(), 3);
        assert_eq!(definitions.get("SD1"), Some("Occupied"));
        assert_eq!(definitions.get("SD2"), Some("Preferred"));
        assert_eq!(definitions.get("SD3"), Some("Window"));
    }

    #[test]
    fn test_no_definitions() {
        let doc = parse("<Response><SeatMap/></Response>");
        let definitions = resolve_definitions(&doc).unwrap();
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_last_wins() {
        let doc = parse(
            r#"<List>
                <SeatDefinition SeatDefinitionID="SD1"><Text>First</Text></SeatDefinition>
                <SeatDefinition SeatDefinitionID="SD1"><Text>Second</Text></SeatDefinition>
              </List>"#,
        );

        let definitions = resolve_definitions(&doc).unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions.get("SD1"), Some("Second"));
    }

    #[test]
    fn test_missing_text_is_an_error() {
        let doc = parse(r#"<List><SeatDefinition SeatDefinitionID="SD1"/></List>"#);
        let result = resolve_definitions(&doc);
        assert!(matches!(
            result,
            Err(ProcessingError::MissingRequiredField { ref element, .. }) if element == "Text"
        ));
    }

    #[test]
    fn test_missing_identifier_is_an_error() {
        let doc = parse("<List><SeatDefinition><Text>Orphan</Text></SeatDefinition></List>");
        let result = resolve_definitions(&doc);
        assert!(matches!(
            result,
            Err(ProcessingError::MissingRequiredAttribute { ref attribute, .. })
                if attribute == SEAT_DEFINITION_ID_ATTR
        ));
    }

    #[test]
    fn test_resolve_unknown_identifier() {
        let doc = parse(r#"<List><SeatDefinition SeatDefinitionID="9A"><Text>Window seat</Text></SeatDefinition></List>"#);
        let definitions = resolve_definitions(&doc).unwrap();

        assert_eq!(definitions.resolve("9A").unwrap(), "Window seat");
        assert!(matches!(
            definitions.resolve("ZZ"),
            Err(ProcessingError::UnresolvedSeatDefinition(ref id)) if id == "ZZ"
        ));
    }
}
