/// Roadmap document, relative to the asset root
pub const ROADMAP_DOCUMENT_PATH: &str = "roadmap/data.json";

/// Diagram image references in the document are resolved against this directory
pub const DIAGRAM_DIRECTORY: &str = "roadmap";
