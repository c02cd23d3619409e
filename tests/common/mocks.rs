//! Mock collaborators for test fixtures.
//!
//! Re-exports the mocks from `stepmatch::adapters::mock` and adds canned
//! content documents.

pub use stepmatch::adapters::mock::{InMemoryContent, RecordingAnnouncer, RecordingAudio};
pub use stepmatch::traits::{Announcer, AudioSink, ContentSource};

/// A valid three-step document using the English keys.
pub const WATER_CYCLE_JSON: &str = r#"{
    "title": "The Water Cycle",
    "steps": [
        { "name": "Evaporation", "description": "The sun heats water and it rises as vapour." },
        { "name": "Condensation", "description": "Vapour cools and forms clouds." },
        { "name": "Precipitation", "description": "Water falls back as rain or snow." }
    ]
}"#;

/// The same kind of document written with the Portuguese keys.
pub const PORTUGUESE_JSON: &str = r#"{
    "titulo": "Ciclo da Água",
    "etapas": [
        { "nome": "Evaporação", "descricao": "O sol aquece a água." },
        { "nome": "Condensação", "descricao": "O vapor forma nuvens." }
    ]
}"#;

/// Returns content sources paired with whether they should load.
#[allow(dead_code)]
pub fn canned_sources() -> Vec<(InMemoryContent, bool)> {
    vec![
        (InMemoryContent::new(WATER_CYCLE_JSON), true),
        (InMemoryContent::new(PORTUGUESE_JSON), true),
        (InMemoryContent::new(r#"{"title":"Empty","steps":[]}"#), false),
        (InMemoryContent::new("not json"), false),
        (InMemoryContent::failing("disk on fire"), false),
    ]
}
