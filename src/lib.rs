pub mod models;
pub mod utils;
pub mod parser;
pub mod encoder;
pub mod layout;
pub mod store;
pub mod api;

pub use models::{
    Line,
    LineType,
    Script,
    Character,
    Location,
    NoteRecord,
    FountainMetadata,
    PageStats
};

pub use parser::{
    decode,
    decode_to_script,
    validate_fountain,
    ClassifierState,
    DecodeOutput,
    ValidationReport
};

pub use encoder::{
    encode,
    encode_body
};

pub use layout::{
    calculate_page_stats,
    format_page_count,
    format_runtime,
    line_weight,
    page_breaks,
    scene_index,
    ElementConfig,
    PrintProfile,
    ScenePosition
};

pub use store::{
    MemoryStore,
    MemoryTable,
    Record,
    StoreError,
    StoreResult
};

pub use api::{
    parse_fountain_text,
    validate_fountain_text,
    export_fountain_text,
    script_statistics
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 解码结果对象
pub fn parse(script: &str) -> DecodeOutput {
    decode(script)
}
