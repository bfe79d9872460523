pub mod classifier;
pub mod fountain_decoder;

pub use classifier::{
    classify_line,
    is_character_cue,
    is_natural_scene_heading,
    is_natural_transition,
    ClassifiedLine,
    ClassifierState
};
pub use fountain_decoder::{
    decode,
    decode_to_script,
    validate_fountain,
    DecodeOutput,
    ValidationReport
};
