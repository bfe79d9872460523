//! 嵌入端API
//!
//! 这个模块提供了编辑器UI可以调用的API接口

use serde::Serialize;

use crate::encoder::encode;
use crate::layout::{calculate_page_stats, scene_index, ScenePosition};
use crate::models::{PageStats, Script};
use crate::parser::{decode, validate_fountain};

/// 统计结果
#[derive(Debug, Clone, Serialize)]
pub struct ScriptStatistics {
    pub stats: PageStats,
    pub scenes: Vec<ScenePosition>,
}

/// 解析Fountain文本，返回JSON格式结果
pub fn parse_fountain_text(text: &str) -> String {
    let result = decode(text);
    serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
}

/// 校验Fountain文本，返回JSON格式结果
pub fn validate_fountain_text(text: &str) -> String {
    let report = validate_fountain(text);
    serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
}

/// 导出剧本为Fountain文本
pub fn export_fountain_text(script: &Script) -> String {
    encode(script)
}

/// 剧本统计信息，返回JSON格式结果
pub fn script_statistics(script: &Script) -> String {
    let statistics = ScriptStatistics {
        stats: calculate_page_stats(&script.lines),
        scenes: scene_index(&script.lines),
    };
    serde_json::to_string(&statistics).unwrap_or_else(|_| "{}".to_string())
}
