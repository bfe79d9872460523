use serde::Serialize;

use crate::models::{FountainMetadata, Line, Script};
use crate::parser::classifier::{classify_line, ClassifierState};
use crate::utils::fountain_constants::{FountainConstants, TITLE_PAGE_REGEX};
use crate::utils::is_blank_line;

/// 解码输出
#[derive(Debug, Clone, Serialize)]
pub struct DecodeOutput {
    /// 标题页元数据
    pub metadata: FountainMetadata,
    /// 正文行序列
    pub lines: Vec<Line>,
}

/// 校验报告
///
/// 非致命的建议性结果，是否阻止导入由调用方决定
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// 解码Fountain文本
///
/// 对任意输入都不会失败，最坏情况下全部归类为action
pub fn decode(text: &str) -> DecodeOutput {
    let raw_lines: Vec<&str> = text.lines().collect();
    let mut metadata = FountainMetadata::new();
    let body_start = parse_title_page(&raw_lines, &mut metadata);

    let mut state = ClassifierState::new();
    let mut lines = Vec::new();
    for i in body_start..raw_lines.len() {
        let next_has_content = raw_lines
            .get(i + 1)
            .map_or(false, |next| !is_blank_line(next));
        if let Some(classified) = classify_line(raw_lines[i], next_has_content, &mut state) {
            lines.push(Line::new(classified.line_type, &classified.text));
        }
    }

    DecodeOutput { metadata, lines }
}

/// 解码Fountain文本并折叠成剧本实体
///
/// title缺省为"Untitled"，notes折叠进logline
pub fn decode_to_script(text: &str) -> Script {
    let output = decode(text);
    let mut script = Script::new(output.metadata.title.as_deref().unwrap_or("Untitled"));
    script.author = output.metadata.author.clone();
    script.logline = output.metadata.notes.clone().unwrap_or_default();
    script.lines = output.lines;
    script
}

/// 校验Fountain文本
pub fn validate_fountain(text: &str) -> ValidationReport {
    if text.trim().is_empty() {
        ValidationReport {
            valid: false,
            errors: vec!["Document is empty".to_string()],
        }
    } else {
        ValidationReport {
            valid: true,
            errors: Vec::new(),
        }
    }
}

// 解析标题页，返回正文起始行号
//
// 首个非空行不是可识别的键值行时整体当作正文处理
fn parse_title_page(raw_lines: &[&str], metadata: &mut FountainMetadata) -> usize {
    let first_content = raw_lines.iter().position(|l| !is_blank_line(l));
    let start = match first_content {
        Some(idx) if TITLE_PAGE_REGEX.is_match(raw_lines[idx]) => idx,
        _ => return 0,
    };

    let mut i = start;
    while i < raw_lines.len() {
        let line = raw_lines[i];
        if is_blank_line(line) {
            i += 1;
            continue;
        }
        match TITLE_PAGE_REGEX.captures(line) {
            Some(caps) => {
                let key = FountainConstants::normalize_title_key(&caps[1]);
                let value = caps[2].trim();
                if !value.is_empty() {
                    set_metadata_field(metadata, &key, value);
                }
                i += 1;
            }
            // 首个不匹配的非空行即正文开头
            None => return i,
        }
    }
    raw_lines.len()
}

fn set_metadata_field(metadata: &mut FountainMetadata, key: &str, value: &str) {
    let value = value.to_string();
    match key {
        "title" => metadata.title = Some(value),
        "author" => metadata.author = Some(value),
        "credit" => metadata.credit = Some(value),
        "draft_date" => metadata.draft_date = Some(value),
        "contact" => metadata.contact = Some(value),
        "copyright" => metadata.copyright = Some(value),
        "notes" => metadata.notes = Some(value),
        _ => {}
    }
}
