use chrono::Local;

use crate::models::{Line, LineType, Script};
use crate::parser::classifier::{is_character_cue, is_natural_scene_heading, is_natural_transition};

/// 把剧本编码成Fountain文本
///
/// 先输出标题页，再按元素间距规则输出正文。
/// 输出不保证与解码前的原文逐字节一致（强制前缀与空行间距是有损的）
pub fn encode(script: &Script) -> String {
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", script.title));
    if let Some(author) = &script.author {
        out.push_str(&format!("Author: {}\n", author));
    }
    out.push_str(&format!("Draft date: {}\n", Local::now().format("%Y-%m-%d")));
    if !script.logline.is_empty() {
        out.push_str(&format!("Notes: {}\n", script.logline));
    }
    out.push('\n');

    out.push_str(&encode_body(&script.lines));
    out
}

/// 编码正文行序列
pub fn encode_body(lines: &[Line]) -> String {
    let mut out = String::new();
    let mut last_type: Option<LineType> = None;

    for line in lines {
        if let Some(prev) = last_type {
            if needs_separator(prev, line.line_type) {
                out.push('\n');
            }
        }
        out.push_str(&render_line(line));
        out.push('\n');
        last_type = Some(line.line_type);
    }

    out
}

// 元素之间是否需要空行分隔
fn needs_separator(prev: LineType, curr: LineType) -> bool {
    curr == LineType::Scene
        || prev == LineType::Scene
        || (curr == LineType::Character && prev != LineType::Character)
        || (prev == LineType::Dialogue
            && curr != LineType::Dialogue
            && curr != LineType::Parenthetical)
        || curr == LineType::Transition
        || prev == LineType::Transition
}

// 按行类型做输出变换
fn render_line(line: &Line) -> String {
    match line.line_type {
        LineType::Scene => {
            let upper = line.text.to_uppercase();
            if is_natural_scene_heading(upper.trim()) {
                upper
            } else {
                // 不符合自然场景形态时用.强制
                format!(".{}", upper)
            }
        }
        LineType::Character => line.text.to_uppercase(),
        LineType::Parenthetical => {
            let text = line.text.as_str();
            if text.starts_with('(') && text.ends_with(')') {
                text.to_string()
            } else {
                // 整体包一层新括号，不截断原字符
                format!("({})", text)
            }
        }
        LineType::Dialogue => line.text.clone(),
        LineType::Transition => {
            let upper = line.text.to_uppercase();
            if is_natural_transition(upper.trim()) {
                upper
            } else {
                format!(">{}", line.text)
            }
        }
        LineType::Action => {
            if action_needs_force(&line.text) {
                format!("!{}", line.text)
            } else {
                line.text.clone()
            }
        }
    }
}

// 动作文本重新解码时是否会被误判，需要用!保护
fn action_needs_force(text: &str) -> bool {
    let s = text.trim();
    (s.starts_with('.') && !s.starts_with(".."))
        || s.starts_with('@')
        || s.starts_with('>')
        || s.starts_with('!')
        || is_natural_scene_heading(s)
        || is_character_cue(s)
        || is_natural_transition(s)
}
