use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::{Line, LineType, PageStats};

/// 每页虚拟行数
pub const LINES_PER_PAGE: f64 = 55.0;

// 折行宽度（字符格）
const ACTION_WRAP_WIDTH: usize = 60;
const DIALOGUE_WRAP_WIDTH: usize = 35;

/// 场景在文档与分页中的位置
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePosition {
    /// 所在行下标
    pub line_index: usize,
    /// 场景标题文本
    pub text: String,
    /// 所在页码，1起
    pub page: usize,
}

/// 行类型的基础权重（虚拟行单位）
///
/// 唯一的权重表：编辑器导航与PDF导出都从这里取值，保证页码一致
pub fn base_weight(line_type: LineType) -> f64 {
    match line_type {
        LineType::Scene => 2.0,
        LineType::Action => 1.0,
        LineType::Character => 1.5,
        LineType::Parenthetical => 0.5,
        LineType::Dialogue => 0.8,
        LineType::Transition => 1.5,
    }
}

/// 单行的加权虚拟行数，action与dialogue按文本长度做折行修正
pub fn line_weight(line: &Line) -> f64 {
    let weight = base_weight(line.line_type);
    match line.line_type {
        LineType::Action => weight * wrap_factor(&line.text, ACTION_WRAP_WIDTH),
        LineType::Dialogue => weight * wrap_factor(&line.text, DIALOGUE_WRAP_WIDTH),
        _ => weight,
    }
}

// 折行系数：ceil(长度/宽度)，最小1，长度按grapheme计
fn wrap_factor(text: &str, width: usize) -> f64 {
    let len = text.graphemes(true).count();
    let rows = (len + width - 1) / width;
    rows.max(1) as f64
}

/// 计算页数统计
pub fn calculate_page_stats(lines: &[Line]) -> PageStats {
    if lines.is_empty() {
        return PageStats::empty();
    }

    let total: f64 = lines.iter().map(line_weight).sum();
    let mut page_count = (total / LINES_PER_PAGE * 10.0).round() / 10.0;
    if page_count < 1.0 {
        page_count = 1.0;
    }

    PageStats {
        page_count,
        estimated_minutes: page_count.round() as u32,
        line_count: lines.len(),
        word_count: lines.iter().map(|l| l.word_count()).sum(),
    }
}

/// 分页断点下标列表
///
/// 加权累计达到每页行数时记下当前行下标并清零累计值
pub fn page_breaks(lines: &[Line]) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut acc = 0.0;
    for (i, line) in lines.iter().enumerate() {
        acc += line_weight(line);
        if acc >= LINES_PER_PAGE {
            breaks.push(i);
            acc = 0.0;
        }
    }
    breaks
}

/// 场景索引
///
/// 取所有非空场景行，标注其所在页码，与 page_breaks 用同一趟扫描规则
pub fn scene_index(lines: &[Line]) -> Vec<ScenePosition> {
    let mut scenes = Vec::new();
    let mut acc = 0.0;
    let mut page = 1usize;
    for (i, line) in lines.iter().enumerate() {
        if line.line_type == LineType::Scene && !line.text.trim().is_empty() {
            scenes.push(ScenePosition {
                line_index: i,
                text: line.text.clone(),
                page,
            });
        }
        acc += line_weight(line);
        if acc >= LINES_PER_PAGE {
            page += 1;
            acc = 0.0;
        }
    }
    scenes
}

/// 页数的显示文本
pub fn format_page_count(stats: &PageStats) -> String {
    if stats.page_count == 1.0 {
        "1 page".to_string()
    } else {
        format!("{} pages", stats.page_count)
    }
}

/// 时长的显示文本
pub fn format_runtime(minutes: u32) -> String {
    if minutes == 0 {
        return "0 min".to_string();
    }
    if minutes < 60 {
        return format!("~{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("~{}h", hours)
    } else {
        format!("~{}h {}m", hours, rest)
    }
}
