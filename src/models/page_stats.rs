use serde::{Deserialize, Serialize};

/// 页数统计
///
/// 由布局估算器计算得出，不持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStats {
    /// 估算页数，保留一位小数；有内容时最小为1，空文档为0
    pub page_count: f64,
    /// 估算时长（分钟），约定1页≈1分钟
    pub estimated_minutes: u32,
    /// 行数
    pub line_count: usize,
    /// 词数（按空白分词累计）
    pub word_count: usize,
}

impl PageStats {
    pub fn empty() -> Self {
        PageStats {
            page_count: 0.0,
            estimated_minutes: 0,
            line_count: 0,
            word_count: 0,
        }
    }
}

impl Default for PageStats {
    fn default() -> Self {
        Self::empty()
    }
}
