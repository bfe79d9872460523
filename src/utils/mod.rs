pub mod fountain_constants;

pub use fountain_constants::FountainConstants;

/// 检查一行文本是否为空行
///
/// 只包含空白字符的行视为空行，空行是块分隔信息，不进入行模型
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}
