use serde::{Deserialize, Serialize};

/// 标题页元数据
///
/// 解码器的临时输出，不单独持久化，创建剧本时折叠进Script字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FountainMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub credit: Option<String>,
    pub draft_date: Option<String>,
    pub contact: Option<String>,
    pub copyright: Option<String>,
    pub notes: Option<String>,
}

impl FountainMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标题页是否没有解析出任何字段
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.credit.is_none()
            && self.draft_date.is_none()
            && self.contact.is_none()
            && self.copyright.is_none()
            && self.notes.is_none()
    }
}
