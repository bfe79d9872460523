use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::line::{Line, LineType};

/// 剧本实体
///
/// 持久层的顶级记录，核心只读写 title / author / logline / lines 字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub id: Uuid,
    /// 标题
    pub title: String,
    /// 作者
    pub author: Option<String>,
    /// 一句话梗概
    pub logline: String,
    /// 正文行序列，顺序即阅读顺序
    pub lines: Vec<Line>,
    /// 关联角色id列表，弱引用
    pub character_ids: Vec<Uuid>,
    /// 关联地点id列表，弱引用
    pub location_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Script {
    /// 新建剧本，正文预置一个默认场景行
    pub fn new(title: &str) -> Self {
        let now = Utc::now();
        Script {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: None,
            logline: String::new(),
            lines: vec![Line::new(LineType::Scene, "")],
            character_ids: Vec::new(),
            location_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 按id查找行的位置
    pub fn line_index(&self, id: Uuid) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }
}

/// 角色实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    /// 角色名
    pub name: String,
    /// 角色描述
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Character {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 地点实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    /// 地点名
    pub name: String,
    /// 地点描述
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Location {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 笔记实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: Uuid,
    /// 笔记正文
    pub text: String,
    /// 可选关联剧本id，弱引用
    pub script_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteRecord {
    pub fn new(text: &str) -> Self {
        let now = Utc::now();
        NoteRecord {
            id: Uuid::new_v4(),
            text: text.to_string(),
            script_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
