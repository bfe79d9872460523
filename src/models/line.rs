use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 剧本行类型
///
/// 六种元素类型构成剧本正文的封闭语法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// 场景标题
    Scene,
    /// 动作描述
    Action,
    /// 角色名
    Character,
    /// 括号内的表演提示
    Parenthetical,
    /// 对白
    Dialogue,
    /// 转场
    Transition,
}

impl LineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Scene => "scene",
            LineType::Action => "action",
            LineType::Character => "character",
            LineType::Parenthetical => "parenthetical",
            LineType::Dialogue => "dialogue",
            LineType::Transition => "transition",
        }
    }

    /// 编辑器里手动循环切换类型的顺序
    pub fn cycled(&self) -> LineType {
        match self {
            LineType::Scene => LineType::Action,
            LineType::Action => LineType::Character,
            LineType::Character => LineType::Parenthetical,
            LineType::Parenthetical => LineType::Dialogue,
            LineType::Dialogue => LineType::Transition,
            LineType::Transition => LineType::Scene,
        }
    }
}

/// 剧本行，文档的原子元素
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// 唯一标识，创建时分配，编辑期间不变，永不复用
    pub id: Uuid,
    /// 原始文本内容，可为空
    pub text: String,
    /// 行类型，可因重新分类或手动切换而改变
    pub line_type: LineType,
    /// 关联角色id（仅character/dialogue行有效），弱引用不拥有
    pub character_id: Option<Uuid>,
    /// 自由注释
    pub notes: Option<String>,
}

impl Line {
    pub fn new(line_type: LineType, text: &str) -> Self {
        Line {
            id: Uuid::new_v4(),
            text: text.to_string(),
            line_type,
            character_id: None,
            notes: None,
        }
    }

    // 检查行类型是否匹配
    pub fn is_type(&self, types: &[LineType]) -> bool {
        types.contains(&self.line_type)
    }

    // 当前行文本的词数（按空白分词）
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
