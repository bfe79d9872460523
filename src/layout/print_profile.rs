use serde::{Deserialize, Serialize};

use crate::models::LineType;

/// 元素排版配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementConfig {
    /// 左缩进 //磅
    pub feed_left: f32,
    /// 右缩进 //磅
    pub feed_right: f32,
    /// 是否转大写
    pub uppercase: bool,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            feed_left: 0.0,
            feed_right: 0.0,
            uppercase: false,
        }
    }
}

/// 固定排版配置
///
/// 外部PDF渲染器消费的版面表，单位为磅（72磅=1英寸）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintProfile {
    /// 页面宽度 //磅
    pub page_width: f32,
    /// 页面高度 //磅
    pub page_height: f32,
    /// 上边距
    pub top_margin: f32,
    /// 下边距
    pub bottom_margin: f32,
    /// 左边距
    pub left_margin: f32,
    /// 右边距
    pub right_margin: f32,
    /// 字体名称
    pub font_family: String,
    /// 字体大小 //磅
    pub font_size: f32,
    /// 单行行高 //磅
    pub line_height: f32,
    /// 场景标题配置
    pub scene: ElementConfig,
    /// 动作配置
    pub action: ElementConfig,
    /// 角色配置
    pub character: ElementConfig,
    /// 括号提示配置
    pub parenthetical: ElementConfig,
    /// 对白配置
    pub dialogue: ElementConfig,
    /// 转场配置
    pub transition: ElementConfig,
}

impl Default for PrintProfile {
    fn default() -> Self {
        Self {
            // 基于US Letter配置
            page_width: 612.0,
            page_height: 792.0,
            top_margin: 72.0,
            bottom_margin: 72.0,
            left_margin: 108.0,
            right_margin: 72.0,
            font_family: "Courier".to_string(),
            font_size: 12.0,
            line_height: 12.0,
            scene: ElementConfig {
                feed_left: 0.0,
                feed_right: 0.0,
                uppercase: true,
            },
            action: ElementConfig {
                feed_left: 0.0,
                feed_right: 0.0,
                uppercase: false,
            },
            character: ElementConfig {
                feed_left: 168.0,
                feed_right: 0.0,
                uppercase: true,
            },
            parenthetical: ElementConfig {
                feed_left: 120.0,
                feed_right: 144.0,
                uppercase: false,
            },
            dialogue: ElementConfig {
                feed_left: 72.0,
                feed_right: 144.0,
                uppercase: false,
            },
            transition: ElementConfig {
                feed_left: 288.0,
                feed_right: 0.0,
                uppercase: true,
            },
        }
    }
}

impl PrintProfile {
    /// 取行类型对应的元素配置
    pub fn element(&self, line_type: LineType) -> &ElementConfig {
        match line_type {
            LineType::Scene => &self.scene,
            LineType::Action => &self.action,
            LineType::Character => &self.character,
            LineType::Parenthetical => &self.parenthetical,
            LineType::Dialogue => &self.dialogue,
            LineType::Transition => &self.transition,
        }
    }

    /// 元素可用列宽 //磅
    pub fn content_width(&self, line_type: LineType) -> f32 {
        let element = self.element(line_type);
        self.page_width
            - self.left_margin
            - self.right_margin
            - element.feed_left
            - element.feed_right
    }

    /// 元素之后的垂直间距 //磅
    ///
    /// 场景与转场后空两行，动作后空一行；对白后面若紧跟
    /// 对白或括号提示则不空行，角色与括号提示后不空行
    pub fn spacing_after(&self, current: LineType, next: Option<LineType>) -> f32 {
        match current {
            LineType::Scene | LineType::Transition => self.line_height * 2.0,
            LineType::Action => self.line_height,
            LineType::Dialogue => match next {
                Some(LineType::Dialogue) | Some(LineType::Parenthetical) => 0.0,
                _ => self.line_height,
            },
            LineType::Character | LineType::Parenthetical => 0.0,
        }
    }
}
