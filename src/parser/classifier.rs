use crate::models::LineType;
use crate::utils::fountain_constants::{FountainConstants, ELEMENT_REGEX};
use crate::utils::is_blank_line;

/// 分类器状态
///
/// 单次解码过程中逐行显式传递，不跨调用保留
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    /// 是否处于对话块内（自上一个角色行起，尚未被空行或非对话元素终止）
    pub in_dialogue_block: bool,
    /// 上一行是否恰为角色行
    pub just_saw_character_line: bool,
}

impl ClassifierState {
    pub fn new() -> Self {
        Self::default()
    }

    // 空行终止对话块
    pub fn reset(&mut self) {
        self.in_dialogue_block = false;
        self.just_saw_character_line = false;
    }
}

/// 分类结果：行类型与去掉强制前缀后的存储文本
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub line_type: LineType,
    pub text: String,
}

/// 判断文本是否为角色行形态
///
/// 全大写字母/数字/空格，首字符为大写字母，可带尾部括号扩展
pub fn is_character_cue(s: &str) -> bool {
    ELEMENT_REGEX["character"].is_match(s)
}

/// 判断文本是否为自然转场
pub fn is_natural_transition(s: &str) -> bool {
    ELEMENT_REGEX["transition"].is_match(s)
        || FountainConstants::transition_phrases().iter().any(|p| *p == s)
}

/// 判断文本是否为自然场景标题
pub fn is_natural_scene_heading(s: &str) -> bool {
    ELEMENT_REGEX["scene_heading"].is_match(s)
}

/// 对单行文本分类
///
/// 规则按声明顺序先到先得；`next_line_has_content` 是解码器提供的
/// 一行前瞻（角色行后面必须跟内容才成立）。空白行返回 None 并重置状态。
pub fn classify_line(
    raw: &str,
    next_line_has_content: bool,
    state: &mut ClassifierState,
) -> Option<ClassifiedLine> {
    if is_blank_line(raw) {
        state.reset();
        return None;
    }
    let s = raw.trim();

    // 1. 强制场景：单个.开头（..不算）
    if s.starts_with('.') && !s.starts_with("..") {
        return Some(commit(state, LineType::Scene, s[1..].trim()));
    }

    // 2. 强制角色
    if let Some(rest) = s.strip_prefix('@') {
        return Some(commit(state, LineType::Character, rest.trim()));
    }

    // 3. 强制转场
    if let Some(rest) = s.strip_prefix('>') {
        return Some(commit(state, LineType::Transition, rest.trim()));
    }

    // 4. 强制动作
    if let Some(rest) = s.strip_prefix('!') {
        return Some(commit(state, LineType::Action, rest.trim()));
    }

    // 5. 自然场景标题，去掉尾部 #...# 场景编号
    if is_natural_scene_heading(s) {
        let text = ELEMENT_REGEX["scene_number"].replace(s, "");
        return Some(commit(state, LineType::Scene, text.trim()));
    }

    // 6. 括号提示：角色行之后（直接或在延续的对话块里）且整行被括号包裹
    if (state.in_dialogue_block || state.just_saw_character_line)
        && ELEMENT_REGEX["parenthetical"].is_match(s)
    {
        return Some(commit(state, LineType::Parenthetical, s));
    }

    // 7. 对话块延续，但本行自身不能是角色行形态
    if state.in_dialogue_block && !is_character_cue(s) {
        return Some(commit(state, LineType::Dialogue, s));
    }

    // 8. 自然转场
    if is_natural_transition(s) {
        return Some(commit(state, LineType::Transition, s));
    }

    // 9. 角色行：全大写且不在对话块内，后面必须还有内容
    if !state.in_dialogue_block && is_character_cue(s) && next_line_has_content {
        return Some(commit(state, LineType::Character, s));
    }

    // 10. 默认动作
    Some(commit(state, LineType::Action, s))
}

// 按行类型更新状态并产出分类结果
fn commit(state: &mut ClassifierState, line_type: LineType, text: &str) -> ClassifiedLine {
    match line_type {
        LineType::Character => {
            state.in_dialogue_block = true;
            state.just_saw_character_line = true;
        }
        // 只有紧跟角色行的那一行才可能是括号提示
        LineType::Dialogue | LineType::Parenthetical => {
            state.just_saw_character_line = false;
        }
        _ => {
            state.in_dialogue_block = false;
            state.just_saw_character_line = false;
        }
    }
    ClassifiedLine {
        line_type,
        text: text.to_string(),
    }
}
