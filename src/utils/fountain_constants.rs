use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 自然转场短语表（不以TO:结尾的固定写法）
    pub fn transition_phrases() -> &'static [&'static str] {
        &["FADE OUT", "FADE OUT.", "FADE TO BLACK:", "CUT TO BLACK:"]
    }

    /// 标题页键名归一化：同义键折叠到规范键
    pub fn normalize_title_key(key: &str) -> String {
        let k = key.trim().to_lowercase();
        match k.as_str() {
            "authors" => "author".to_string(),
            "date" | "draft date" => "draft_date".to_string(),
            other => other.to_string(),
        }
    }
}

lazy_static! {
    // 元素分类正则
    pub static ref ELEMENT_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_heading", Regex::new(r"^(?i:int/ext|i/e|int|ext|est)[.\s]").unwrap());
        map.insert("scene_number", Regex::new(r"\s*#[^#]*#\s*$").unwrap());
        map.insert("transition", Regex::new(r"^[A-Z ]+TO:$").unwrap());
        map.insert("character", Regex::new(r"^[A-Z][A-Z0-9 ]*(\(.*\))?$").unwrap());
        map.insert("parenthetical", Regex::new(r"^\(.+\)$").unwrap());
        map
    };

    // 标题页键值行正则，捕获组1为键、组2为值
    pub static ref TITLE_PAGE_REGEX: Regex = Regex::new(
        r"(?i)^[ \t]*(title|credit|author[s]?|draft date|date|contact|copyright|notes)[ \t]*:[ \t]*(.*)$"
    ).unwrap();
}
