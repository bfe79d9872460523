use screenwriter_rust::layout::{
    calculate_page_stats, format_page_count, format_runtime, line_weight, page_breaks,
    scene_index, PrintProfile,
};
use screenwriter_rust::models::{Line, LineType, PageStats};

#[test]
fn test_empty_document_stats() {
    let stats = calculate_page_stats(&[]);
    assert_eq!(stats, PageStats::empty(), "空文档的统计全为零");
    assert_eq!(stats.page_count, 0.0);
    assert_eq!(stats.estimated_minutes, 0);
}

#[test]
fn test_sample_document_stats() {
    let lines = vec![
        Line::new(LineType::Scene, "INT. COFFEE SHOP - DAY"),
        Line::new(LineType::Action, "A busy morning scene."),
        Line::new(LineType::Character, "JOHN"),
        Line::new(LineType::Dialogue, "Hello there!"),
    ];
    let stats = calculate_page_stats(&lines);

    assert!(stats.page_count > 0.0);
    assert!(stats.word_count > 0);
    assert_eq!(stats.page_count, 1.0, "有内容时页数最小为1");
    assert_eq!(stats.estimated_minutes, 1, "1页约等于1分钟");
    assert_eq!(stats.line_count, 4);
    assert_eq!(stats.word_count, 12);
}

#[test]
fn test_word_count_exact() {
    let lines = vec![Line::new(LineType::Action, "One two three four five")];
    assert_eq!(calculate_page_stats(&lines).word_count, 5);
}

#[test]
fn test_minimum_one_page() {
    let lines = vec![Line::new(LineType::Action, "Just one line.")];
    assert_eq!(calculate_page_stats(&lines).page_count, 1.0);
}

#[test]
fn test_page_count_one_decimal() {
    // 83行动作 = 83个虚拟行，83/55 = 1.509... 保留一位小数
    let lines: Vec<Line> = (0..83)
        .map(|_| Line::new(LineType::Action, "Short."))
        .collect();
    let stats = calculate_page_stats(&lines);

    assert_eq!(stats.page_count, 1.5);
    assert_eq!(stats.estimated_minutes, 2, "分钟数按页数四舍五入");
    assert_eq!(format_page_count(&stats), "1.5 pages");
}

#[test]
fn test_line_weights() {
    let eps = 1e-9;

    assert!((line_weight(&Line::new(LineType::Scene, "INT. A - DAY")) - 2.0).abs() < eps);
    assert!((line_weight(&Line::new(LineType::Character, "JOHN")) - 1.5).abs() < eps);
    assert!((line_weight(&Line::new(LineType::Parenthetical, "(beat)")) - 0.5).abs() < eps);
    assert!((line_weight(&Line::new(LineType::Transition, "CUT TO:")) - 1.5).abs() < eps);

    // action按60字符折行
    assert!((line_weight(&Line::new(LineType::Action, &"a".repeat(60))) - 1.0).abs() < eps);
    assert!((line_weight(&Line::new(LineType::Action, &"a".repeat(61))) - 2.0).abs() < eps);
    // dialogue按35字符折行
    assert!((line_weight(&Line::new(LineType::Dialogue, &"a".repeat(35))) - 0.8).abs() < eps);
    assert!((line_weight(&Line::new(LineType::Dialogue, &"a".repeat(36))) - 1.6).abs() < eps);
    // 空文本折行系数最小为1
    assert!((line_weight(&Line::new(LineType::Action, "")) - 1.0).abs() < eps);
    // 其他类型不做折行修正
    assert!((line_weight(&Line::new(LineType::Character, &"J".repeat(80))) - 1.5).abs() < eps);
}

#[test]
fn test_page_breaks_and_scene_pages() {
    // 56个场景行，每行2个虚拟行：累计到56时在第27行断页，再到第55行断页
    let lines: Vec<Line> = (0..56)
        .map(|i| Line::new(LineType::Scene, &format!("INT. PLACE {} - DAY", i)))
        .collect();

    let breaks = page_breaks(&lines);
    assert_eq!(breaks, vec![27, 55]);

    let scenes = scene_index(&lines);
    assert_eq!(scenes.len(), 56);
    assert_eq!(scenes[0].page, 1);
    assert_eq!(scenes[27].page, 1, "断页行本身还在当前页");
    assert_eq!(scenes[28].page, 2);
    assert_eq!(scenes[55].page, 2);
}

#[test]
fn test_scene_index_skips_empty_scenes() {
    let lines = vec![
        Line::new(LineType::Scene, "INT. A - DAY"),
        Line::new(LineType::Scene, ""),
        Line::new(LineType::Action, "Something happens."),
        Line::new(LineType::Scene, "EXT. B - NIGHT"),
    ];
    let scenes = scene_index(&lines);

    assert_eq!(scenes.len(), 2, "空文本的场景行不进索引");
    assert_eq!(scenes[0].line_index, 0);
    assert_eq!(scenes[0].text, "INT. A - DAY");
    assert_eq!(scenes[1].line_index, 3);
}

#[test]
fn test_navigator_and_exporter_agree() {
    // 导航与分页走同一张权重表：场景页码 = 它前面的断点数 + 1
    let mut lines = Vec::new();
    for i in 0..40 {
        lines.push(Line::new(LineType::Scene, &format!("INT. ROOM {} - DAY", i)));
        lines.push(Line::new(LineType::Action, "Something happens in the room, at length."));
        lines.push(Line::new(LineType::Character, "ALEX"));
        lines.push(Line::new(LineType::Dialogue, "We keep talking until the page fills up."));
    }

    let breaks = page_breaks(&lines);
    assert!(!breaks.is_empty(), "这个文档应该超过一页");

    for scene in scene_index(&lines) {
        let expected = 1 + breaks.iter().filter(|b| **b < scene.line_index).count();
        assert_eq!(scene.page, expected, "场景页码与断点列表一致");
    }
}

#[test]
fn test_format_page_count() {
    let make = |page_count: f64| PageStats {
        page_count,
        ..PageStats::empty()
    };

    assert_eq!(format_page_count(&make(0.0)), "0 pages");
    assert_eq!(format_page_count(&make(1.0)), "1 page");
    assert_eq!(format_page_count(&make(5.0)), "5 pages");
    assert_eq!(format_page_count(&make(2.5)), "2.5 pages");
}

#[test]
fn test_format_runtime() {
    assert_eq!(format_runtime(0), "0 min");
    assert_eq!(format_runtime(45), "~45 min");
    assert_eq!(format_runtime(59), "~59 min");
    assert_eq!(format_runtime(60), "~1h");
    assert_eq!(format_runtime(90), "~1h 30m");
    assert_eq!(format_runtime(120), "~2h");
}

#[test]
fn test_print_profile_geometry() {
    let profile = PrintProfile::default();

    assert_eq!(profile.page_width, 612.0);
    assert_eq!(profile.page_height, 792.0);
    assert_eq!(profile.top_margin, 72.0);
    assert_eq!(profile.bottom_margin, 72.0);
    assert_eq!(profile.left_margin, 108.0);
    assert_eq!(profile.right_margin, 72.0);
    assert_eq!(profile.font_family, "Courier");
    assert_eq!(profile.font_size, 12.0);
    assert_eq!(profile.line_height, 12.0);
}

#[test]
fn test_print_profile_element_table() {
    let profile = PrintProfile::default();

    let scene = profile.element(LineType::Scene);
    assert_eq!((scene.feed_left, scene.feed_right, scene.uppercase), (0.0, 0.0, true));

    let action = profile.element(LineType::Action);
    assert_eq!((action.feed_left, action.feed_right, action.uppercase), (0.0, 0.0, false));

    let character = profile.element(LineType::Character);
    assert_eq!(
        (character.feed_left, character.feed_right, character.uppercase),
        (168.0, 0.0, true)
    );

    let parenthetical = profile.element(LineType::Parenthetical);
    assert_eq!(
        (parenthetical.feed_left, parenthetical.feed_right, parenthetical.uppercase),
        (120.0, 144.0, false)
    );

    let dialogue = profile.element(LineType::Dialogue);
    assert_eq!(
        (dialogue.feed_left, dialogue.feed_right, dialogue.uppercase),
        (72.0, 144.0, false)
    );

    let transition = profile.element(LineType::Transition);
    assert_eq!(
        (transition.feed_left, transition.feed_right, transition.uppercase),
        (288.0, 0.0, true)
    );

    // 列宽 = 页宽 - 页边距 - 元素缩进
    assert_eq!(profile.content_width(LineType::Dialogue), 216.0);
    assert_eq!(profile.content_width(LineType::Action), 432.0);
}

#[test]
fn test_print_profile_spacing_after() {
    let profile = PrintProfile::default();

    assert_eq!(profile.spacing_after(LineType::Scene, Some(LineType::Action)), 24.0);
    assert_eq!(profile.spacing_after(LineType::Transition, None), 24.0);
    assert_eq!(profile.spacing_after(LineType::Action, Some(LineType::Action)), 12.0);
    assert_eq!(
        profile.spacing_after(LineType::Dialogue, Some(LineType::Dialogue)),
        0.0,
        "对白后面紧跟对白不空行"
    );
    assert_eq!(
        profile.spacing_after(LineType::Dialogue, Some(LineType::Parenthetical)),
        0.0
    );
    assert_eq!(profile.spacing_after(LineType::Dialogue, Some(LineType::Action)), 12.0);
    assert_eq!(profile.spacing_after(LineType::Dialogue, None), 12.0);
    assert_eq!(profile.spacing_after(LineType::Character, Some(LineType::Dialogue)), 0.0);
    assert_eq!(profile.spacing_after(LineType::Parenthetical, Some(LineType::Dialogue)), 0.0);
}
