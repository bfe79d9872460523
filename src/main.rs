use screenwriter_rust::{calculate_page_stats, decode_to_script, encode, format_page_count, format_runtime, scene_index};
use std::fs;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file> [output_file]", args[0]);
        return;
    }

    let file_path = &args[1];

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let script = decode_to_script(&content);
            let stats = calculate_page_stats(&script.lines);
            let scenes = scene_index(&script.lines);

            println!("解析完成！");
            println!("标题: {}", script.title);
            println!("行数: {}", stats.line_count);
            println!("词数: {}", stats.word_count);
            println!("页数: {}", format_page_count(&stats));
            println!("预计时长: {}", format_runtime(stats.estimated_minutes));
            println!("场景数量: {}", scenes.len());
            for scene in &scenes {
                println!("- 第{}页: {}", scene.page, scene.text);
            }

            if let Some(out_path) = args.get(2) {
                match fs::write(out_path, encode(&script)) {
                    Ok(_) => println!("Fountain输出已保存到: {}", out_path),
                    Err(e) => println!("写入文件失败: {}", e),
                }
            }
        },
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
