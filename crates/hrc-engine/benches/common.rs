// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline(chapters: usize, sections: usize, points: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for chapter in 1..=chapters {
        lines.push(format!("# {chapter} Chapter {chapter}"));
        lines.push("Some introductory prose for the chapter.".to_string());
        for section in 0..sections {
            lines.push(format!("## Section {section}"));
            for point in 0..points {
                lines.push(format!("- point {point} of section {section}"));
            }
            lines.push(String::new());
        }
    }

    lines
}
