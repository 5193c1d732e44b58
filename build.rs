//! Build script to generate the embedded sample word list
//!
//! Reads the sample list file and generates Rust source code with a const array
//! of raw lines. Lines are parsed at runtime by the text parser.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_line_list(
        "data/sample.txt",
        &Path::new(&out_dir).join("sample.rs"),
        "SAMPLE_LINES",
        "Sample word-pair list in text import format",
    );

    // Rebuild if the sample list changes
    println!("cargo:rerun-if-changed=data/sample.txt");
}

fn generate_line_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated sample list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        // Debug formatting yields a correctly escaped string literal
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
