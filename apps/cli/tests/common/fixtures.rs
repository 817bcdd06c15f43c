//! Test fixtures and factory functions for question bank documents.

use std::path::PathBuf;

/// Path of the checked-in README excerpt.
pub fn readme_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/README.md")
}

/// Generate a README with `num_questions` questions whose answer is always `B`.
pub fn sample_readme(num_questions: usize) -> String {
    let mut doc = String::from("# Questions\n\nPreamble.\n\n");
    for i in 1..=num_questions {
        doc.push_str(&format!(
            "---\n\n###### {i}. Question {i}\n\nWhat is {i}?\n\n- A: wrong\n- B: right\n- C: also wrong\n\n\
             <details><summary><b>Answer</b></summary>\n<p>\n\n#### Answer: B\n\nBecause {i}.\n\n</p>\n</details>\n\n"
        ));
    }
    doc.push_str("---\n");
    doc
}
