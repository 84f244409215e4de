// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_manuscript(chapters: usize) -> String {
    let mut content = String::from("---\ntitle: Benchmark\ntags: [draft]\n---\n\n");

    for chapter in 0..chapters {
        content.push_str(&format!("# Chapter {}\n\n", chapter));
        content.push_str("The morning was **bright** and *quiet*, and the wrold seemed still.\n");
        content.push_str("She opened the `journal` and wrote a _short_ note about the harbour.\n\n");
        content.push_str("- A list item with a [link](http://example.com)\n");
        content.push_str("- Another item\n\n");
        content.push_str("> A quoted line of dialogue.\n\n");

        if chapter % 4 == 0 {
            content.push_str("```rust\nfn example() {\n    println!(\"**not bold**\");\n}\n```\n\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn dictionary() -> prosaic_engine::WordList {
    prosaic_engine::WordList::new([
        "the", "morning", "was", "bright", "and", "quiet", "seemed", "still", "she", "opened",
        "journal", "wrote", "short", "note", "about", "harbour", "list", "item", "with", "link",
        "another", "quoted", "line", "dialogue", "chapter",
    ])
    .ignore_case()
}
