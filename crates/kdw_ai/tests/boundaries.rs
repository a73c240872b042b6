use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(p) = stack.pop() {
        let entries = match fs::read_dir(&p) {
            Ok(e) => e,
            Err(_) => continue,
        };
        for ent in entries.flatten() {
            let path = ent.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

#[test]
fn kdw_core_stays_free_of_network_code() {
    // All HTTP lives behind kdw_ai's fetcher and Ollama clients.
    let core_src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("kdw_core")
        .join("src");
    let files = collect_rs_files(&core_src);
    assert!(!files.is_empty());

    for f in files {
        let text = fs::read_to_string(&f).unwrap_or_default();
        assert!(!text.contains("ureq"), "network client found in {}", f.display());
    }
}

#[test]
fn kdw_ai_does_not_compose_persona_text() {
    // Response wording comes from the fixed templates only; retrieval just appends references.
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let files = collect_rs_files(&src_root);
    assert!(!files.is_empty());

    for f in files {
        let text = fs::read_to_string(&f).unwrap_or_default();
        assert!(
            !text.contains("persona::templates"),
            "template access found in {}",
            f.display()
        );
        assert!(
            !text.contains("Relevant Scriptures"),
            "response rendering found in {}",
            f.display()
        );
    }
}
