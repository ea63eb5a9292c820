//! Deterministic Dart fixtures: same seed → same output across runs.

use std::io;
use std::path::{Path, PathBuf};

/// A generated tree of Dart files.
pub struct TestFixture {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub total_bytes: usize,
}

/// Line templates, roughly half of them carrying a comment.
const LINE_KINDS: &[&str] = &[
    "  final value{n} = compute({n});",
    "  final label{n} = 'item // {n}'; // label for {n}",
    "  /// Returns the {n}th entry.",
    "  // plain note {n}",
    "  int total{n} = a{n} /* inline */ + b{n};",
    "  final url{n} = \"https://example.com/{n}\";",
    "  /*",
    "   * block body {n}",
    "   */",
    "",
];

/// Generate one Dart source file of roughly `lines` lines.
pub fn generate_source(lines: usize, seed: u64) -> String {
    let mut rng = SimpleRng::new(seed);
    let mut out = String::with_capacity(lines * 48);
    out.push_str("/// Generated admin fixture.\nclass Fixture {\n");

    let mut i = 0;
    while i < lines {
        let kind = (rng.next_u64() as usize) % LINE_KINDS.len();
        if LINE_KINDS[kind] == "  /*" {
            // Emit the whole block so every opener is closed.
            for template in &LINE_KINDS[kind..kind + 3] {
                out.push_str(&template.replace("{n}", &i.to_string()));
                out.push('\n');
            }
            i += 3;
            continue;
        }
        out.push_str(&LINE_KINDS[kind].replace("{n}", &i.to_string()));
        out.push('\n');
        i += 1;
    }

    out.push_str("}\n");
    out
}

/// Write `file_count` Dart files under `root/lib/lib_admin`.
pub fn generate_fixture(
    root: &Path,
    file_count: usize,
    lines_per_file: usize,
    seed: u64,
) -> io::Result<TestFixture> {
    let admin = root.join("lib").join("lib_admin");
    let mut files = Vec::with_capacity(file_count);
    let mut total_bytes = 0;

    for i in 0..file_count {
        let dir = admin.join(format!("module_{}", i % 8));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("page_{i}.dart"));
        let content = generate_source(lines_per_file, seed.wrapping_add(i as u64));
        total_bytes += content.len();
        std::fs::write(&path, content)?;
        files.push(path);
    }

    Ok(TestFixture {
        root: root.to_path_buf(),
        files,
        total_bytes,
    })
}

/// xorshift64 PRNG; never seeded with zero.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
