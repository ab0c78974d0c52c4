use std::fs;
use std::io;
use std::path::Path;


/// Renders `root` as a tree, one line per entry. Directories are descended
/// while the current level is below `max_depth`; a negative depth is unlimited.
pub fn render_tree(root: &Path, max_depth: i32) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    // The root itself has to be readable, anything below it is reported inline.
    let entries = sorted_entries(root)?;
    push_dir(entries, 0, "", max_depth, &mut lines);
    Ok(lines)
}

pub fn log_tree(root: &Path, max_depth: i32) {
    log::info!("static directory {}:", root.display());
    match render_tree(root, max_depth) {
        Ok(lines) => {
            for line in lines {
                log::info!("{line}");
            }
        }
        Err(e) => log::warn!("could not read static directory {}: {e}", root.display()),
    }
}

fn sorted_entries(path: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn push_dir(
    entries: Vec<fs::DirEntry>,
    level: i32,
    prefix: &str,
    max_depth: i32,
    lines: &mut Vec<String>
) {
    if max_depth >= 0 && level >= max_depth {
        return;
    }

    let total = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let (connector, indent) = if i + 1 == total {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{prefix}{connector}{name}"));

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir || (max_depth >= 0 && level + 1 >= max_depth) {
            continue;
        }

        let child_prefix = format!("{prefix}{indent}");
        match sorted_entries(&entry.path()) {
            Ok(children) => push_dir(children, level + 1, &child_prefix, max_depth, lines),
            Err(e) => lines.push(format!("{child_prefix}error reading {name}: {e}")),
        }
    }
}
