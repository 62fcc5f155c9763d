use std::path::Path;
use tempfile::TempDir;

/// Layout with every placeholder the success page fills in.
pub(crate) const STOCK_LAYOUT: &str = "<!DOCTYPE html>\n\
<html>\n\
<head><meta charset=\"utf-8\"><title>{{title}}</title></head>\n\
<body>\n\
<div class=\"icon\">{{icon}}</div>\n\
<h1>{{heading}}</h1>\n\
<p class=\"message\">{{message}}</p>\n\
<p class=\"time\">{{time}}</p>\n\
</body>\n\
</html>\n";

pub(crate) fn create_server_root() -> TempDir {
    create_server_root_with_layout(STOCK_LAYOUT)
}

pub(crate) fn create_server_root_with_layout(layout: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "pages/success_layout.html", layout);
    temp_dir
}

pub(crate) fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("failed to create {}: {}", parent.display(), e));
    }
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
}
