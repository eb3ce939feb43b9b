use std::fs;
use std::process::Command;

/// Opens `$EDITOR` on a temp Markdown file seeded with `initial_content`
/// and returns what the user saved.
pub fn open_editor(initial_content: &str) -> Result<String, String> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let tmp_file = std::env::temp_dir().join(format!("askmentor_{}.md", std::process::id()));

    fs::write(&tmp_file, initial_content)
        .map_err(|e| format!("Cannot write temp file: {}", e))?;

    let status = Command::new(&editor)
        .arg(&tmp_file)
        .status()
        .map_err(|e| format!("Cannot open editor '{}': {}", editor, e));

    let status = match status {
        Ok(s) => s,
        Err(e) => {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
    };

    if !status.success() {
        let _ = fs::remove_file(&tmp_file);
        return Err("Editor exited with error".to_string());
    }

    let result = fs::read_to_string(&tmp_file)
        .map_err(|e| format!("Cannot read editor result: {}", e))?;

    let _ = fs::remove_file(&tmp_file);
    Ok(strip_final_newline(result))
}

// Most editors append a newline on save.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
