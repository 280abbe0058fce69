use egui_code_editor::Syntax;

/// Resaltado genérico estilo C para lenguajes sin sintaxis propia en el editor.
pub fn c_like_syntax() -> Syntax {
    Syntax::new("code")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "if", "else", "for", "while", "do", "return", "break", "continue", "switch", "case",
            "default", "class", "struct", "enum", "interface", "public", "private", "static",
            "const", "new", "function", "fun", "func", "var", "let", "val", "import", "package",
            "try", "catch", "throw", "finally",
        ])
        .with_types([
            "int", "long", "char", "float", "double", "void", "bool", "boolean", "string",
            "String", "byte", "short",
        ])
}

/// Sintaxis del editor para el lenguaje declarado en la pregunta.
pub fn syntax_for(language: Option<&str>) -> Syntax {
    match language.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
        Some("rust" | "rs") => Syntax::rust(),
        Some("python" | "py") => Syntax::python(),
        Some("sql") => Syntax::sql(),
        Some("lua") => Syntax::lua(),
        Some("shell" | "bash" | "sh") => Syntax::shell(),
        _ => c_like_syntax(),
    }
}

/// Texto de la etiqueta de lenguaje que acompaña al editor.
pub fn language_badge(language: Option<&str>) -> Option<String> {
    let lang = language?.trim();
    if lang.is_empty() {
        return None;
    }
    let label = match lang.to_ascii_lowercase().as_str() {
        "rust" | "rs" => "Rust".to_string(),
        "python" | "py" => "Python".to_string(),
        "javascript" | "js" => "JavaScript".to_string(),
        "typescript" | "ts" => "TypeScript".to_string(),
        "cpp" | "c++" => "C++".to_string(),
        "csharp" | "c#" => "C#".to_string(),
        _ => {
            let mut chars = lang.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => return None,
            }
        }
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_display_names() {
        assert_eq!(language_badge(Some("rust")).as_deref(), Some("Rust"));
        assert_eq!(language_badge(Some("kotlin")).as_deref(), Some("Kotlin"));
        assert_eq!(language_badge(Some("  ")), None);
        assert_eq!(language_badge(None), None);
    }
}
