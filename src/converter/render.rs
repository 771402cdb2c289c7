use std::fmt::Write;

use crate::converter::ConversionResult;

/// Language syntax used for the generated array declaration
#[derive(clap::ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    #[clap(name = "csharp")]
    CSharp,
    C,
    Rust,
}

impl ArrayStyle {
    pub fn default_name(&self) -> &'static str {
        match self {
            ArrayStyle::CSharp => "SpriteData",
            ArrayStyle::C => "sprite_data",
            ArrayStyle::Rust => "SPRITE_DATA",
        }
    }

    fn usage_comment(&self) -> &'static str {
        match self {
            ArrayStyle::CSharp => "// Use this in your C# code as a 16x16 sprite definition (ushort array).",
            ArrayStyle::C => "// Use this in your C code as a 16x16 sprite definition (uint16_t array).",
            ArrayStyle::Rust => "// Use this in your Rust code as a 16x16 sprite definition (u16 array).",
        }
    }

    fn header(&self, name: &str, len: usize) -> String {
        match self {
            ArrayStyle::CSharp => format!("private readonly ushort[] {} = new ushort[]", name),
            ArrayStyle::C => format!("static const uint16_t {}[{}] =", name, len),
            ArrayStyle::Rust => format!("pub const {}: [u16; {}] =", name, len),
        }
    }

    fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            ArrayStyle::CSharp | ArrayStyle::C => ("{", "};"),
            ArrayStyle::Rust => ("[", "];"),
        }
    }
}

/// Renders the row masks as an array declaration, one binary literal per line.
///
/// `name` overrides the style's default identifier.
pub fn render(result: &ConversionResult, style: ArrayStyle, name: Option<&str>) -> String {
    let name = name.unwrap_or_else(|| style.default_name());
    let (open, close) = style.brackets();

    let mut out = String::new();
    out.push_str(&format!("// Sprite generated from: {}\n", result.file_name));
    out.push_str(style.usage_comment());
    out.push('\n');
    out.push_str(&style.header(name, result.rows.len()));
    out.push('\n');
    out.push_str(open);
    out.push('\n');

    let last = result.rows.len() - 1;
    for (i, row) in result.rows.iter().enumerate() {
        let sep = if i < last { "," } else { "" };
        // writing to a String can't fail
        let _ = writeln!(out, "    {}{}", row, sep);
    }

    out.push_str(close);
    out.push('\n');

    return out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::RowMask;

    fn checkerboard() -> ConversionResult {
        let mut rows = [RowMask(0); 16];
        for (y, row) in rows.iter_mut().enumerate() {
            row.0 = if y % 2 == 0 { 0xaaaa } else { 0x5555 };
        }
        ConversionResult{file_name: "checker.png".to_string(), rows}
    }

    #[test]
    fn test_render_csharp() {
        let text = render(&checkerboard(), ArrayStyle::CSharp, None);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "// Sprite generated from: checker.png");
        assert_eq!(lines[1], "// Use this in your C# code as a 16x16 sprite definition (ushort array).");
        assert_eq!(lines[2], "private readonly ushort[] SpriteData = new ushort[]");
        assert_eq!(lines[3], "{");
        assert_eq!(lines[4], "    0b1010101010101010,");
        assert_eq!(lines[5], "    0b0101010101010101,");
        assert_eq!(lines[19], "    0b0101010101010101");
        assert_eq!(lines[20], "};");
        assert_eq!(lines.len(), 21);
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn test_only_last_row_lacks_comma() {
        let text = render(&checkerboard(), ArrayStyle::C, None);
        let rows = text.lines().filter(|l| l.starts_with("    0b")).collect::<Vec<_>>();

        assert_eq!(rows.len(), 16);
        assert!(rows[..15].iter().all(|l| l.ends_with(',')));
        assert!(!rows[15].ends_with(','));
        assert!(rows.iter().all(|l| l.trim().trim_end_matches(',').len() == 18));
    }

    #[test]
    fn test_render_c() {
        let text = render(&checkerboard(), ArrayStyle::C, None);
        assert!(text.contains("\nstatic const uint16_t sprite_data[16] =\n{\n"));
        assert!(text.ends_with("0b0101010101010101\n};\n"));
    }

    #[test]
    fn test_render_rust_with_name() {
        let text = render(&checkerboard(), ArrayStyle::Rust, Some("PLAYER"));
        assert!(text.contains("\npub const PLAYER: [u16; 16] =\n[\n"));
        assert!(text.ends_with("0b0101010101010101\n];\n"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let result = checkerboard();
        assert_eq!(render(&result, ArrayStyle::CSharp, None), render(&result, ArrayStyle::CSharp, None));
    }
}
