use std::process;

use unicode_width::UnicodeWidthStr;

use hodiya_core::mapping::{default_toml, Collision, CollisionKind, MappingTable};

use super::{die, init_mapping, read_file};

pub fn mapping_export() {
    print!("{}", default_toml());
}

pub fn mapping_validate(file: &str) {
    let content = die!(read_file(file), "Error reading {file}: {}");
    let table = die!(MappingTable::from_toml(&content), "Error: {}");
    let collisions = table.collisions();
    if !collisions.is_empty() {
        for line in collisions.iter().map(describe_collision) {
            eprintln!("{line}");
        }
        eprintln!(
            "Error: {} collisions; the first definition wins, review the table",
            collisions.len()
        );
        process::exit(1);
    }
    let forward_only = table.entries().iter().filter(|e| e.roman.is_empty()).count();
    println!("OK: {} entries ({forward_only} forward-only)", table.len());
}

pub fn table_cmd(mapping: Option<&str>, json: bool) {
    let table = die!(init_mapping(mapping), "Error loading mapping: {}");
    if json {
        let out = die!(
            serde_json::to_string_pretty(table.entries()),
            "Error serializing table: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_table(table));
    }
}

pub fn describe_collision(c: &Collision) -> String {
    let key = match c.kind {
        CollisionKind::Script => format!("script {:?}", c.kept.script),
        CollisionKind::Roman => format!("roman {:?}", c.kept.roman),
    };
    format!(
        "collision on {key}: kept {} = {:?}, dropped {} = {:?}",
        c.kept.script, c.kept.roman, c.dropped.script, c.dropped.roman
    )
}

/// One `script  roman` row per canonical entry, script column padded by
/// display width. Marks without a spacing glyph are shown as code points.
pub fn format_table(table: &MappingTable) -> String {
    let shown: Vec<String> = table
        .entries()
        .iter()
        .map(|e| display_script(&e.script))
        .collect();
    let width = shown.iter().map(|s| s.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (script, entry) in shown.iter().zip(table.entries()) {
        let pad = width - script.width();
        let roman = if entry.roman.is_empty() {
            "(none)"
        } else {
            entry.roman.as_str()
        };
        out.push_str(&format!("{script}{}  {roman}\n", " ".repeat(pad)));
    }
    out
}

fn display_script(script: &str) -> String {
    if script.width() == 0 {
        script
            .chars()
            .map(|c| format!("U+{:04X}", c as u32))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        script.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hodiya_core::mapping::MappingEntry;

    #[test]
    fn format_table_aligns_rows() {
        let table = MappingTable::from_entries([
            MappingEntry::new("ක", "ka"),
            MappingEntry::new("\u{200D}", ""),
        ]);
        let out = format_table(&table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ක"));
        assert!(lines[0].ends_with("  ka"));
        assert_eq!(lines[1], "U+200D  (none)");
    }

    #[test]
    fn collision_description() {
        let table = MappingTable::from_entries([
            MappingEntry::new("ක", "ka"),
            MappingEntry::new("ඛ", "ka"),
        ]);
        let line = describe_collision(&table.collisions()[0]);
        assert_eq!(
            line,
            "collision on roman \"ka\": kept ක = \"ka\", dropped ඛ = \"ka\""
        );
    }
}
