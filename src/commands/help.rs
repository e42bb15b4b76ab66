use super::resolver::REGION_COMMANDS;

pub const TROLL_TEXT: &str = "iPhone - говно, Android - сила. ";

/// Commands that are not single-region lookups, with their labels
const OTHER_COMMANDS: [(&str, &str); 4] = [
    ("rusyar", "Россия и Ярославская область"),
    ("rus", "По всей России"),
    ("cur", "Курсы валют"),
    ("troll", "Постебать Айфонодрочеров"),
];

/// Text for `help` and `start`: every command with a human label
pub fn help_text() -> String {
    let mut text = String::from("Доступные регионы:");

    let region_lines = REGION_COMMANDS
        .iter()
        .map(|cmd| (cmd.keyword, cmd.label));

    for (keyword, label) in region_lines.chain(OTHER_COMMANDS.iter().copied()) {
        text.push_str(&format!("\n\t/{} - {}", keyword, label));
    }

    text
}
