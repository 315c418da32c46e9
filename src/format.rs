//! Display helpers for counts, rates and names.

use crate::record::NameRecord;
use crate::scoring::score;

/// Compact count: "850", "1.2k", "24.5k".
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

/// Count with space-separated thousands, French style: "12 345".
pub fn format_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(' ');
        }
        output.push(digit);
    }
    output
}

/// Rate in `[0, 1]` as a whole percentage: 0.424 -> "42%".
pub fn format_percentage(rate: f64) -> String {
    format!("{}%", (rate * 100.0).round())
}

/// Rate as a percentage with one decimal: 0.4237 -> "42.4%".
pub fn format_percentage_precise(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Uppercase the first character and lowercase the rest: "éLODIE" -> "Élodie".
pub fn capitalize_first_name(firstname: &str) -> String {
    let mut chars = firstname.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// One-line announcement for a selected name.
pub fn stats_sentence(record: &NameRecord) -> String {
    format!(
        "Prénom {} sélectionné. {} candidats avec {} de mention très bien.",
        record.firstname,
        record.count,
        format_percentage(record.tb)
    )
}

/// Short interpretation paragraphs for a name's results.
///
/// The first paragraph is always present; the others only when the name
/// stands out.
pub fn interpretation(record: &NameRecord) -> Vec<String> {
    let name = capitalize_first_name(&record.firstname);
    let mut paragraphs = vec![format!(
        "Les candidats prénommés {} obtiennent en moyenne un score de {:.1}/10 au brevet des collèges.",
        name,
        score(record)
    )];

    let with_mention = record.ab + record.b + record.tb + record.fel;
    if with_mention > 0.5 {
        paragraphs.push(format!(
            "Avec {} de mentions, ce prénom se situe dans la moyenne haute des résultats.",
            format_percentage_precise(with_mention)
        ));
    }
    if record.fel > 0.1 {
        paragraphs.push(format!(
            "Notamment, {} obtiennent TB+ (félicitations du jury), ce qui est remarquable.",
            format_percentage_precise(record.fel)
        ));
    }
    paragraphs
}
