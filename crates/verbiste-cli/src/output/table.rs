//! Table formatting utilities for CLI output.

use std::array;

use comfy_table::{presets, Cell, ContentArrangement, Table};
use verbiste::engine::{CompoundTense, Conjugation, SimpleTense};
use verbiste::{DerivedField, Person, VerbEntry, PERSON_COUNT};

/// Placeholder shown for a person without a form.
const MISSING: &str = "-";

/// Simple indicative tenses, in display order.
const INDICATIVE: [SimpleTense; 5] = [
    SimpleTense::SimplePast,
    SimpleTense::Imperfect,
    SimpleTense::Present,
    SimpleTense::Conditional,
    SimpleTense::Future,
];

/// Compound indicative tenses, aligned under their auxiliary's simple tense.
const INDICATIVE_COMPOUND: [CompoundTense; 5] = [
    CompoundTense::PasseAnterieur,
    CompoundTense::PlusQueParfait,
    CompoundTense::PasseCompose,
    CompoundTense::ConditionnelPasse,
    CompoundTense::FuturAnterieur,
];

/// Persons the three imperative forms belong to.
const IMPERATIVE_PERSONS: [Person; 3] = [
    Person::SecondSingular,
    Person::FirstPlural,
    Person::SecondPlural,
];

/// One column of a conjugation grid.
struct Column {
    header: &'static str,
    cells: [String; PERSON_COUNT],
}

fn simple_column(conjugation: &Conjugation, tense: SimpleTense) -> Column {
    let cells = match conjugation.tense(tense) {
        Some(field) => render_field(field),
        None => array::from_fn(|_| MISSING.to_string()),
    };
    Column {
        header: tense.label(),
        cells,
    }
}

fn compound_column(conjugation: &Conjugation, tense: CompoundTense) -> Column {
    let cells = match conjugation.compound(tense) {
        Some(cells) => array::from_fn(|n| render_cell(&cells[n])),
        None => array::from_fn(|_| MISSING.to_string()),
    };
    Column {
        header: tense.label(),
        cells,
    }
}

fn render_field(field: &DerivedField) -> [String; PERSON_COUNT] {
    let slots = field.slots();
    array::from_fn(|n| slots[n].render())
}

fn render_cell(cell: &str) -> String {
    if cell.is_empty() {
        MISSING.to_string()
    } else {
        cell.to_string()
    }
}

fn grid(columns: &[Column]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::new()];
    header.extend(columns.iter().map(|c| c.header.to_string()));
    table.set_header(header);

    for person in Person::ALL {
        let mut row = vec![person.pronoun().to_string()];
        row.extend(columns.iter().map(|c| c.cells[person.index()].clone()));
        table.add_row(row);
    }
    table
}

/// Format the indicative, subjunctive and compound tenses as tables.
pub fn format_conjugation_tables(conjugation: &Conjugation) -> Vec<Table> {
    let indicative: Vec<Column> = INDICATIVE
        .into_iter()
        .map(|tense| simple_column(conjugation, tense))
        .collect();
    let compound: Vec<Column> = INDICATIVE_COMPOUND
        .into_iter()
        .map(|tense| compound_column(conjugation, tense))
        .collect();
    let subjunctive = vec![
        simple_column(conjugation, SimpleTense::SubjunctiveImperfect),
        simple_column(conjugation, SimpleTense::Subjunctive),
        compound_column(conjugation, CompoundTense::SubjonctifPlusQueParfait),
        compound_column(conjugation, CompoundTense::SubjonctifPasse),
    ];
    vec![grid(&indicative), grid(&subjunctive), grid(&compound)]
}

/// The imperative as `person form` pairs.
///
/// The template lists only the three imperative persons, so they sit in the
/// first three slots of the derived field.
pub fn imperative_forms(conjugation: &Conjugation) -> Vec<(Person, String)> {
    let Some(field) = conjugation.tense(SimpleTense::Imperative) else {
        return Vec::new();
    };
    IMPERATIVE_PERSONS
        .into_iter()
        .zip(field.iter())
        .filter(|(_, slot)| !slot.is_empty())
        .map(|(person, slot)| (person, slot.render()))
        .collect()
}

/// Format search matches, marking the highlighted row.
pub fn format_matches_table(matches: &[&VerbEntry], highlighted: Option<usize>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Verbe", "Modèle"]);

    for (index, entry) in matches.iter().enumerate() {
        let marker = if highlighted == Some(index) { ">" } else { "" };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(&entry.verb),
            Cell::new(&entry.template),
        ]);
    }

    table
}
