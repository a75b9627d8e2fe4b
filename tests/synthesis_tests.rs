//! End-to-end name synthesis against a shared fleet of existing names.

use nextname::{NameHistory, RenameConfig, Renamer, synthesize_name};

const FLEET: &[&str] = &[
    "Foo",
    "NumA 1",
    "NumB 1",
    "NumB 2",
    "NumC 0",
    "NumD 0002",
    "NumE 2137",
    "23 NumF",
    "42",
    "2 NumG 3",
    "NumH 5X",
    "NumI 023",
    "RomA I",
    "RomB III",
    "RomC iv",
    "RomD XX",
    "RomE XXX",
    "RomF DCCCXCIV",
    "HexA AA",
    "HexB 01f",
    "HexC 0f0",
    "LatA A",
    "LatB-f",
    "LatC-5G",
    "GreA Α",
    "GreB λ",
    "GreC Alpha",
    "GreD zeta",
    "es%cape 5%",
    "Delta Force",
    "Excel1 Z",
    "Excel2 AA",
    "Excel3 ZZ",
    "Excel4 aCbX",
    "Excel5 xyZ",
];

fn history() -> NameHistory {
    NameHistory::from_names(FLEET.iter().copied())
}

fn assert_next(template: &str, expected: &str) {
    let history = history();
    assert_eq!(synthesize_name(template, history.names()), expected, "template {template:?}");
}

#[test]
fn decimal_series() {
    assert_next("Foo %d", "Foo 2");
    assert_next("Foo%d", "Foo2");
    assert_next("Bar %d", "Bar 1");
    assert_next("NumA %d", "NumA 2");
    assert_next("NumB %d", "NumB 3");
    assert_next("NumC %d", "NumC 1");
    assert_next("NumD %d", "NumD 3");
    assert_next("NumD %05d", "NumD 00003");
    assert_next("NumE %d", "NumE 2138");
}

#[test]
fn directive_position() {
    assert_next("%d NumF", "24 NumF");
    assert_next("%d", "43");
    assert_next("%d NumG 3", "3 NumG 3");
    assert_next("2 NumG %d", "2 NumG 4");
    assert_next("%d NumG %d", "1 NumG %d");
    assert_next("NumH %dX", "NumH 6X");
}

#[test]
fn zero_padding() {
    assert_next("NumI %d", "NumI 24");
    assert_next("NumI %01d", "NumI 24");
    assert_next("NumI %03d", "NumI 024");
    assert_next("NumI %0 d", "NumI %0 d");
}

#[test]
fn roman_series() {
    assert_next("RomA %R", "RomA II");
    assert_next("RomB %r", "RomB iv");
    assert_next("RomC %R", "RomC V");
    assert_next("RomD %R", "RomD XXI");
    assert_next("RomE %RX", "RomE XXIX");
    assert_next("RomF %R", "RomF DCCCXCV");
}

#[test]
fn hexadecimal_series() {
    assert_next("HexA %x", "HexA ab");
    assert_next("HexB %X", "HexB 20");
    assert_next("HexC %03X", "HexC 0F1");
}

#[test]
fn letter_series() {
    assert_next("LatA %a", "LatA b");
    assert_next("LatB-%A", "LatB-G");
    assert_next("LatC-5%A", "LatC-5H");
    assert_next("GreA %g", "GreA β");
    assert_next("GreB %G", "GreB Μ");
}

#[test]
fn bijective_letters_roll_over() {
    assert_next("Excel1 %a", "Excel1 aa");
    assert_next("Excel2 %A", "Excel2 AB");
    assert_next("Excel3 %A", "Excel3 AAA");
    assert_next("Excel4 %A", "Excel4 ACBY");
    assert_next("Excel5 %a", "Excel5 xza");
}

#[test]
fn word_series() {
    assert_next("GreC %W", "GreC Beta");
    assert_next("GreD %w", "GreD eta");
    assert_next("%p", "alpha");
    assert_next("%P Force", "Echo Force");
}

#[test]
fn words_must_match_the_list_exactly() {
    assert_eq!(synthesize_name("%P Force", ["Alfa Force"]), "Alpha Force");
    assert_eq!(synthesize_name("%P Force", ["Alfa Force", "Alpha Force"]), "Bravo Force");
}

#[test]
fn binary_width_only_pads_the_padded_selector() {
    assert_eq!(synthesize_name("%08b", ["1"]), "10");
    assert_eq!(synthesize_name("%08B", ["1"]), "00000010");
}

#[test]
fn very_long_existing_names_are_ignored() {
    let cases = [
        ("Probe %R", "M".repeat(3_000_000), "Probe I"),
        ("Probe %R", "IM".repeat(1_000_000), "Probe I"),
        ("Probe %A", "Z".repeat(10_000), "Probe A"),
        ("Probe %g", "ω".repeat(10_000), "Probe α"),
        ("Probe %d", "9".repeat(1_000_000), "Probe 1"),
        ("Probe %X", "F".repeat(1_000_000), "Probe 1"),
        ("Probe %P", "alpha".repeat(100_000), "Probe Alpha"),
    ];
    for (template, middle, expected) in cases {
        let existing = format!("Probe {middle}");
        assert_eq!(synthesize_name(template, [existing.as_str()]), expected, "template {template:?}");
    }
}

#[test]
fn escapes() {
    assert_next("es%%cape %d%%", "es%cape 6%");
    assert_next("escape%%", "escape%");
    assert_next("%%escape", "%escape");
    assert_next("es%%ca%%pe", "es%ca%pe");
}

#[test]
fn templates_without_directive() {
    assert_next("", "");
    assert_next("some", "some");
    assert_next("percent%", "percent%");
}

#[test]
fn renamer_launches_a_series() {
    let mut renamer = Renamer::with_history(history(), RenameConfig::default());
    let names: Vec<String> = (100..104)
        .map(|id| renamer.launch(id, " RomD %R ", None).name)
        .collect();
    assert_eq!(names, ["RomD XXI", "RomD XXII", "RomD XXIII", "RomD XXIV"]);
}

#[test]
fn renamer_renamed_entity_frees_its_number() {
    let mut renamer = Renamer::with_history(history(), RenameConfig::default());
    // "NumE 2137" is entity 7
    renamer.record(7, "Something else");
    assert_eq!(renamer.propose("NumE %d"), "NumE 1");
}
