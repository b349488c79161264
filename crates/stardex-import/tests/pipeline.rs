//! Full-pipeline tests over a synthetic dump file

use stardex_domain::{Category, Record};
use stardex_dump::DumpReader;
use stardex_import::{ImportConfig, Importer, NumberPolicy};
use stardex_store::{MemoryStore, SeriesCatalog};
use std::io::Write;
use tempfile::NamedTempFile;

fn page(title: &str, text: &str) -> String {
    format!(
        "  <page>\n    <title>{title}</title>\n    <revision><text>{text}</text></revision>\n  </page>\n"
    )
}

fn dump(pages: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "<mediawiki>").unwrap();
    writeln!(file, "  <siteinfo><sitename>Memory Alpha</sitename></siteinfo>").unwrap();
    for p in pages {
        file.write_all(p.as_bytes()).unwrap();
    }
    writeln!(file, "</mediawiki>").unwrap();
    file.flush().unwrap();
    file
}

fn run(file: &NamedTempFile) -> (MemoryStore, stardex_domain::ImportStats) {
    run_with(file, ImportConfig::default())
}

fn run_with(
    file: &NamedTempFile,
    config: ImportConfig,
) -> (MemoryStore, stardex_domain::ImportStats) {
    let mut importer = Importer::with_config(MemoryStore::new(), SeriesCatalog::seeded(), config);
    let reader = DumpReader::open(file.path()).unwrap();
    let stats = importer.run(reader).unwrap();
    let (store, _) = importer.into_parts();
    (store, stats)
}

#[test]
fn units_without_templates_do_not_affect_counts() {
    let file = dump(&[
        page("Warp drive", "Prose about propulsion, no template."),
        page("Caretaker (episode)", EPISODE_CARETAKER),
        page("Subspace", "More prose. {{unrelated|template}}"),
    ]);
    let (store, stats) = run(&file);

    assert_eq!(stats.units_seen, 3);
    assert_eq!(stats.units_without_sidebar, 2);
    assert_eq!(stats.count(Category::Episode), 1);
    assert_eq!(store.len(), 1);
}

const EPISODE_CARETAKER: &str = "{{sidebar episode|
|sSeries = [[VOY]]
|nSeason = 1
|nEpisode = 01/02
|sProductionSerialNumber = 40840-721
|nSerialAirdate = 19950116
}}";

#[test]
fn compact_air_date_normalized_end_to_end() {
    let file = dump(&[page("Caretaker (episode)", EPISODE_CARETAKER)]);
    let (store, _) = run(&file);

    let Record::Episode(episode) = store.records().next().unwrap() else {
        panic!("expected an episode record");
    };
    assert_eq!(episode.title, "Caretaker");
    assert_eq!(episode.air_date.as_deref(), Some("1995-01-16"));
    // Multi-part episode number coerces to 0 under the default policy
    assert_eq!(episode.episode_num, 0);
    assert_eq!(episode.season_num, 1);
}

#[test]
fn species_quadrants_folded() {
    let file = dump(&[page(
        "Vulcan",
        "{{sidebar species|
|Type = Humanoid
|Quadrant = Alpha Quadrant &amp; Beta Quadrant
|Planet = [[Vulcan (planet)|Vulcan]]
}}",
    )]);
    let (store, _) = run(&file);

    let Record::Species(species) = store.records().next().unwrap() else {
        panic!("expected a species record");
    };
    assert_eq!(species.quadrants, vec!["alpha", "beta"]);
    assert_eq!(species.planets, vec!["Vulcan (planet)"]);
    assert_eq!(species.kind.as_deref(), Some("humanoid"));
}

#[test]
fn starship_name_derived_from_title() {
    let file = dump(&[page(
        "USS Enterprise (NCC-1701)",
        "{{sidebar starship|
|Class = [[Constitution class|Constitution]]
|Registry = NCC-1701
|Status = Destroyed
|Datestatus = 2285
}}",
    )]);
    let (store, _) = run(&file);

    let Record::Starship(ship) = store.records().next().unwrap() else {
        panic!("expected a starship record");
    };
    assert_eq!(ship.name, "USS Enterprise");
    assert_eq!(ship.class.as_deref(), Some("Constitution"));
    assert_eq!(ship.status, vec!["Destroyed"]);
}

#[test]
fn starship_class_imported() {
    let file = dump(&[page(
        "Galaxy class",
        "{{sidebar starship class|
|owner = [[United Federation of Planets]]
|operator = [[Starfleet]]
|Armament = Phasers, Photon torpedoes
|Decks = 42 <!-- count varies -->
}}",
    )]);
    let (store, _) = run(&file);

    let Record::StarshipClass(class) = store.records().next().unwrap() else {
        panic!("expected a starship class record");
    };
    assert_eq!(class.name, "Galaxy");
    assert_eq!(class.owners, vec!["United Federation of Planets"]);
    assert_eq!(class.armaments, vec!["Phasers", "Photon torpedoes"]);
    assert_eq!(class.decks.as_deref(), Some("42"));
}

#[test]
fn malformed_unit_does_not_break_the_next_one() {
    let malformed = "{{sidebar episode|
|sSeries = [[Unknown Series]]
|nSeason = 1
|nEpisode = 1
}}";
    let file = dump(&[
        page("Broken (episode)", malformed),
        page("Caretaker (episode)", EPISODE_CARETAKER),
    ]);
    let (_, stats) = run(&file);

    assert_eq!(stats.build_failures, 1);
    assert_eq!(stats.count(Category::Episode), 1);
}

#[test]
fn run_is_deterministic() {
    let file = dump(&[
        page("Caretaker (episode)", EPISODE_CARETAKER),
        page("Vulcan", "{{sidebar species|\n|Quadrant = Alpha Quadrant\n}}"),
        page("Talk:Ignored", "{{sidebar episode|\n|sSeries = VOY\n}}"),
        page("Prose", "No template."),
    ]);
    let (_, first) = run(&file);
    let (_, second) = run(&file);

    assert_eq!(first.counts, second.counts);
    assert_eq!(first.units_seen, second.units_seen);
    assert_eq!(first.units_ignored, 1);
}

#[test]
fn strict_policy_rejects_multipart_numbers() {
    let file = dump(&[page("Caretaker (episode)", EPISODE_CARETAKER)]);
    let (store, stats) = run_with(&file, ImportConfig::strict());

    assert_eq!(stats.build_failures, 1);
    assert_eq!(stats.count(Category::Episode), 0);
    assert!(store.is_empty());
}

#[test]
fn category_allowlist_limits_the_run() {
    let file = dump(&[
        page("Caretaker (episode)", EPISODE_CARETAKER),
        page("Vulcan", "{{sidebar species|\n|Quadrant = Alpha Quadrant\n}}"),
    ]);
    let config = ImportConfig {
        categories: vec![Category::Species],
        number_policy: NumberPolicy::CoerceToZero,
    };
    let (store, stats) = run_with(&file, config);

    assert_eq!(stats.count(Category::Species), 1);
    assert_eq!(store.records_of(Category::Episode).count(), 0);
    assert_eq!(stats.counts.len(), 1);
}
