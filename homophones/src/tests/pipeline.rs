//! スクリプト化した解析器による抽出から出力までのテスト

use std::collections::BTreeSet;
use std::fs;

use tempfile::tempdir;

use super::utils::{read_output, write_file, ScriptedAnalyzer};
use crate::errors::HomophoneError;
use crate::extractor::{extract_homophones, HomophoneExtractor};
use crate::writer::{save_all, write_homophones, PosFilter};

const N: &str = "名詞";
const V: &str = "動詞";
const ADJ: &str = "形容詞";
const ADV: &str = "副詞";
const P: &str = "助詞";

fn corpus_analyzer() -> ScriptedAnalyzer {
    ScriptedAnalyzer::default()
        .line(
            "彼は橋を渡った",
            &[
                ("彼", N, Some("カレ")),
                ("は", P, Some("ハ")),
                ("橋", N, Some("ハシ")),
                ("を", P, Some("ヲ")),
                ("渡っ", V, Some("ワタッ")),
                ("た", "助動詞", Some("タ")),
            ],
        )
        .line(
            "箸で食べた",
            &[
                ("箸", N, Some("ハシ")),
                ("で", P, Some("デ")),
                ("食べ", V, Some("タベ")),
                ("た", "助動詞", Some("タ")),
            ],
        )
        .line(
            "端を切る",
            &[
                ("端", N, Some("ハシ")),
                ("を", P, Some("ヲ")),
                ("切る", V, Some("キル")),
            ],
        )
        .line("着る服", &[("着る", V, Some("キル")), ("服", N, Some("フク"))])
        .line("よく聞く", &[("よく", ADV, Some("ヨク")), ("聞く", V, Some("キク"))])
        .line(
            "菊が効く",
            &[
                ("菊", N, Some("キク")),
                ("が", P, Some("ガ")),
                ("効く", V, Some("キク")),
            ],
        )
        .line(
            "熱い湯と暑い日",
            &[
                ("熱い", ADJ, Some("アツイ")),
                ("湯", N, Some("ユ")),
                ("と", P, Some("ト")),
                ("暑い", ADJ, Some("アツイ")),
                ("日", N, Some("ヒ")),
            ],
        )
        .line("厚い本", &[("厚い", ADJ, Some("アツイ")), ("本", N, Some("ホン"))])
        .line("既に已に", &[("既に", ADV, Some("スデニ")), ("已に", ADV, Some("スデニ"))])
        .line(
            "PCとピーシー、",
            &[
                ("PC", N, Some("ピーシー")),
                ("と", P, Some("ト")),
                ("ピーシー", N, Some("ピーシー")),
                ("、", "記号", None),
            ],
        )
}

fn write_corpus(root: &std::path::Path) {
    write_file(root, "AA/wiki_00", "彼は橋を渡った\n箸で食べた\n".as_bytes());
    write_file(
        root,
        "AB/wiki_00",
        "端を切る\r\n\n  着る服  \nよく聞く\n菊が効く\n".as_bytes(),
    );
    write_file(
        root,
        "AB/wiki_01",
        "熱い湯と暑い日\n厚い本\n既に已に\nPCとピーシー、".as_bytes(),
    );
}

const EXPECTED_ALL: &str = "あつい\t厚い 暑い 熱い
きく\t効く 聞く 菊
きる\t切る 着る
すでに\t已に 既に
はし\t橋 端 箸
";

#[test]
fn test_extract_and_save_all() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_corpus(input.path());

    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();
    assert_eq!(homophones.len(), 5);

    let saved = save_all(&homophones, output.path()).unwrap();
    let lines: Vec<_> = saved.iter().map(|(_, n)| *n).collect();
    assert_eq!(lines, vec![5, 1, 2, 1, 1]);

    assert_eq!(read_output(output.path(), "homophones.tsv"), EXPECTED_ALL);
    assert_eq!(
        read_output(output.path(), "homophones_noun.tsv"),
        "はし\t橋 端 箸\n"
    );
    assert_eq!(
        read_output(output.path(), "homophones_verb.tsv"),
        "きく\t効く 聞く\nきる\t切る 着る\n"
    );
    assert_eq!(
        read_output(output.path(), "homophones_adj.tsv"),
        "あつい\t厚い 暑い 熱い\n"
    );
    assert_eq!(
        read_output(output.path(), "homophones_adv.tsv"),
        "すでに\t已に 既に\n"
    );
}

#[test]
fn test_extract_is_idempotent() {
    let input = tempdir().unwrap();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    write_corpus(input.path());

    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();
    save_all(&homophones, first.path()).unwrap();
    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();
    save_all(&homophones, second.path()).unwrap();

    for filter in PosFilter::ALL {
        let a = fs::read(first.path().join(filter.file_name())).unwrap();
        let b = fs::read(second.path().join(filter.file_name())).unwrap();
        assert_eq!(a, b, "{}", filter.file_name());
    }
}

#[test]
fn test_line_order_does_not_matter() {
    let lines = [
        "彼は橋を渡った",
        "箸で食べた",
        "端を切る",
        "着る服",
        "よく聞く",
        "菊が効く",
        "熱い湯と暑い日",
        "厚い本",
        "既に已に",
    ];

    let mut forward = HomophoneExtractor::new(corpus_analyzer());
    lines.iter().for_each(|l| forward.add_line(l));
    let mut backward = HomophoneExtractor::new(corpus_analyzer());
    lines.iter().rev().for_each(|l| backward.add_line(l));

    assert_eq!(forward.finish(), backward.finish());
}

#[test]
fn test_every_output_line_has_two_surfaces() {
    let input = tempdir().unwrap();
    write_corpus(input.path());
    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();

    for filter in PosFilter::ALL {
        let mut buf = vec![];
        write_homophones(&homophones, &mut buf, filter).unwrap();
        for line in String::from_utf8(buf).unwrap().lines() {
            let (_, surfaces) = line.split_once('\t').unwrap();
            let surfaces: BTreeSet<_> = surfaces.split(' ').collect();
            assert!(surfaces.len() >= 2, "{line}");
        }
    }
}

#[test]
fn test_filtered_groups_are_subsets() {
    let input = tempdir().unwrap();
    write_corpus(input.path());
    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();

    let parse = |filter: PosFilter| {
        let mut buf = vec![];
        write_homophones(&homophones, &mut buf, filter).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|line| {
                let (kana, surfaces) = line.split_once('\t').unwrap();
                let surfaces: BTreeSet<String> =
                    surfaces.split(' ').map(str::to_string).collect();
                (kana.to_string(), surfaces)
            })
            .collect::<Vec<_>>()
    };

    let all = parse(PosFilter::All);
    for filter in &PosFilter::ALL[1..] {
        for (kana, surfaces) in parse(*filter) {
            let (_, unfiltered) = all.iter().find(|(k, _)| *k == kana).unwrap();
            assert!(surfaces.is_subset(unfiltered), "{kana}");
        }
    }
}

#[test]
fn test_self_reading_and_latin_are_excluded() {
    let input = tempdir().unwrap();
    write_corpus(input.path());
    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();

    assert!(homophones.get("ぴーしー").is_none());
    for (_, words) in &homophones {
        for word in words {
            assert_ne!(word.surface(), "ピーシー");
            assert_ne!(word.surface(), "PC");
            assert_ne!(word.surface(), "は");
        }
    }
}

#[test]
fn test_single_form_corpus_writes_empty_files() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_file(input.path(), "wiki_00", "彼は橋を渡った\n".as_bytes());
    write_file(input.path(), "wiki_01", "彼は橋を渡った\n着る服\n".as_bytes());

    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();
    assert!(homophones.is_empty());

    let saved = save_all(&homophones, output.path()).unwrap();
    assert_eq!(saved.len(), 5);
    for (path, num_lines) in saved {
        assert_eq!(num_lines, 0);
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}

#[test]
fn test_same_surface_with_two_pos_is_not_written() {
    let analyzer = ScriptedAnalyzer::default()
        .line("掛け", &[("掛け", N, Some("カケ"))])
        .line("掛ける", &[("掛け", V, Some("カケ")), ("る", V, Some("ル"))]);
    let mut extractor = HomophoneExtractor::new(analyzer);
    extractor.add_line("掛け");
    extractor.add_line("掛ける");
    let homophones = extractor.finish();
    assert_eq!(homophones.len(), 1);

    for filter in PosFilter::ALL {
        let mut buf = vec![];
        assert_eq!(write_homophones(&homophones, &mut buf, filter).unwrap(), 0);
        assert!(buf.is_empty());
    }
}

#[test]
fn test_invalid_bytes_and_empty_lines() {
    let input = tempdir().unwrap();
    write_file(input.path(), "wiki_00", b"\n\n\xe6\xa9\x8b\xff\n\n");

    let analyzer = ScriptedAnalyzer::default()
        .line("橋\u{FFFD}", &[("橋", N, Some("ハシ")), ("\u{FFFD}", "記号", None)]);
    let mut extractor = HomophoneExtractor::new(analyzer);
    for path in crate::corpus::collect_files(input.path()).unwrap() {
        extractor.add_file(path).unwrap();
    }
    let stats = extractor.stats();
    assert_eq!(stats.num_files, 1);
    assert_eq!(stats.num_lines, 1);
    assert_eq!(stats.num_accepted, 1);
    assert_eq!(stats.num_skipped, 1);
}

#[test]
fn test_missing_input_dir() {
    let dir = tempdir().unwrap();
    let result = extract_homophones(dir.path().join("text"), ScriptedAnalyzer::default());
    assert!(matches!(result, Err(HomophoneError::NotADirectory(_))));
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    let input = tempdir().unwrap();
    write_corpus(input.path());
    let homophones = extract_homophones(input.path(), corpus_analyzer()).unwrap();

    let result = save_all(&homophones, dir.path().join("missing/dir"));
    assert!(matches!(result, Err(HomophoneError::Io(_))));
}
