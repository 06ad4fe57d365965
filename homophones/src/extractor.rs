//! 同音異字の抽出
//!
//! 解析器が返すトークンを正規化した読み（ひらがな）ごとにまとめ、
//! 異なる表記が2つ以上ある読みだけを同音異字として残します。

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::path::Path;

use hashbrown::HashMap;

use crate::analyzer::{Analyzer, Morpheme};
use crate::corpus::{collect_files, read_lines};
use crate::errors::Result;
use crate::kana::{contains_latin, katakana_to_hiragana};
use crate::word::Word;

/// 抽出処理の統計情報
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// 読み込んだファイル数
    pub num_files: usize,
    /// 解析した（空でない）行数
    pub num_lines: usize,
    /// 集計に使われたトークン数
    pub num_accepted: usize,
    /// 読みがない、または除外規則に該当したトークン数
    pub num_skipped: usize,
}

/// 読みをキーとした同音異字の集計器
///
/// 解析器は呼び出し側で構築して渡します。ファイルや行を順に追加し、
/// 最後に[`finish`](Self::finish)で結果を取り出します。
pub struct HomophoneExtractor<A> {
    analyzer: A,
    kana2words: HashMap<String, BTreeSet<Word>>,
    stats: ExtractStats,
}

impl<A: Analyzer> HomophoneExtractor<A> {
    /// 新しい集計器を作成します。
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            kana2words: HashMap::new(),
            stats: ExtractStats::default(),
        }
    }

    /// 1行を解析して集計に加えます。空行は解析しません。
    pub fn add_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.stats.num_lines += 1;
        for morpheme in self.analyzer.analyze(line) {
            if self.insert(morpheme) {
                self.stats.num_accepted += 1;
            } else {
                self.stats.num_skipped += 1;
            }
        }
    }

    /// ファイルのすべての行を集計に加えます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない、または読み込み中にI/Oエラーが発生した場合にエラーを返します。
    /// デコードできないバイト列はエラーになりません。
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "scanning");
        for line in read_lines(path)? {
            self.add_line(&line?);
        }
        self.stats.num_files += 1;
        Ok(())
    }

    /// これまでの統計情報
    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    /// 表記が1つしかない読みを取り除き、結果を返します。
    pub fn finish(self) -> Homophones {
        let kana2words = self
            .kana2words
            .into_iter()
            .filter(|(_, words)| words.len() > 1)
            .collect();
        Homophones { kana2words }
    }

    /// トークンを集計に加え、加えた場合は`true`を返します。
    fn insert(&mut self, morpheme: Morpheme) -> bool {
        let Morpheme {
            surface,
            pos,
            reading,
        } = morpheme;
        let Some(katakana) = reading else {
            return false;
        };
        let hiragana = katakana_to_hiragana(&katakana);
        // 読みと同じ仮名表記、ラテン文字を含む表記は除外
        if surface == katakana || surface == hiragana || contains_latin(&surface) {
            return false;
        }
        self.kana2words
            .entry(hiragana)
            .or_default()
            .insert(Word::new(surface, pos));
        true
    }
}

/// ディレクトリ内の全ファイルから同音異字を抽出します。
///
/// # 引数
///
/// * `input_dir` - 抽出元のファイルが格納されたディレクトリ
/// * `analyzer` - 形態素解析器
///
/// # エラー
///
/// ディレクトリの走査やファイルの読み込みに失敗した場合にエラーを返します。
pub fn extract_homophones<P, A>(input_dir: P, analyzer: A) -> Result<Homophones>
where
    P: AsRef<Path>,
    A: Analyzer,
{
    let mut extractor = HomophoneExtractor::new(analyzer);
    for path in collect_files(input_dir)? {
        extractor.add_file(path)?;
    }
    Ok(extractor.finish())
}

/// 読み（ひらがな）をキーとした同音異字
///
/// すべての読みは2つ以上の異なる[`Word`]を持ちます。読みの昇順に走査されます。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Homophones {
    kana2words: BTreeMap<String, BTreeSet<Word>>,
}

impl Homophones {
    /// 読みの数
    pub fn len(&self) -> usize {
        self.kana2words.len()
    }

    /// 同音異字が1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.kana2words.is_empty()
    }

    /// 読みに対応する単語の集合を取得します。
    pub fn get(&self, kana: &str) -> Option<&BTreeSet<Word>> {
        self.kana2words.get(kana)
    }

    /// 読みの昇順に走査するイテレータ
    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<Word>> {
        self.kana2words.iter()
    }
}

impl<'a> IntoIterator for &'a Homophones {
    type Item = (&'a String, &'a BTreeSet<Word>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<Word>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
