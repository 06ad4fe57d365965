//! 同音異字のTSV出力
//!
//! 1行に1つの読みを`読み<TAB>表記1 表記2 ...`の形式で書き出します。
//! 読みも表記も昇順に並びます。

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::extractor::Homophones;

/// 出力する品詞の絞り込み
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosFilter {
    /// 絞り込まない
    All,
    /// 名詞
    Noun,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 副詞
    Adverb,
}

impl PosFilter {
    /// 1回の実行で出力するすべての絞り込み
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
    ];

    /// 絞り込みに使う品詞タグ。`All`の場合は`None`
    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Noun => Some("名詞"),
            Self::Verb => Some("動詞"),
            Self::Adjective => Some("形容詞"),
            Self::Adverb => Some("副詞"),
        }
    }

    /// 出力ファイル名
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::All => "homophones.tsv",
            Self::Noun => "homophones_noun.tsv",
            Self::Verb => "homophones_verb.tsv",
            Self::Adjective => "homophones_adj.tsv",
            Self::Adverb => "homophones_adv.tsv",
        }
    }

    #[inline(always)]
    fn matches(&self, pos: &str) -> bool {
        self.tag().is_none_or(|tag| tag == pos)
    }
}

/// 同音異字をライターに書き出します。
///
/// 絞り込み後に異なる表記が2つ未満になった読みは出力しません。
///
/// # 戻り値
///
/// 書き出した行数
///
/// # エラー
///
/// 書き込みに失敗した場合にエラーを返します。
pub fn write_homophones<W: Write>(
    homophones: &Homophones,
    mut wtr: W,
    filter: PosFilter,
) -> Result<usize> {
    let mut num_lines = 0;
    for (kana, words) in homophones {
        let surfaces: BTreeSet<&str> = words
            .iter()
            .filter(|w| filter.matches(w.pos()))
            .map(|w| w.surface())
            .collect();
        if surfaces.len() <= 1 {
            continue;
        }
        wtr.write_all(kana.as_bytes())?;
        wtr.write_all(b"\t")?;
        for (i, surface) in surfaces.into_iter().enumerate() {
            if i != 0 {
                wtr.write_all(b" ")?;
            }
            wtr.write_all(surface.as_bytes())?;
        }
        wtr.write_all(b"\n")?;
        num_lines += 1;
    }
    Ok(num_lines)
}

/// 同音異字をファイルに保存します。既存のファイルは上書きされます。
///
/// # 戻り値
///
/// 書き出した行数
///
/// # エラー
///
/// ファイルの作成や書き込みに失敗した場合にエラーを返します。
pub fn save_homophones<P: AsRef<Path>>(
    homophones: &Homophones,
    output_path: P,
    filter: PosFilter,
) -> Result<usize> {
    let mut wtr = BufWriter::new(File::create(output_path)?);
    let num_lines = write_homophones(homophones, &mut wtr, filter)?;
    wtr.flush()?;
    Ok(num_lines)
}

/// [`PosFilter::ALL`]のそれぞれについてディレクトリにファイルを保存します。
///
/// # 戻り値
///
/// 保存したファイルのパスと行数の組
///
/// # エラー
///
/// ファイルの作成や書き込みに失敗した場合にエラーを返します。
/// それまでに保存したファイルはそのまま残ります。
pub fn save_all<P: AsRef<Path>>(
    homophones: &Homophones,
    output_dir: P,
) -> Result<Vec<(PathBuf, usize)>> {
    let output_dir = output_dir.as_ref();
    let mut saved = Vec::with_capacity(PosFilter::ALL.len());
    for filter in PosFilter::ALL {
        let path = output_dir.join(filter.file_name());
        let num_lines = save_homophones(homophones, &path, filter)?;
        tracing::info!(path = %path.display(), lines = num_lines, "saved homophones");
        saved.push((path, num_lines));
    }
    Ok(saved)
}
